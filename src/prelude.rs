//! Convenient imports for Epitrace.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```
//! use epitrace::prelude::*;
//!
//! let mut tracer = ContactTracer::new();
//! tracer.add_trace(&Trace::new("Alice", "Bob", 100))?;
//! # Ok::<(), epitrace::Error>(())
//! ```

// Main entry point
pub use crate::tracer::ContactTracer;

// Error handling
pub use epitrace_core::{Error, Result};

// Core types
pub use epitrace_core::{PersonId, Timestamp, Trace};

// Typed layers
pub use epitrace_engine::{TransmissionSimulator, INCUBATION_WINDOW};
pub use epitrace_index::TraceIndex;
