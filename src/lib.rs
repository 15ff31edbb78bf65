//! # Epitrace
//!
//! In-memory contact-trace index and transitive exposure simulation.
//!
//! Epitrace maintains a dataset of pairwise, timestamped contact events
//! ("traces") between people and answers two kinds of questions:
//!
//! 1. **Direct lookups** - when and with whom a person was in contact
//! 2. **Exposure simulation** - who could have contracted an infection
//!    introduced at a person and time, propagated through subsequent
//!    contacts subject to an incubation delay
//!
//! ## Quick Start
//!
//! ```
//! use epitrace::prelude::*;
//!
//! let mut tracer = ContactTracer::new();
//! tracer.add_trace(&Trace::new("Alice", "Bob", 100))?;
//! tracer.add_trace(&Trace::new("Bob", "Carol", 200))?;
//!
//! // Direct lookups
//! assert_eq!(tracer.contact_times("Alice", "Bob"), vec![100]);
//! assert!(tracer.contacts("Bob").contains("Alice"));
//!
//! // Exposure simulation: Alice contagious from t=0
//! let exposed = tracer.contact_trace("Alice", 0);
//! assert!(exposed.contains("Bob"));
//! assert!(exposed.contains("Carol"));
//! # Ok::<(), epitrace::Error>(())
//! ```
//!
//! ## Layering
//!
//! - [`TraceIndex`] - validated, idempotent ingestion and direct lookups
//! - [`TransmissionSimulator`] - time-ordered propagation over an index
//! - [`ContactTracer`] - entry struct bundling both behind a string-keyed
//!   convenience API
//!
//! The library is single-threaded and synchronous: no operation suspends,
//! blocks, or spawns background work, and no state outlives the owning
//! value. A built index can be shared read-only across threads; concurrent
//! writers must be serialized by the caller.

#![warn(missing_docs)]

mod tracer;

pub mod prelude;

// Re-export main entry points
pub use tracer::ContactTracer;

// Re-export the typed layers
pub use epitrace_core::{Error, PersonId, Result, Timestamp, Trace};
pub use epitrace_engine::{TransmissionSimulator, INCUBATION_WINDOW};
pub use epitrace_index::TraceIndex;
