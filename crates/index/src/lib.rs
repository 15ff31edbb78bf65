//! Index layer for the contact-trace dataset
//!
//! This crate implements the in-memory indices over contact events:
//! - TraceIndex: validated, idempotent ingestion of traces
//! - Direct lookups by person and by (person, person) pair
//! - Per-timestamp partner sets for the propagation engine
//! - Live ascending traversal of all distinct timestamps

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;

pub use index::TraceIndex;
