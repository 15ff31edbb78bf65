//! Core types for the contact-trace dataset
//!
//! This crate defines the fundamental types used throughout the system:
//! - [`PersonId`]: Opaque identifier for a person
//! - [`Timestamp`]: Discrete instant at which a contact occurred
//! - [`Trace`]: A single recorded contact event between two people
//! - [`Error`]: Rejection reasons for structurally invalid traces

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod trace;
pub mod types;

pub use error::{Error, Result};
pub use trace::Trace;
pub use types::{PersonId, Timestamp};
