//! Propagation engine for the contact-trace dataset
//!
//! This crate implements the time-ordered transmission simulation:
//! - TransmissionSimulator: transitive exposure over an indexed dataset
//! - Strict incubation-window gating of every transmission edge
//! - Same-timestamp chaining through newly infected carriers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod simulator;

pub use simulator::{TransmissionSimulator, INCUBATION_WINDOW};
