//! Main entry point for Epitrace.
//!
//! This module provides the `ContactTracer` struct, the primary entry point
//! for ingesting traces and running queries without handling the typed
//! layers directly.

use epitrace_core::{PersonId, Result, Timestamp, Trace};
use epitrace_engine::TransmissionSimulator;
use epitrace_index::TraceIndex;
use rustc_hash::FxHashSet;

/// The contact tracer.
///
/// Owns a [`TraceIndex`] and exposes a string-keyed surface over it, so
/// callers can pass `&str` names instead of constructing [`PersonId`] values
/// by hand. For the typed surface (and for borrowing the index into a
/// custom [`TransmissionSimulator`]), use [`ContactTracer::index`].
///
/// Each `ContactTracer` is fully independent: there is no process-wide
/// state, and any number of instances can be built and queried side by
/// side.
///
/// # Example
///
/// ```
/// use epitrace::prelude::*;
///
/// let mut tracer = ContactTracer::new();
/// tracer.add_trace(&Trace::new("Alice", "Bob", 100))?;
///
/// let exposed = tracer.contact_trace("Alice", 0);
/// assert!(exposed.contains("Bob"));
/// # Ok::<(), epitrace::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct ContactTracer {
    index: TraceIndex,
}

impl ContactTracer {
    /// Create a tracer with no recorded traces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracer populated from a sequence of traces.
    ///
    /// Stops at the first structurally invalid trace and propagates the
    /// error.
    ///
    /// # Example
    ///
    /// ```
    /// use epitrace::prelude::*;
    ///
    /// let tracer = ContactTracer::with_traces(vec![
    ///     Trace::new("Alice", "Bob", 100),
    ///     Trace::new("Bob", "Carol", 200),
    /// ])?;
    /// assert_eq!(tracer.index().len(), 2);
    /// # Ok::<(), epitrace::Error>(())
    /// ```
    pub fn with_traces(traces: impl IntoIterator<Item = Trace>) -> Result<Self> {
        Ok(Self {
            index: TraceIndex::from_traces(traces)?,
        })
    }

    /// Record a contact trace.
    ///
    /// Re-adding an identical triple is a no-op.
    ///
    /// # Errors
    ///
    /// Rejects self-contact traces and negative timestamps; the index is
    /// unchanged on rejection.
    pub fn add_trace(&mut self, trace: &Trace) -> Result<()> {
        self.index.add_trace(trace)
    }

    /// Ascending timestamps at which two people were in direct contact.
    ///
    /// Empty if either person is unknown or they never met.
    pub fn contact_times(&self, person_a: &str, person_b: &str) -> Vec<Timestamp> {
        self.index
            .contact_times(&PersonId::from(person_a), &PersonId::from(person_b))
    }

    /// All people the given person has been in direct contact with.
    ///
    /// Empty set if the person is unknown.
    pub fn contacts(&self, person: &str) -> FxHashSet<PersonId> {
        self.index.contacts(&PersonId::from(person))
    }

    /// All direct contacts of the person at or after the given timestamp
    /// (inclusive).
    ///
    /// Empty set if the person is unknown.
    pub fn contacts_after(&self, person: &str, timestamp: Timestamp) -> FxHashSet<PersonId> {
        self.index.contacts_after(&PersonId::from(person), timestamp)
    }

    /// Everyone who may have contracted the disease, originating from
    /// `origin` becoming contagious at `contagion_time`.
    ///
    /// The origin itself is never part of the result; an unknown origin
    /// yields the empty set.
    pub fn contact_trace(&self, origin: &str, contagion_time: Timestamp) -> FxHashSet<PersonId> {
        TransmissionSimulator::new(&self.index).simulate(&PersonId::from(origin), contagion_time)
    }

    /// Borrow the underlying index.
    pub fn index(&self) -> &TraceIndex {
        &self.index
    }
}
