//! In-memory indices over contact events
//!
//! Three indices are maintained in lockstep:
//! - time → (person → partner set): who met whom at exactly that instant
//! - person → sorted timestamp set: when that person appears at all
//! - sorted set of all distinct timestamps, for ascending traversal
//!
//! # Design
//!
//! - FxHashMap/FxHashSet: O(1) lookups, fast non-crypto hash
//! - BTreeSet for timestamps: ascending iteration and range scans without
//!   re-sorting per query
//! - Partner storage is set-valued per (timestamp, person): a person may have
//!   several distinct contacts recorded at the same instant and all of them
//!   must be retrievable

use epitrace_core::{Error, PersonId, Result, Timestamp, Trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Index over a dataset of pairwise, timestamped contact events.
///
/// Traces are append-only: the index is built incrementally via
/// [`add_trace`](TraceIndex::add_trace) (or in bulk via
/// [`from_traces`](TraceIndex::from_traces)) and is safe to query at any
/// point, including between insertions. There is no deletion.
///
/// All queries are total: asking about a person or timestamp the index has
/// never seen yields an empty result, never an error. "Has no contacts" and
/// "is unknown" are indistinguishable by design.
///
/// # Thread Safety
///
/// The index holds no interior mutability. Mutation requires `&mut self`; a
/// built index can be shared read-only across threads (`&TraceIndex` is
/// `Send + Sync`). Callers that need concurrent writers must serialize access
/// externally with one exclusive-writer lock around the whole index.
///
/// # Example
///
/// ```
/// use epitrace_core::{PersonId, Trace};
/// use epitrace_index::TraceIndex;
///
/// let mut index = TraceIndex::new();
/// index.add_trace(&Trace::new("Alice", "Bob", 100))?;
///
/// let alice = PersonId::new("Alice");
/// let bob = PersonId::new("Bob");
/// assert_eq!(index.contact_times(&alice, &bob), vec![100]);
/// # Ok::<(), epitrace_core::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct TraceIndex {
    /// Per timestamp, each involved person's partner set at that instant
    contacts_at: FxHashMap<Timestamp, FxHashMap<PersonId, FxHashSet<PersonId>>>,

    /// Per person, the sorted set of timestamps the person appears in
    person_times: FxHashMap<PersonId, BTreeSet<Timestamp>>,

    /// All distinct timestamps ever recorded, in ascending order
    times: BTreeSet<Timestamp>,

    /// Number of distinct (pair, time) events accepted
    trace_count: usize,
}

impl TraceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a sequence of traces
    ///
    /// Stops at the first structurally invalid trace and propagates the
    /// error; traces accepted up to that point are discarded with the
    /// partially built index.
    ///
    /// # Example
    ///
    /// ```
    /// use epitrace_core::Trace;
    /// use epitrace_index::TraceIndex;
    ///
    /// let index = TraceIndex::from_traces(vec![
    ///     Trace::new("Alice", "Bob", 100),
    ///     Trace::new("Bob", "Carol", 160),
    /// ])?;
    /// assert_eq!(index.len(), 2);
    /// # Ok::<(), epitrace_core::Error>(())
    /// ```
    pub fn from_traces(traces: impl IntoIterator<Item = Trace>) -> Result<Self> {
        let mut index = Self::new();
        for trace in traces {
            index.add_trace(&trace)?;
        }
        Ok(index)
    }

    // ========================================================================
    // Ingestion
    // ========================================================================

    /// Insert a contact event into all indices.
    ///
    /// The relation is symmetric: the event is recorded for both people.
    /// Re-adding an identical triple (in either person order) is a no-op.
    ///
    /// Validation happens before any index is touched, so a rejected trace
    /// leaves the index exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`Error::SelfContact`] if the two people are the same identifier
    /// - [`Error::NegativeTimestamp`] if the timestamp is negative
    pub fn add_trace(&mut self, trace: &Trace) -> Result<()> {
        if trace.is_self_contact() {
            return Err(Error::SelfContact {
                person: trace.person_a().clone(),
            });
        }
        let time = trace.time();
        if time < 0 {
            return Err(Error::NegativeTimestamp { time });
        }

        let a = trace.person_a();
        let b = trace.person_b();

        let by_person = self.contacts_at.entry(time).or_default();
        let newly_recorded = by_person
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        by_person.entry(b.clone()).or_default().insert(a.clone());

        if !newly_recorded {
            trace!(%trace, "duplicate trace ignored");
            return Ok(());
        }

        self.times.insert(time);
        self.person_times.entry(a.clone()).or_default().insert(time);
        self.person_times.entry(b.clone()).or_default().insert(time);
        self.trace_count += 1;

        debug!(%trace, total = self.trace_count, "trace recorded");
        Ok(())
    }

    // ========================================================================
    // Direct lookups
    // ========================================================================

    /// Ascending timestamps at which two people were in direct contact.
    ///
    /// Computed as the intersection of the two people's timestamp sets.
    /// Strictly ascending with no duplicates. Empty (never an error) if
    /// either person is unknown or the sets do not overlap.
    pub fn contact_times(&self, a: &PersonId, b: &PersonId) -> Vec<Timestamp> {
        match (self.person_times.get(a), self.person_times.get(b)) {
            (Some(times_a), Some(times_b)) => {
                // BTreeSet intersection yields ascending order
                times_a.intersection(times_b).copied().collect()
            }
            _ => Vec::new(),
        }
    }

    /// All people the given person has been in direct contact with, over the
    /// entire history of the dataset.
    ///
    /// Empty set if the person is unknown.
    pub fn contacts(&self, person: &PersonId) -> FxHashSet<PersonId> {
        self.contacts_in(person, ..)
    }

    /// All people the given person has been in direct contact with at or
    /// after the given timestamp (inclusive).
    ///
    /// Empty set if the person is unknown.
    pub fn contacts_after(&self, person: &PersonId, timestamp: Timestamp) -> FxHashSet<PersonId> {
        self.contacts_in(person, timestamp..)
    }

    /// Union of the person's partner sets over a timestamp range.
    fn contacts_in(
        &self,
        person: &PersonId,
        range: impl std::ops::RangeBounds<Timestamp>,
    ) -> FxHashSet<PersonId> {
        let mut out = FxHashSet::default();
        if let Some(times) = self.person_times.get(person) {
            for time in times.range(range) {
                out.extend(self.partners_at(*time, person).cloned());
            }
        }
        out
    }

    /// The partner set for `person` at exactly `time`.
    ///
    /// Empty iterator if the person had no recorded contact at that instant.
    #[inline]
    pub fn partners_at<'a>(
        &'a self,
        time: Timestamp,
        person: &PersonId,
    ) -> impl Iterator<Item = &'a PersonId> + 'a {
        self.contacts_at
            .get(&time)
            .and_then(|by_person| by_person.get(person))
            .into_iter()
            .flatten()
    }

    // ========================================================================
    // Timestamp traversal
    // ========================================================================

    /// All distinct timestamps ever recorded, ascending.
    ///
    /// A live view over current state: insertions made after construction are
    /// reflected, not a snapshot frozen at some earlier point.
    pub fn timestamps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.times.iter().copied()
    }

    /// Distinct timestamps at or after `from` (inclusive), ascending.
    pub fn timestamps_from(&self, from: Timestamp) -> impl Iterator<Item = Timestamp> + '_ {
        self.times.range(from..).copied()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of distinct contact events accepted
    pub fn len(&self) -> usize {
        self.trace_count
    }

    /// Whether the index holds no events
    pub fn is_empty(&self) -> bool {
        self.trace_count == 0
    }

    /// Number of distinct people appearing in any trace
    pub fn person_count(&self) -> usize {
        self.person_times.len()
    }

    /// Number of distinct timestamps recorded
    pub fn timestamp_count(&self) -> usize {
        self.times.len()
    }

    /// Whether the person appears in any trace
    #[inline]
    pub fn contains_person(&self, person: &PersonId) -> bool {
        self.person_times.contains_key(person)
    }

    /// All people appearing in any trace (no particular order)
    pub fn people(&self) -> impl Iterator<Item = &PersonId> {
        self.person_times.keys()
    }
}
