//! Transitive exposure simulation
//!
//! Given an origin person and the instant they became contagious, the
//! simulator walks the dataset's distinct timestamps in ascending order and
//! propagates infection along recorded contacts, gated by the incubation
//! window.
//!
//! ## Transmission rule
//!
//! A carrier `p` transmits to a partner `q` at timestamp `t` only when
//! `t > infected_since(p) + window` — strictly greater. Equality does not
//! transmit: a contact at exactly the end of the window is not a
//! transmission event.
//!
//! ## Same-timestamp chaining
//!
//! The infected list is scanned by position while it grows, so a person
//! infected earlier within one timestamp's processing is immediately
//! eligible to transmit further at that same timestamp (subject to their own
//! window, which a freshly infected person cannot yet satisfy unless the
//! window is negative).

use epitrace_core::{PersonId, Timestamp};
use epitrace_index::TraceIndex;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Minimum elapsed time after a person's own contagion instant before a
/// further contact can transmit from them. Strictly exceeded, never met.
pub const INCUBATION_WINDOW: i64 = 60;

/// Time-ordered transitive exposure simulation over a [`TraceIndex`].
///
/// The simulator borrows the index and owns no dataset state of its own;
/// it is cheap to construct per query. All of its work happens on the
/// caller's thread and runs to completion in time proportional to
/// (distinct timestamps) x (infected so far) x (average partner-set size).
///
/// # Example
///
/// ```
/// use epitrace_core::{PersonId, Trace};
/// use epitrace_engine::TransmissionSimulator;
/// use epitrace_index::TraceIndex;
///
/// let index = TraceIndex::from_traces(vec![
///     Trace::new("Alice", "Bob", 100),
///     Trace::new("Bob", "Carol", 200),
/// ])?;
///
/// let exposed = TransmissionSimulator::new(&index).simulate(&PersonId::new("Alice"), 0);
/// assert!(exposed.contains(&PersonId::new("Bob")));
/// assert!(exposed.contains(&PersonId::new("Carol")));
/// # Ok::<(), epitrace_core::Error>(())
/// ```
pub struct TransmissionSimulator<'a> {
    index: &'a TraceIndex,
    window: i64,
}

impl<'a> TransmissionSimulator<'a> {
    /// Create a simulator over the given index with the default
    /// [`INCUBATION_WINDOW`].
    pub fn new(index: &'a TraceIndex) -> Self {
        Self::with_window(index, INCUBATION_WINDOW)
    }

    /// Create a simulator with a non-default incubation window.
    ///
    /// The transmission rule is unchanged: a contact at `t` transmits from a
    /// carrier infected at `s` only when `t > s + window`.
    pub fn with_window(index: &'a TraceIndex, window: i64) -> Self {
        Self { index, window }
    }

    /// The incubation window this simulator applies.
    pub fn window(&self) -> i64 {
        self.window
    }

    /// Everyone who could have been infected transitively, starting from
    /// `origin` becoming contagious at `contagion_time`.
    ///
    /// The origin itself is never part of the result. An origin with no
    /// recorded contacts (including one the index has never seen) yields the
    /// empty set; this operation cannot fail. A negative `contagion_time` is
    /// an ordinary instant.
    ///
    /// Timestamps strictly before `contagion_time` are skipped; a timestamp
    /// equal to `contagion_time` is processed, though the window test makes
    /// transmission from the origin at that instant impossible.
    pub fn simulate(&self, origin: &PersonId, contagion_time: Timestamp) -> FxHashSet<PersonId> {
        // Insertion-ordered carrier list; scanned by position so entries
        // appended mid-timestamp are seen within the same timestamp.
        let mut infected: Vec<PersonId> = vec![origin.clone()];
        let mut infected_since: FxHashMap<PersonId, Timestamp> = FxHashMap::default();
        infected_since.insert(origin.clone(), contagion_time);

        for t in self.index.timestamps_from(contagion_time) {
            let mut i = 0;
            while i < infected.len() {
                let carrier = infected[i].clone();
                i += 1;

                let Some(&since) = infected_since.get(&carrier) else {
                    continue;
                };
                if t <= since + self.window {
                    continue;
                }

                let newly_exposed: Vec<PersonId> = self
                    .index
                    .partners_at(t, &carrier)
                    .filter(|q| !infected_since.contains_key(*q))
                    .cloned()
                    .collect();

                for person in newly_exposed {
                    debug!(%carrier, %person, time = t, "transmission");
                    infected_since.insert(person.clone(), t);
                    infected.push(person);
                }
            }
        }

        infected
            .into_iter()
            .skip(1)
            .filter(|p| p != origin)
            .collect()
    }
}
