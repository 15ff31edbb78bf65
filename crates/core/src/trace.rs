//! The contact-trace event type
//!
//! A [`Trace`] records that two people were in direct contact at a discrete
//! instant. Traces are immutable once constructed; validation of the triple
//! (distinct people, non-negative time) happens at insertion into the index,
//! not here, so collaborators can construct and ship traces freely.

use crate::types::{PersonId, Timestamp};
use serde::{Deserialize, Serialize};

/// A recorded contact event between two people at a specific time.
///
/// The two people are unordered: `(A, B, t)` records the same event as
/// `(B, A, t)`. The relation is symmetric and the index treats both orders
/// identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trace {
    person_a: PersonId,
    person_b: PersonId,
    time: Timestamp,
}

impl Trace {
    /// Create a new contact trace
    ///
    /// # Examples
    ///
    /// ```
    /// use epitrace_core::Trace;
    ///
    /// let trace = Trace::new("Alice", "Bob", 100);
    /// assert_eq!(trace.time(), 100);
    /// ```
    pub fn new(
        person_a: impl Into<PersonId>,
        person_b: impl Into<PersonId>,
        time: Timestamp,
    ) -> Self {
        Self {
            person_a: person_a.into(),
            person_b: person_b.into(),
            time,
        }
    }

    /// First person of the pair (order carries no meaning)
    pub fn person_a(&self) -> &PersonId {
        &self.person_a
    }

    /// Second person of the pair (order carries no meaning)
    pub fn person_b(&self) -> &PersonId {
        &self.person_b
    }

    /// Instant at which the contact occurred
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// Whether the given person is one of the pair
    pub fn involves(&self, person: &PersonId) -> bool {
        self.person_a == *person || self.person_b == *person
    }

    /// The other person of the pair, if `person` is one of them
    ///
    /// Returns `None` when `person` does not appear in this trace.
    pub fn partner_of(&self, person: &PersonId) -> Option<&PersonId> {
        if self.person_a == *person {
            Some(&self.person_b)
        } else if self.person_b == *person {
            Some(&self.person_a)
        } else {
            None
        }
    }

    /// Whether the two people of the pair are the same identifier
    ///
    /// Self-contact traces are structurally invalid and rejected at
    /// insertion.
    pub fn is_self_contact(&self) -> bool {
        self.person_a == self.person_b
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {} @ {}", self.person_a, self.person_b, self.time)
    }
}
