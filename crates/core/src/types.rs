//! Identifier and timestamp types
//!
//! This module defines the two scalar types the dataset is built from:
//! - [`PersonId`]: opaque string identifier for a person
//! - [`Timestamp`]: discrete instant at which a contact occurred

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Discrete instant at which a contact occurred.
///
/// Timestamps are plain integers in whatever unit the dataset uses; the
/// system never interprets them as wall-clock time. Trace timestamps must be
/// non-negative (enforced at insertion), while simulation instants may be any
/// integer.
pub type Timestamp = i64;

/// Opaque identifier for a person.
///
/// Equality is exact string equality; no normalization or case-folding is
/// applied. PersonId is used throughout the system:
/// - As the key of the per-person timestamp index
/// - In partner sets recorded per timestamp
/// - In query results (contact sets, exposure sets)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    /// Create a PersonId from anything string-like
    ///
    /// # Examples
    ///
    /// ```
    /// use epitrace_core::PersonId;
    ///
    /// let a = PersonId::new("Alice");
    /// let b = PersonId::new(String::from("Alice"));
    /// assert_eq!(a, b);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        PersonId(name.into())
    }

    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for PersonId {
    fn from(name: &str) -> Self {
        PersonId(name.to_string())
    }
}

impl From<String> for PersonId {
    fn from(name: String) -> Self {
        PersonId(name)
    }
}

// Allows map lookups keyed by PersonId to be driven by a &str without an
// intermediate allocation.
impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
