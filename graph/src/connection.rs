//! `Connection`: an unordered weighted pair of flower names.

use std::cmp::Ordering;
use std::fmt;

/// A connection between two flowers of the field.
///
/// Curiously, the flowers have names; they are uniquely identified by them.
/// The pair is unordered: `(a, b, t)` and `(b, a, t)` describe the same
/// connection. Travel time is a non-negative integer; a true zero-weight
/// edge cannot be represented because `0` in the distance matrix is the
/// "no direct edge" sentinel (see [`crate::FieldGraph`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Name of the first flower.
    pub a: String,
    /// Name of the second flower.
    pub b: String,
    /// Travel time between the two flowers.
    pub time: u32,
}

impl Connection {
    /// Create a connection between `a` and `b` with the given travel time.
    pub fn new(a: impl Into<String>, b: impl Into<String>, time: u32) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            time,
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.a, self.b, self.time)
    }
}

impl PartialOrd for Connection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Connection {
    /// Order by `(a, b, time)` so connection lists sort deterministically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.a
            .cmp(&other.a)
            .then_with(|| self.b.cmp(&other.b))
            .then_with(|| self.time.cmp(&other.time))
    }
}
