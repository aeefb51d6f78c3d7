//! The ordered verification checks.
//!
//! Applied in a fixed order, short-circuiting on the first failure:
//!
//! 1. A candidate must be present; absence is distinct from emptiness.
//! 2. If an empty result is expected, any non-empty candidate fails.
//! 3. Node set and pairwise times are re-derived from the connections.
//! 4. The candidate must cover the node set exactly (rejects omissions,
//!    duplicates and unknown names in one pass).
//! 5. Every consecutive pair must have a recorded connection.
//! 6. The summed travel time must not exceed the budget.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use busybee_graph::Connection;

/// Typed verification failure.
///
/// The `Display` form is the reason string handed to harnesses; callers
/// record it against the test case and continue; verification failures are
/// recoverable by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// No candidate was supplied at all.
    MissingCandidate,
    /// An empty path was expected but the candidate is non-empty.
    ExpectedEmptyPath,
    /// The candidate length differs from the distinct node count.
    IncompleteVisit { expected: usize, actual: usize },
    /// The candidate has the right length but repeats a flower.
    DuplicateVisit,
    /// Two consecutive flowers have no recorded connection.
    IllegalConnection { from: String, to: String },
    /// The walked travel time exceeds the budget.
    BudgetExceeded { total: u64, budget: u32 },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCandidate => write!(f, "no candidate path supplied"),
            Self::ExpectedEmptyPath => write!(f, "the path must be empty"),
            Self::IncompleteVisit { expected, actual } => {
                write!(f, "all flowers must be visited (expected {expected}, got {actual})")
            }
            Self::DuplicateVisit => write!(f, "the path visits a flower more than once"),
            Self::IllegalConnection { from, to } => {
                write!(f, "illegal connection {from} to {to}")
            }
            Self::BudgetExceeded { total, budget } => {
                write!(f, "not within time limit ({total} > {budget})")
            }
        }
    }
}

impl std::error::Error for VerifyError {}

/// Certify a candidate path against the original connection list.
///
/// `candidate` distinguishes the absent case (`None`, a hard failure) from
/// the empty path (a legitimate "no solution" result when `expect_empty`
/// is set). The checks run in the documented order and stop at the first
/// failure.
///
/// # Errors
///
/// Returns the first failed check as a [`VerifyError`].
pub fn verify(
    candidate: Option<&[String]>,
    connections: &[Connection],
    budget: u32,
    expect_empty: bool,
) -> Result<(), VerifyError> {
    let Some(path) = candidate else {
        return Err(VerifyError::MissingCandidate);
    };
    if expect_empty {
        return if path.is_empty() {
            Ok(())
        } else {
            Err(VerifyError::ExpectedEmptyPath)
        };
    }

    let mut all_nodes: BTreeSet<&str> = BTreeSet::new();
    let mut times: BTreeMap<(&str, &str), u32> = BTreeMap::new();
    for connection in connections {
        all_nodes.insert(connection.a.as_str());
        all_nodes.insert(connection.b.as_str());
        times.insert((connection.a.as_str(), connection.b.as_str()), connection.time);
        times.insert((connection.b.as_str(), connection.a.as_str()), connection.time);
    }

    if path.len() != all_nodes.len() {
        return Err(VerifyError::IncompleteVisit {
            expected: all_nodes.len(),
            actual: path.len(),
        });
    }
    for name in path {
        all_nodes.remove(name.as_str());
    }
    if !all_nodes.is_empty() {
        // Right length but leftovers: some flower was visited twice in
        // place of another (this also covers unknown names).
        return Err(VerifyError::DuplicateVisit);
    }

    let mut total: u64 = 0;
    for pair in path.windows(2) {
        match times.get(&(pair[0].as_str(), pair[1].as_str())) {
            Some(&step) => total += u64::from(step),
            None => {
                return Err(VerifyError::IllegalConnection {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                });
            }
        }
    }
    if total > u64::from(budget) {
        return Err(VerifyError::BudgetExceeded { total, budget });
    }
    Ok(())
}

/// Adapter to the plain data contract: `None` on success, the reason
/// string on failure.
#[must_use]
pub fn verify_reason(
    candidate: Option<&[String]>,
    connections: &[Connection],
    budget: u32,
    expect_empty: bool,
) -> Option<String> {
    verify(candidate, connections, budget, expect_empty)
        .err()
        .map(|e| e.to_string())
}
