//! `FieldGraph`: dense symmetric distance matrix with stable node indices.
//!
//! # Index assignment
//!
//! Every distinct flower name seen in the connection list gets an index
//! `0..n-1` by ascending lexicographic sort. The assignment is deterministic
//! for a given input set, which fixes the search order and tie-breaking of
//! the engines downstream.
//!
//! # Matrix semantics
//!
//! A cell value of zero off the diagonal is the sentinel for "no direct
//! edge". Connections are written in input order; if the same unordered
//! pair appears more than once, the last write wins. Both are documented
//! behavior, not errors; [`FieldGraph::build_strict`] is the opt-in
//! hardened constructor.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::connection::Connection;

/// Typed failure for strict graph construction.
///
/// The permissive [`FieldGraph::build`] never fails; these are produced by
/// [`FieldGraph::build_strict`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A connection joins a flower to itself.
    SelfLoop { node: String },
    /// The same unordered pair appears more than once in the input.
    DuplicatePair { a: String, b: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { node } => write!(f, "self-loop connection on {node}"),
            Self::DuplicatePair { a, b } => {
                write!(f, "duplicate connection between {a} and {b}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// The flower field as a read-only dense graph.
///
/// Built once per connection list; the engines consume it without mutation,
/// so one instance may be shared across concurrent searches on different
/// budgets without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGraph {
    /// Flower names, ascending; position is the node index.
    pub names: Vec<String>,
    /// Symmetric n×n travel-time matrix; `0` off-diagonal means no edge.
    pub distance: Vec<Vec<u32>>,
    /// Per-node count of neighbors with a positive matrix entry.
    pub degree: Vec<usize>,
}

impl FieldGraph {
    /// Build the field graph from a connection list.
    ///
    /// An empty list yields an empty graph (`node_count() == 0`); the
    /// engines treat that as an immediate empty-path result. Duplicate
    /// pairs overwrite (last write wins) and self-loops are written to the
    /// diagonal unchecked; use [`Self::build_strict`] to reject both.
    #[must_use]
    pub fn build(connections: &[Connection]) -> Self {
        let names = collect_names(connections);
        let n = names.len();
        let index: BTreeMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let mut distance = vec![vec![0_u32; n]; n];
        for connection in connections {
            // Both names are present by construction of `index`.
            if let (Some(&a), Some(&b)) = (
                index.get(connection.a.as_str()),
                index.get(connection.b.as_str()),
            ) {
                distance[a][b] = connection.time;
                distance[b][a] = connection.time;
            }
        }

        let degree = distance
            .iter()
            .map(|row| row.iter().filter(|&&d| d > 0).count())
            .collect();

        Self {
            names,
            distance,
            degree,
        }
    }

    /// Build the field graph, rejecting self-loops and duplicate pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if a connection joins a flower to
    /// itself, or [`GraphError::DuplicatePair`] if the same unordered pair
    /// appears more than once.
    pub fn build_strict(connections: &[Connection]) -> Result<Self, GraphError> {
        let mut seen: BTreeSet<(&str, &str)> = BTreeSet::new();
        for connection in connections {
            if connection.a == connection.b {
                return Err(GraphError::SelfLoop {
                    node: connection.a.clone(),
                });
            }
            let pair = if connection.a.as_str() <= connection.b.as_str() {
                (connection.a.as_str(), connection.b.as_str())
            } else {
                (connection.b.as_str(), connection.a.as_str())
            };
            if !seen.insert(pair) {
                return Err(GraphError::DuplicatePair {
                    a: pair.0.to_string(),
                    b: pair.1.to_string(),
                });
            }
        }
        Ok(Self::build(connections))
    }

    /// Number of distinct flowers in the field.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }
}

impl fmt::Display for FieldGraph {
    /// Render the name list and the distance matrix with fixed-width cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.names)?;
        for row in &self.distance {
            for cell in row {
                write!(f, "{cell:5} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Collect the distinct flower names of a connection list, ascending.
fn collect_names(connections: &[Connection]) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for connection in connections {
        names.insert(connection.a.as_str());
        names.insert(connection.b.as_str());
    }
    names.into_iter().map(str::to_string).collect()
}
