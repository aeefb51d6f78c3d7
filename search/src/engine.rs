//! Engine contract: the `PathSearch` trait and its result types.

use busybee_graph::{Connection, FieldGraph};

/// Counters describing one search execution.
///
/// Useful for regression tracking and for comparing the two strategies;
/// an external harness can render them with [`SearchStats::to_json`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of nodes placed on the path (start placements included).
    pub expansions: u64,
    /// Number of nodes removed from the path while backtracking.
    pub backtracks: u64,
    /// Longest partial path reached.
    pub peak_depth: usize,
}

impl SearchStats {
    /// Record a node placed on the path at the given depth.
    pub(crate) fn record_expansion(&mut self, depth: usize) {
        self.expansions += 1;
        if depth > self.peak_depth {
            self.peak_depth = depth;
        }
    }

    /// Render the counters as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions,
            "backtracks": self.backtracks,
            "peak_depth": self.peak_depth,
        })
    }
}

/// Result of a search execution.
///
/// `path` holds either exactly `node_count` flower names in visit order, or
/// nothing at all. The empty path is the normal "no Hamiltonian path fits
/// the budget" outcome, not a failure; check [`SearchResult::is_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Flower names in visit order; empty if no path fits the budget.
    pub path: Vec<String>,
    /// Execution counters.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Returns `true` if the search found a full-coverage path.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A time-bounded Hamiltonian-path search strategy.
///
/// # Contract
///
/// - The graph is read-only; implementations keep all working state local,
///   so one `FieldGraph` may serve concurrent searches without locking.
/// - Start nodes and neighbors are tried in ascending index order; the
///   first-found path under that order is unique, so all conforming
///   strategies return the identical path for the same input.
/// - The returned path has length zero or exactly `graph.node_count()`.
pub trait PathSearch {
    /// Short strategy identifier (e.g. `"recursive"`).
    fn strategy_name(&self) -> &str;

    /// Search for a Hamiltonian path whose cumulative travel time does not
    /// exceed `budget`.
    fn search(&self, graph: &FieldGraph, budget: u32) -> SearchResult;
}

/// Convenience entry point: build the graph and run the iterative engine.
///
/// Returns the flower names in visit order, or an empty list if no
/// Hamiltonian path fits the budget.
#[must_use]
pub fn find_path(connections: &[Connection], budget: u32) -> Vec<String> {
    let graph = FieldGraph::build(connections);
    crate::iterative::IterativeSearch.search(&graph, budget).path
}

/// Map a slice of node indices to the corresponding flower names.
pub(crate) fn to_names(graph: &FieldGraph, indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| graph.names[i].clone()).collect()
}
