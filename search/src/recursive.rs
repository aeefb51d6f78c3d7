//! `RecursiveSearch`: direct recursive depth-first backtracking.
//!
//! One mutable [`PathStack`] is shared down the recursion; backtracking is
//! the caller removing the last node after a failed recursive call returns.
//! Recursion depth is bounded by the node count, which bounds worst-case
//! stack usage.

use busybee_graph::FieldGraph;

use crate::engine::{to_names, PathSearch, SearchResult, SearchStats};
use crate::path::PathStack;

/// The simple recursive strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveSearch;

impl PathSearch for RecursiveSearch {
    #[allow(clippy::unnecessary_literal_bound)]
    fn strategy_name(&self) -> &str {
        "recursive"
    }

    fn search(&self, graph: &FieldGraph, budget: u32) -> SearchResult {
        let n = graph.node_count();
        let mut stats = SearchStats::default();
        let mut path = PathStack::new(n);
        for start in 0..n {
            path.push(start);
            stats.record_expansion(path.len());
            if depth_first(graph, u64::from(budget), &mut path, start, 0, &mut stats) {
                return SearchResult {
                    path: to_names(graph, path.as_slice()),
                    stats,
                };
            }
            path.pop();
            stats.backtracks += 1;
        }
        SearchResult {
            path: Vec::new(),
            stats,
        }
    }
}

/// Extend the path from `current`, returning `true` once it covers all nodes.
///
/// `elapsed` is the cumulative travel time up to `current`; neighbors are
/// tried in ascending index order, skipping missing edges, visited nodes and
/// steps that would exceed the budget.
fn depth_first(
    graph: &FieldGraph,
    budget: u64,
    path: &mut PathStack,
    current: usize,
    elapsed: u64,
    stats: &mut SearchStats,
) -> bool {
    if path.len() == graph.node_count() {
        // All flowers are on the path.
        return true;
    }
    for (next, &step) in graph.distance[current].iter().enumerate() {
        if step == 0 || path.contains(next) {
            continue;
        }
        let time = elapsed + u64::from(step);
        if time > budget {
            continue;
        }
        path.push(next);
        stats.record_expansion(path.len());
        if depth_first(graph, budget, path, next, time, stats) {
            return true;
        }
        path.pop();
        stats.backtracks += 1;
    }
    false
}
