//! `IterativeSearch`: allocation-light backtracking without recursion.
//!
//! When a node is visited, its not-yet-visited positive-weight neighbors are
//! captured once into a [`CandidateStack`] sized from the node's degree; the
//! main loop then only pops candidates instead of re-scanning the matrix row
//! on every backtrack. Elapsed time lives in an explicit accumulator so that
//! popping a node undoes its incoming edge cost in O(1).
//!
//! A candidate popped later can never be on the path at that moment: every
//! node appended after the stack's owner has already been removed by the
//! time the owner is current again. Only the budget is re-checked at visit
//! time.

use busybee_graph::FieldGraph;

use crate::candidates::CandidateStack;
use crate::engine::{to_names, PathSearch, SearchResult, SearchStats};
use crate::path::PathStack;

/// The performance-tuned iterative strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeSearch;

impl PathSearch for IterativeSearch {
    #[allow(clippy::unnecessary_literal_bound)]
    fn strategy_name(&self) -> &str {
        "iterative"
    }

    fn search(&self, graph: &FieldGraph, budget: u32) -> SearchResult {
        let n = graph.node_count();
        let mut stats = SearchStats::default();
        for start in 0..n {
            if let Some(path) = from_start(graph, u64::from(budget), start, &mut stats) {
                return SearchResult {
                    path: to_names(graph, &path),
                    stats,
                };
            }
        }
        SearchResult {
            path: Vec::new(),
            stats,
        }
    }
}

/// Run the state machine from one start node.
///
/// Returns the full-coverage path as node indices, or `None` when the start
/// node's search space is exhausted.
fn from_start(
    graph: &FieldGraph,
    budget: u64,
    start: usize,
    stats: &mut SearchStats,
) -> Option<Vec<usize>> {
    let n = graph.node_count();
    let mut path = PathStack::new(n);
    // One candidate stack per currently-active path position; a fixed-size
    // table indexed by node id instead of a keyed map.
    let mut candidates: Vec<Option<CandidateStack>> = (0..n).map(|_| None).collect();
    let mut elapsed: u64 = 0;

    visit(graph, start, &mut path, &mut candidates, stats);
    while path.len() < n {
        let current = path.last()?;
        let candidate = candidates[current].as_mut().and_then(CandidateStack::pop);
        match candidate {
            Some(next) => {
                // Budget check happens at visit time, not when the
                // candidate was generated.
                let step = u64::from(graph.distance[current][next]);
                if elapsed + step <= budget {
                    elapsed += step;
                    visit(graph, next, &mut path, &mut candidates, stats);
                }
            }
            None => {
                // Exhausted: drop the empty stack and undo the move.
                candidates[current] = None;
                path.pop();
                stats.backtracks += 1;
                if let Some(previous) = path.last() {
                    elapsed -= u64::from(graph.distance[current][previous]);
                }
            }
        }
    }
    Some(path.as_slice().to_vec())
}

/// Put `node` on the path and capture its untried neighbors.
///
/// Neighbors are pushed in descending index order so that LIFO pops explore
/// them ascending, the same deterministic order as the recursive engine.
fn visit(
    graph: &FieldGraph,
    node: usize,
    path: &mut PathStack,
    candidates: &mut [Option<CandidateStack>],
    stats: &mut SearchStats,
) {
    path.push(node);
    stats.record_expansion(path.len());
    let mut neighbors = CandidateStack::new(graph.degree[node]);
    for next in (0..graph.node_count()).rev() {
        if graph.distance[node][next] > 0 && !path.contains(next) {
            neighbors.push(next);
        }
    }
    candidates[node] = Some(neighbors);
}
