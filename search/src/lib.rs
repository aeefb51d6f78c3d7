//! Busy Bee search: time-bounded Hamiltonian-path engines.
//!
//! Given a [`FieldGraph`](busybee_graph::FieldGraph), find an ordering that
//! visits every flower exactly once without the cumulative travel time
//! exceeding a budget. This is an NP-complete problem; both engines are
//! depth-first backtracking with budget and already-visited pruning as the
//! only cost reducers — worst case O(n!) expansions by design.
//!
//! # Strategies
//!
//! - [`RecursiveSearch`] — direct recursive DFS, simplest to verify;
//!   recursion depth is bounded by the node count.
//! - [`IterativeSearch`] — allocation-light state machine with per-node
//!   candidate stacks and an undo-able elapsed-time accumulator; prefer it
//!   for larger graphs to avoid call-stack growth.
//!
//! Both walk the identical deterministic order (ascending start node, then
//! ascending neighbor index) and therefore return the same first-found path.
//!
//! # No-solution is data
//!
//! An exhausted search returns an empty path, never an error or an absent
//! value, so harnesses can treat every outcome uniformly.

#![forbid(unsafe_code)]

pub mod candidates;
pub mod engine;
pub mod iterative;
pub mod path;
pub mod recursive;

pub use engine::{find_path, PathSearch, SearchResult, SearchStats};
pub use iterative::IterativeSearch;
pub use recursive::RecursiveSearch;
