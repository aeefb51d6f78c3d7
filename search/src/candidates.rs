//! `CandidateStack`: per-node untried-neighbor stack for the iterative engine.
//!
//! Built at the moment a node is visited, sized from the node's degree so the
//! hot backtracking loop never reallocates. Consumed LIFO; the engine pushes
//! neighbors in descending index order so pops come out ascending.

/// A fixed-capacity stack of candidate node indices.
///
/// No sanity checks beyond capacity at construction; the engine owns the
/// invariant that at most `capacity` candidates are ever pushed.
#[derive(Debug)]
pub struct CandidateStack {
    values: Vec<usize>,
}

impl CandidateStack {
    /// Create an empty stack able to hold `capacity` candidates.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Push a candidate.
    pub fn push(&mut self, node: usize) {
        self.values.push(node);
    }

    /// Pop the most recently pushed candidate.
    pub fn pop(&mut self) -> Option<usize> {
        self.values.pop()
    }

    /// Whether any candidates remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
