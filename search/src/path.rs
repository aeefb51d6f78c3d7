//! `PathStack`: fixed-capacity path of distinct node indices.
//!
//! The inner backtracking loop needs push, pop, last and an O(1) membership
//! test. A `Vec` for order plus a boolean membership array sized to the node
//! count covers all four without reallocation once constructed.

/// A partial path of distinct node indices with O(1) membership tests.
///
/// Capacity is fixed at construction; callers push at most one entry per
/// node, so the backing storage never grows.
#[derive(Debug)]
pub struct PathStack {
    content: Vec<usize>,
    member: Vec<bool>,
}

impl PathStack {
    /// Create an empty path prepared for node indices `0..n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            content: Vec::with_capacity(n),
            member: vec![false; n],
        }
    }

    /// Append a node to the path.
    pub fn push(&mut self, node: usize) {
        self.member[node] = true;
        self.content.push(node);
    }

    /// Remove and return the last node of the path.
    pub fn pop(&mut self) -> Option<usize> {
        let node = self.content.pop()?;
        self.member[node] = false;
        Some(node)
    }

    /// The last node of the path, if any.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.content.last().copied()
    }

    /// Whether the node is currently on the path.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.member[node]
    }

    /// Current path length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The path as a slice of node indices, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.content
    }
}
