//! Shared graph generators for the benchmark suites.
//!
//! All generators are deterministic: a given shape and seed always produce
//! the same connection list, so benchmark runs are comparable across
//! machines and revisions.

#![forbid(unsafe_code)]

use busybee_graph::Connection;

/// Minimal multiplicative congruential generator; deterministic and cheap.
#[derive(Debug)]
pub struct Lcg(u64);

impl Lcg {
    /// Seed the generator. A zero seed is mapped to one.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Next pseudo-random value.
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

fn flower(i: usize) -> String {
    format!("n{i:03}")
}

/// A ring of `n` flowers, each hop costing `time`.
///
/// Always admits a Hamiltonian path of cost `(n - 1) * time`; a good
/// best-case workload because the first DFS branch succeeds.
#[must_use]
pub fn ring_graph(n: usize, time: u32) -> Vec<Connection> {
    (0..n)
        .map(|i| Connection::new(flower(i), flower((i + 1) % n), time))
        .collect()
}

/// The budget that exactly admits the ring's Hamiltonian path.
#[must_use]
pub fn ring_budget(n: usize, time: u32) -> u32 {
    u32::try_from(n.saturating_sub(1)).unwrap_or(u32::MAX).saturating_mul(time)
}

/// A ring plus `chords` random chords with travel times 1..=9.
///
/// Denser graphs mean larger candidate sets and more pruning work, the
/// regime where the iterative engine's precomputed stacks pay off.
#[must_use]
pub fn chorded_graph(n: usize, chords: usize, seed: u64) -> Vec<Connection> {
    let mut lcg = Lcg::new(seed);
    let mut connections = ring_graph(n, 3);
    for _ in 0..chords {
        let a = usize::try_from(lcg.next_u64()).unwrap_or(0) % n;
        let b = usize::try_from(lcg.next_u64()).unwrap_or(0) % n;
        if a != b {
            let time = u32::try_from(lcg.next_u64() % 9 + 1).unwrap_or(1);
            connections.push(Connection::new(flower(a), flower(b), time));
        }
    }
    connections
}

/// A star: every flower connected to a single hub.
///
/// Has no Hamiltonian path for more than three flowers, forcing a full
/// exhaustive backtrack; the worst-case workload.
#[must_use]
pub fn star_graph(leaves: usize) -> Vec<Connection> {
    (0..leaves)
        .map(|i| Connection::new("hub", flower(i), 1))
        .collect()
}
