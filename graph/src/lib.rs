//! Busy Bee graph carrier: the flower field as a dense distance matrix.
//!
//! The challenge input is (on purpose) a bit sub-optimal: an unordered list
//! of weighted connections between named flowers. This crate turns that list
//! into the convenient read-only structures the search engines work on.
//!
//! # Crate dependency graph
//!
//! ```text
//! busybee-graph  ←  busybee-search   (the two path engines)
//! busybee-graph  ←  busybee-verify   (independent path checker)
//! ```
//!
//! # Key types
//!
//! - [`Connection`] — an unordered weighted pair of flower names
//! - [`FieldGraph`] — node names, distance matrix, and degree counts
//! - [`GraphError`] — strict-mode construction failures

#![forbid(unsafe_code)]

pub mod connection;
pub mod model;

pub use connection::Connection;
pub use model::{FieldGraph, GraphError};
