//! Busy Bee verifier: independent certification of candidate paths.
//!
//! The verifier re-derives the node set and pairwise travel times from the
//! original connection list — it never trusts the engine's matrix or any
//! other internal state. It accepts any externally supplied candidate, and
//! it lives in its own crate precisely so that it CANNOT depend on
//! `busybee-search`: independence is enforced by the crate graph, not by
//! convention.
//!
//! All outcomes are data: success is `Ok(())`, every failure is a typed
//! [`VerifyError`] whose `Display` is a short human-readable reason. The
//! verifier performs no mutation and holds no state across calls.

#![forbid(unsafe_code)]

pub mod verifier;

pub use verifier::{verify, verify_reason, VerifyError};
