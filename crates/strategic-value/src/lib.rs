//! Weighted-criteria scoring for open banking strategic decisions.
//!
//! The [`decision`] module holds the domain: criteria weights, the Strategic
//! Value Index scoring engine, the seeded scenario catalog, and the HTTP
//! router exposing them. [`config`], [`telemetry`], and [`error`] carry the
//! service plumbing shared with the `strategic-value-api` binary.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
