//! Pathwright Harness: a concrete world for the search engine.
//!
//! The harness owns an [`XyGraph`](graph::XyGraph) of integer-plane nodes,
//! runs the engine over it under a [`SearchPolicy`](pathwright_search::SearchPolicy),
//! and packages the outcome as a [`SearchReport`](report::SearchReport) with a
//! canonical JSON form and a domain-separated digest.
//!
//! The harness does NOT implement search logic; it delegates to
//! `pathwright_search`. The graph provides domain data only.

#![forbid(unsafe_code)]

pub mod canon;
pub mod graph;
pub mod hash;
pub mod report;
pub mod runner;
