//! Accord Graph Layer
//!
//! This crate holds the signed social graph and the builder that reads it
//! from a line-oriented edge list. Everything downstream (the balance
//! checkers, the CLI) consumes the [`SignedGraph`] produced here.
//!
//! ## Key Concepts
//!
//! - **Node**: an opaque identifier taken verbatim from input
//! - **Sign**: the binary state of an edge, friendly (`++`) or hostile (`--`)
//! - **Signed graph**: undirected, no self-loops, at most one sign per pair
//!
//! ## Input Format
//!
//! ```text
//! 3 3
//! Cersei ++ Jaime
//! Ned -- Cersei
//! Ned -- Jaime
//! ```
//!
//! The header carries the declared node and edge counts. How those counts
//! are enforced is chosen with [`HeaderPolicy`].
//!
//! # Examples
//!
//! ```
//! use accord_graph::{build, Sign};
//!
//! let graph = build(["2 1", "Cersei ++ Jaime"]).unwrap();
//! assert_eq!(graph.sign("Jaime", "Cersei"), Some(Sign::Friendly));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod error;
pub mod graph;
pub mod sign;

// Re-exports for convenience
pub use builder::{
    build, build_from_path, build_from_reader, build_with, BuildOptions, GraphBuilder, Header,
    HeaderPolicy,
};
pub use error::GraphError;
pub use graph::SignedGraph;
pub use sign::Sign;
