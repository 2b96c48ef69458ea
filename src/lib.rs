//! # bacon
//!
//! Movie distance between any actor and Kevin Bacon.
//!
//! A dataset of `title---actor1:actor2:...` lines becomes an undirected
//! graph where every movie is linked to its cast. A breadth-first search
//! from a name to the reference actor yields the shortest chain of
//! actor, movie, actor, ... and its movie distance (edges / 2).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bacon::{bacon_distance, build_graph};
//! use std::path::Path;
//!
//! let graph = build_graph(Path::new("movie_data"));
//!
//! match bacon_distance(&graph, "Tom Hanks") {
//!     Ok(path) => println!("{} ({} hops)", path, path.distance),
//!     Err(e) => println!("{}", e),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod query;

// Re-exports for convenience
pub use error::{BaconError, Result};

pub use config::BaconConfig;
pub use graph::{
    build_from_reader, build_from_str, build_graph, try_build_graph, ConnectionPath, GraphStats,
    MovieGraph, MovieRecord, NotFoundReason, PathError,
};
pub use query::{
    bacon_distance, distance_to, neighbors, query, NeighborsResponse, QueryResponse,
    REFERENCE_ACTOR,
};
