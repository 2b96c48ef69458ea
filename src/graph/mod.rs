//! Movie graph module — the bipartite movie/actor graph.
//!
//! Provides the dataset record type, the adjacency map, the builder
//! that loads it from disk, and breadth-first path search.

pub mod builder;
pub mod engine;
pub mod path;
pub mod types;

pub use builder::{
    build_from_reader, build_from_str, build_graph, read_line_lossy, try_build_graph,
};
pub use engine::MovieGraph;
pub use path::{movie_distance, ConnectionPath, NotFoundReason, PathError};
pub use types::{GraphStats, MovieRecord, ACTOR_SEPARATOR, TITLE_SEPARATOR};
