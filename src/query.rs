//! Query API — what a front end calls with a name typed by the user.
//!
//! Responses are plain serializable structs so the CLI can print them as
//! text or JSON.

use serde::Serialize;

use crate::graph::{ConnectionPath, MovieGraph, NotFoundReason, PathError};

/// The label every distance is measured against by default.
pub const REFERENCE_ACTOR: &str = "Kevin Bacon";

/// Shortest path from `name` to [`REFERENCE_ACTOR`].
pub fn bacon_distance(graph: &MovieGraph, name: &str) -> Result<ConnectionPath, PathError> {
    distance_to(graph, name, REFERENCE_ACTOR)
}

/// Shortest path from `name` to an arbitrary target label.
pub fn distance_to(
    graph: &MovieGraph,
    name: &str,
    target: &str,
) -> Result<ConnectionPath, PathError> {
    graph.shortest_path(name, target)
}

/// Result of a distance query, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub target: String,
    pub found: bool,
    pub path: Vec<String>,
    pub distance: Option<usize>,
    pub reason: Option<NotFoundReason>,
}

impl QueryResponse {
    pub fn new(query: &str, target: &str, outcome: Result<ConnectionPath, PathError>) -> Self {
        let mut response = Self {
            query: query.to_string(),
            target: target.to_string(),
            found: false,
            path: Vec::new(),
            distance: None,
            reason: None,
        };
        match outcome {
            Ok(path) => {
                response.found = true;
                response.distance = Some(path.distance);
                response.path = path.labels;
            }
            Err(e) => response.reason = Some(e.reason()),
        }
        response
    }
}

/// Run a query against `target` and wrap it as a [`QueryResponse`].
pub fn query(graph: &MovieGraph, name: &str, target: &str) -> QueryResponse {
    QueryResponse::new(name, target, distance_to(graph, name, target))
}

/// Direct neighbors of a label: the cast of a movie, or an actor's films.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborsResponse {
    pub label: String,
    pub found: bool,
    pub neighbors: Vec<String>,
}

pub fn neighbors(graph: &MovieGraph, label: &str) -> NeighborsResponse {
    NeighborsResponse {
        label: label.to_string(),
        found: graph.contains(label),
        neighbors: graph.neighbors(label).to_vec(),
    }
}
