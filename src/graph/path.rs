//! Shortest-path search over the movie graph.

use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use super::engine::MovieGraph;

/// A shortest path between two labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionPath {
    /// Labels from the query to the target, alternating actor and movie.
    pub labels: Vec<String>,
    /// Actor-to-actor hops, `edges / 2`.
    pub distance: usize,
}

impl ConnectionPath {
    fn new(labels: Vec<String>) -> Self {
        let distance = movie_distance(labels.len());
        Self { labels, distance }
    }

    /// Number of edges walked.
    pub fn edges(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }
}

impl fmt::Display for ConnectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(" -> "))
    }
}

/// Movie distance for a path of `node_count` labels.
///
/// Integer division: a path with an odd edge count (never produced by a
/// bipartite dataset) loses its half hop.
pub fn movie_distance(node_count: usize) -> usize {
    node_count.saturating_sub(1) / 2
}

/// Why no path was returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The query or the target is not a label in the graph.
    #[error("either \"{query}\" or \"{target}\" is not in the data")]
    UnknownEntity { query: String, target: String },

    /// Both labels exist but lie in different components.
    #[error("no connection found from \"{query}\" to \"{target}\"")]
    NoConnection { query: String, target: String },
}

/// Machine-readable form of [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    UnknownEntity,
    NoConnection,
}

impl PathError {
    pub fn reason(&self) -> NotFoundReason {
        match self {
            PathError::UnknownEntity { .. } => NotFoundReason::UnknownEntity,
            PathError::NoConnection { .. } => NotFoundReason::NoConnection,
        }
    }
}

impl MovieGraph {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Neighbors are expanded in insertion order, so among equally short
    /// paths the one built from the earliest-added edges wins. The search
    /// stops when `to` is dequeued.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<ConnectionPath, PathError> {
        if !self.contains(from) || !self.contains(to) {
            return Err(PathError::UnknownEntity {
                query: from.to_string(),
                target: to.to_string(),
            });
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        // None marks the start of the chain.
        let mut parent: HashMap<&str, Option<&str>> = HashMap::new();

        visited.insert(from);
        queue.push_back(from);
        parent.insert(from, None);

        let mut found = false;
        while let Some(current) = queue.pop_front() {
            if current == to {
                found = true;
                break;
            }
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor.as_str()) {
                    parent.insert(neighbor, Some(current));
                    queue.push_back(neighbor);
                }
            }
        }

        if !found {
            debug!(from, to, explored = visited.len(), "no connection");
            return Err(PathError::NoConnection {
                query: from.to_string(),
                target: to.to_string(),
            });
        }

        let mut chain = Vec::new();
        let mut node = Some(to);
        while let Some(label) = node {
            chain.push(label.to_string());
            node = parent.get(label).copied().flatten();
        }
        chain.reverse();

        debug!(from, to, explored = visited.len(), hops = chain.len(), "path found");
        Ok(ConnectionPath::new(chain))
    }
}
