//! The adjacency map behind the movie graph.
//!
//! Movies and actors share one label space. Nothing tags a label as one or
//! the other; the graph stays bipartite only because every edge is added
//! between a movie title and one of its actors.

use std::collections::HashMap;
use tracing::debug;

use super::types::{GraphStats, MovieRecord};

/// Undirected movie/actor graph, keyed by label.
///
/// Built once, then only read. Neighbor lists keep insertion order and may
/// hold duplicates when the same pairing appears on several dataset lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieGraph {
    /// label -> neighbor labels, in edge insertion order.
    adjacency: HashMap<String, Vec<String>>,
    /// Records ingested through `add_record`.
    records: usize,
}

impl MovieGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Building ───────────────────────────────────────────────

    /// Make sure a label exists, with no neighbors if it is new.
    pub fn ensure_label(&mut self, label: &str) {
        if !self.adjacency.contains_key(label) {
            self.adjacency.insert(label.to_string(), Vec::new());
        }
    }

    /// Add an undirected edge. Both directions are always recorded.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
    }

    /// Ingest one dataset record: the movie, its actors, and an edge
    /// between the movie and each actor in listed order.
    pub fn add_record(&mut self, record: &MovieRecord) {
        self.ensure_label(&record.title);
        for actor in &record.actors {
            self.add_edge(&record.title, actor);
        }
        self.records += 1;
        debug!(
            title = %record.title,
            actors = record.actors.len(),
            "added movie"
        );
    }

    // ─── Reading ────────────────────────────────────────────────

    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Neighbors of `label` in insertion order. Unknown labels have none.
    pub fn neighbors(&self, label: &str) -> &[String] {
        self.adjacency
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            labels: self.len(),
            edges: self.edge_count(),
            records: self.records,
        }
    }
}
