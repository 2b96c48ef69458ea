//! Core types for the movie graph.
//!
//! Defines the parsed dataset record and the summary statistics
//! reported after a build.

use serde::Serialize;
use std::fmt;

/// Separator between the movie title and its actor list.
pub const TITLE_SEPARATOR: &str = "---";

/// Separator between actor names.
pub const ACTOR_SEPARATOR: char = ':';

/// One dataset line: a movie title and the actors who appear in it.
///
/// Names containing `---` or `:` cannot be expressed; the format has no
/// escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub title: String,
    pub actors: Vec<String>,
}

impl MovieRecord {
    /// Build a record from a title and a raw `a:b:c` actor string.
    pub fn new(title: impl Into<String>, actors_data: &str) -> Self {
        Self {
            title: title.into(),
            actors: split_keep_inner(actors_data.split(ACTOR_SEPARATOR)),
        }
    }

    /// Parse a `title---actor1:actor2` line.
    ///
    /// Returns `None` when the line lacks a title/actor pair. Trailing empty
    /// segments are dropped before counting, so `"Title---"` is malformed
    /// while `"---Someone"` yields an empty title. Segments past the second
    /// are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let parts = split_keep_inner(line.split(TITLE_SEPARATOR));
        if parts.len() < 2 {
            return None;
        }
        Some(Self::new(parts[0].clone(), &parts[1]))
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Actors: [{}]", self.actors.join(", "))
    }
}

/// Collect split pieces, dropping empty ones at the end only.
fn split_keep_inner<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = pieces.map(str::to_string).collect();
    while out.last().is_some_and(|s| s.is_empty()) {
        out.pop();
    }
    out
}

/// Statistics about a built graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Distinct labels (movies and actors together).
    pub labels: usize,
    /// Undirected movie/actor edges, duplicates included.
    pub edges: usize,
    /// Well-formed dataset lines that were ingested.
    pub records: usize,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} labels, {} edges from {} records",
            self.labels, self.edges, self.records
        )
    }
}
