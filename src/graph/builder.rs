//! Graph builder — reads the dataset and builds the movie graph.
//!
//! One line per movie, `title---actor1:actor2:...`. Lines that do not
//! split into a title and an actor list are skipped without comment.
//! Bytes that are not UTF-8 are replaced with U+FFFD rather than failing
//! the whole dataset.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use super::engine::MovieGraph;
use super::types::MovieRecord;
use crate::error::{BaconError, Result};

/// Read one line, without its `\n` or `\r\n`, decoding lossily.
///
/// Returns `None` at end of input. Only genuine read failures are errors.
pub fn read_line_lossy(
    reader: &mut impl BufRead,
    buf: &mut Vec<u8>,
) -> std::io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Build a graph from any line source.
pub fn build_from_reader(mut reader: impl BufRead) -> std::io::Result<MovieGraph> {
    let mut graph = MovieGraph::new();
    let mut buf = Vec::new();
    while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
        if let Some(record) = MovieRecord::parse(&line) {
            graph.add_record(&record);
        }
    }
    Ok(graph)
}

/// Build a graph from an in-memory dataset.
pub fn build_from_str(data: &str) -> MovieGraph {
    let mut graph = MovieGraph::new();
    for record in data.lines().filter_map(MovieRecord::parse) {
        graph.add_record(&record);
    }
    graph
}

/// Build a graph from a dataset file, reporting an unreadable source.
pub fn try_build_graph(path: &Path) -> Result<MovieGraph> {
    let unreadable = |source| BaconError::DatasetUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    let graph = build_from_reader(BufReader::new(file)).map_err(unreadable)?;

    let stats = graph.stats();
    info!(
        dataset = %path.display(),
        labels = stats.labels,
        edges = stats.edges,
        records = stats.records,
        "graph built"
    );
    Ok(graph)
}

/// Build a graph from a dataset file.
///
/// An unreadable dataset is logged once and produces an empty graph, so
/// every later query resolves as an unknown entity instead of aborting.
pub fn build_graph(path: &Path) -> MovieGraph {
    match try_build_graph(path) {
        Ok(graph) => graph,
        Err(e) => {
            warn!(error = %e, "continuing with an empty graph");
            MovieGraph::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const DATASET: &str = "Apollo 13---Tom Hanks:Kevin Bacon\n\
                           A Few Good Men---Tom Cruise:Kevin Bacon\n\
                           Cast Away---Tom Hanks\n";

    #[test]
    fn test_build_from_str() {
        let graph = build_from_str(DATASET);
        let stats = graph.stats();
        assert_eq!(stats.records, 3);
        assert_eq!(stats.labels, 6);
        assert_eq!(stats.edges, 5);
        assert_eq!(graph.neighbors("Kevin Bacon"), ["Apollo 13", "A Few Good Men"]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let data = "garbage line\n\nApollo 13---Tom Hanks\nNo Cast---\n";
        let graph = build_from_str(data);
        assert_eq!(graph.stats().records, 1);
        assert!(!graph.contains("garbage line"));
        assert!(!graph.contains("No Cast"));
        assert!(graph.contains("Tom Hanks"));
    }

    #[test]
    fn test_reader_and_str_agree() {
        let from_reader = build_from_reader(Cursor::new(DATASET)).unwrap();
        assert_eq!(from_reader, build_from_str(DATASET));
    }

    #[test]
    fn test_crlf_lines() {
        let graph = build_from_reader(Cursor::new("Apollo 13---Tom Hanks:Kevin Bacon\r\n")).unwrap();
        assert!(graph.contains("Kevin Bacon"));
        assert!(!graph.contains("Kevin Bacon\r"));
    }

    #[test]
    fn test_invalid_utf8_line_keeps_the_rest() {
        let data: &[u8] = b"Apollo 13---Tom Hanks:Kevin Bacon\n\
                            Am\xe9lie---Audrey Tautou\n\
                            Top Gun---Tom Cruise:Kevin Bacon\n";
        let graph = build_from_reader(Cursor::new(data)).unwrap();

        assert_eq!(graph.stats().records, 3);
        assert!(graph.contains("Am\u{FFFD}lie"));
        assert!(graph.contains("Audrey Tautou"));
        assert_eq!(graph.neighbors("Kevin Bacon"), ["Apollo 13", "Top Gun"]);
        assert_eq!(graph.shortest_path("Tom Hanks", "Kevin Bacon").unwrap().distance, 1);
    }

    #[test]
    fn test_invalid_utf8_file_is_not_unreadable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Apollo 13---Tom Hanks:Kevin Bacon\n\xff\xfe---\xff\n")
            .unwrap();

        let graph = build_graph(file.path());
        assert!(graph.contains("Tom Hanks"));
        assert!(graph.contains("\u{FFFD}\u{FFFD}"));
    }

    #[test]
    fn test_read_line_lossy_strips_endings() {
        let mut reader = Cursor::new(b"one\r\ntwo\nthree".to_vec());
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while let Some(line) = read_line_lossy(&mut reader, &mut buf).unwrap() {
            lines.push(line);
        }
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_build_twice_is_identical() {
        assert_eq!(build_from_str(DATASET), build_from_str(DATASET));
    }

    #[test]
    fn test_try_build_graph_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let graph = try_build_graph(file.path()).unwrap();
        assert_eq!(graph.stats().records, 3);
    }

    #[test]
    fn test_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie_data");

        assert!(matches!(
            try_build_graph(&path),
            Err(BaconError::DatasetUnreadable { .. })
        ));
        assert!(build_graph(&path).is_empty());
    }
}
