//! Interactive prompt: read a name, print its path to the target, repeat.

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::config::BaconConfig;
use crate::graph::{read_line_lossy, ConnectionPath, MovieGraph, PathError};
use crate::query::distance_to;

/// Text shown for one query result.
pub fn render_outcome(
    query: &str,
    target: &str,
    outcome: &Result<ConnectionPath, PathError>,
) -> String {
    match outcome {
        Ok(path) => format!(
            "\nPath from {} to {}:\n{}\nMovie Distance = {}\n",
            query, target, path, path.distance
        ),
        Err(PathError::UnknownEntity { .. }) => {
            format!("Either \"{}\" or \"{}\" is not in the data.\n", query, target)
        }
        Err(PathError::NoConnection { .. }) => {
            format!("No connection found from \"{}\" to {}.\n", query, target)
        }
    }
}

/// Run the prompt loop until the quit sentinel or end of input.
///
/// Query failures are printed and the loop continues. Input that is not
/// UTF-8 is decoded lossily and queried like any other name; only a failed
/// read or write ends the loop early.
pub fn run_shell(
    graph: &MovieGraph,
    config: &BaconConfig,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = read_line_lossy(&mut input, &mut buf)? else {
            debug!("end of input");
            break;
        };

        let name = line.trim();
        if config.is_quit(name) {
            break;
        }

        let outcome = distance_to(graph, name, &config.target);
        write!(output, "{}", render_outcome(name, &config.target, &outcome))?;
    }
    Ok(())
}
