//! Runtime configuration, read from a TOML file.
//!
//! Every field has a default, so an absent file or a partial file both work:
//!
//! ```toml
//! dataset = "data/movie_data"
//! target = "Kevin Bacon"
//! quit_command = "quit"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{BaconError, Result};
use crate::query::REFERENCE_ACTOR;

const DEFAULT_DATASET: &str = "movie_data";
const DEFAULT_QUIT_COMMAND: &str = "quit";
const DEFAULT_PROMPT: &str = "Enter an actor's name (or 'quit' to exit): ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaconConfig {
    /// Path to the `title---actor:actor` dataset file.
    pub dataset: PathBuf,
    /// Label every query is measured against.
    pub target: String,
    /// Sentinel that ends the interactive shell (case-insensitive).
    pub quit_command: String,
    /// Prompt printed before each shell read.
    pub prompt: String,
}

impl Default for BaconConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            target: REFERENCE_ACTOR.to_string(),
            quit_command: DEFAULT_QUIT_COMMAND.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl BaconConfig {
    /// Load config, falling back to defaults.
    ///
    /// A missing file is normal and silently yields defaults; a broken one
    /// is logged and also yields defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(config = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load config, reporting read and parse failures.
    pub fn try_load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| BaconError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| BaconError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Case-insensitive check against the quit sentinel.
    pub fn is_quit(&self, input: &str) -> bool {
        input.eq_ignore_ascii_case(&self.quit_command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BaconConfig::default();
        assert_eq!(config.dataset, PathBuf::from("movie_data"));
        assert_eq!(config.target, "Kevin Bacon");
        assert_eq!(config.quit_command, "quit");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BaconConfig::from_toml("dataset = \"data/films.txt\"\n").unwrap();
        assert_eq!(config.dataset, PathBuf::from("data/films.txt"));
        assert_eq!(config.target, "Kevin Bacon");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BaconConfig::load(&dir.path().join("bacon.toml"));
        assert_eq!(config, BaconConfig::default());
    }

    #[test]
    fn test_load_broken_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target = [not toml").unwrap();

        assert!(matches!(
            BaconConfig::try_load(file.path()),
            Err(BaconError::ConfigParse { .. })
        ));
        assert_eq!(BaconConfig::load(file.path()), BaconConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target = \"Tom Hanks\"\nquit_command = \"exit\"").unwrap();

        let config = BaconConfig::load(file.path());
        assert_eq!(config.target, "Tom Hanks");
        assert!(config.is_quit("EXIT"));
        assert!(!config.is_quit("quit"));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let config = BaconConfig::default();
        assert!(config.is_quit("quit"));
        assert!(config.is_quit("QuIt"));
        assert!(!config.is_quit("quitter"));
    }
}
