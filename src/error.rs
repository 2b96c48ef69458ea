//! Error types for bacon-path.
//!
//! Only resource and configuration failures live here. Query outcomes
//! (unknown entity, no connection) are ordinary results, see
//! [`crate::graph::PathError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the dataset or the configuration.
#[derive(Debug, Error)]
pub enum BaconError {
    /// The dataset file could not be opened or read.
    #[error("dataset not found or unreadable: {}", path.display())]
    DatasetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::BaconConfig`].
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, BaconError>;
