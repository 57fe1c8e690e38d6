// src/errors.rs

//! Crate-wide error type.
//!
//! Everything in here is startup-fatal except [`SpyrunError::EventChannelClosed`],
//! which only ends the poll loop. Runtime command failures are never turned
//! into errors; the runner logs them and moves on.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpyrunError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("Invalid glob pattern '{pattern}' in group '{group}': {source}")]
    InvalidGlob {
        group: String,
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Change event channel closed")]
    EventChannelClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SpyrunError>;
