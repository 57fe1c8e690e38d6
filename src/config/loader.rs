// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, SpyrunError};

/// Config file read when `--input` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./spy.toml";

/// Read and deserialize the TOML at `path` without interpreting it.
///
/// A missing file gets its own message; any other read failure surfaces as
/// an IO error.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SpyrunError::Config(format!("{:?} is not found", path)));
    }

    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Load `path` and turn it into a usable [`ConfigFile`]: the sleep string
/// is resolved into a poll interval and every group is checked.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading config");
    ConfigFile::try_from(load_from_path(path)?)
}
