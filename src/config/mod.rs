// src/config/mod.rs

//! Configuration loading and validation for spyrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Parse the `[spyconf].sleep` duration string (`duration.rs`).
//! - Validate the `[spys.*]` groups (`validate.rs`).

pub mod duration;
pub mod loader;
pub mod model;
pub mod validate;

pub use duration::parse_duration;
pub use loader::{load_and_validate, load_from_path, DEFAULT_CONFIG_PATH};
pub use model::{
    ConfigFile, GroupConfig, GroupName, RawConfigFile, SpyConfSection, DEFAULT_POLL_INTERVAL,
};
pub use validate::validate_groups;
