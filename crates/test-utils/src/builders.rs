#![allow(dead_code)]

use spyrun::config::{ConfigFile, GroupConfig, RawConfigFile};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn sleep(mut self, duration: &str) -> Self {
        self.config.spyconf.sleep = Some(duration.to_string());
        self
    }

    pub fn with_group(mut self, name: &str, file: &str, command: &str) -> Self {
        self.config.spys.insert(
            name.to_string(),
            GroupConfig {
                file: file.to_string(),
                command: command.to_string(),
            },
        );
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
