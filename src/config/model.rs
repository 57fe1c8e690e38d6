// src/config/model.rs

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::config::duration::parse_duration;
use crate::config::validate::validate_groups;
use crate::errors::SpyrunError;

/// Poll interval used when `[spyconf].sleep` is absent or empty.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Group name as written in `[spys.<name>]`.
pub type GroupName = String;

/// Configuration exactly as deserialized from TOML.
///
/// ```toml
/// [spyconf]
/// sleep = "500ms"
///
/// [spys.build]
/// file = "src/*.txt"
/// command = "echo changed: $SPYRUN_FILE"
/// ```
///
/// All sections are optional. Use `ConfigFile::try_from` to resolve the
/// poll interval and check the groups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Global settings from `[spyconf]`.
    #[serde(default)]
    pub spyconf: SpyConfSection,

    /// All groups from `[spys.<name>]`, keyed by group name.
    #[serde(default)]
    pub spys: BTreeMap<GroupName, GroupConfig>,
}

/// `[spyconf]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpyConfSection {
    /// Duration string such as `"500ms"` or `"1m30s"`.
    #[serde(default)]
    pub sleep: Option<String>,
}

/// `[spys.<name>]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupConfig {
    /// Glob pattern selecting the files this group watches.
    pub file: String,

    /// Shell command template. Every `$SPYRUN_FILE` is replaced with the
    /// matched path.
    pub command: String,
}

/// Validated configuration with the poll interval resolved.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    poll_interval: Duration,
    groups: BTreeMap<GroupName, GroupConfig>,
}

impl ConfigFile {
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn groups(&self) -> &BTreeMap<GroupName, GroupConfig> {
        &self.groups
    }
}

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = SpyrunError;

    fn try_from(raw: RawConfigFile) -> Result<Self, Self::Error> {
        let poll_interval = match raw.spyconf.sleep.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_POLL_INTERVAL,
            Some(s) => parse_duration(s)?,
        };

        validate_groups(&raw.spys)?;

        Ok(Self {
            poll_interval,
            groups: raw.spys,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_src: &str) -> Result<ConfigFile, SpyrunError> {
        let raw: RawConfigFile = toml::from_str(toml_src)?;
        ConfigFile::try_from(raw)
    }

    #[test]
    fn missing_spyconf_uses_default_interval() {
        let cfg = parse(
            r#"
[spys.build]
file = "src/*.txt"
command = "echo $SPYRUN_FILE"
"#,
        )
        .unwrap();

        assert_eq!(cfg.poll_interval(), DEFAULT_POLL_INTERVAL);
        assert_eq!(cfg.groups().len(), 1);
        assert_eq!(cfg.groups()["build"].file, "src/*.txt");
    }

    #[test]
    fn empty_sleep_uses_default_interval() {
        let cfg = parse("[spyconf]\nsleep = \"\"\n").unwrap();
        assert_eq!(cfg.poll_interval(), DEFAULT_POLL_INTERVAL);
        assert!(cfg.groups().is_empty());
    }

    #[test]
    fn sleep_is_parsed() {
        let cfg = parse("[spyconf]\nsleep = \"500ms\"\n").unwrap();
        assert_eq!(cfg.poll_interval(), Duration::from_millis(500));
    }

    #[test]
    fn bad_sleep_is_rejected() {
        let err = parse("[spyconf]\nsleep = \"soon\"\n").unwrap_err();
        assert!(matches!(err, SpyrunError::InvalidDuration { .. }));
    }

    #[test]
    fn group_without_command_is_a_toml_error() {
        let err = parse("[spys.a]\nfile = \"*.txt\"\n").unwrap_err();
        assert!(matches!(err, SpyrunError::Toml(_)));
    }
}
