// src/config/validate.rs

use std::collections::BTreeMap;

use tracing::warn;

use crate::config::model::{GroupConfig, GroupName};
use crate::errors::{Result, SpyrunError};

/// Run basic semantic validation against the `[spys.*]` groups.
///
/// This checks:
/// - no group has an empty `file` pattern
///
/// It does **not** compile the glob patterns; that happens when the registry
/// expands them, so the error can name the offending pattern. An empty set of
/// groups is allowed and only logged.
pub fn validate_groups(groups: &BTreeMap<GroupName, GroupConfig>) -> Result<()> {
    if groups.is_empty() {
        warn!("config contains no [spys.<name>] sections; nothing will be watched");
    }

    for (name, group) in groups.iter() {
        if group.file.trim().is_empty() {
            return Err(SpyrunError::Config(format!(
                "group '{}' has an empty `file` pattern",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_names_the_group() {
        let mut groups = BTreeMap::new();
        groups.insert(
            "docs".to_string(),
            GroupConfig {
                file: "  ".to_string(),
                command: "echo".to_string(),
            },
        );

        match validate_groups(&groups) {
            Err(SpyrunError::Config(msg)) => assert!(msg.contains("docs")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn no_groups_is_accepted() {
        assert!(validate_groups(&BTreeMap::new()).is_ok());
    }
}
