// src/registry/patterns.rs

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use crate::fs::FileSystem;

const META_CHARS: &[char] = &['*', '?', '[', '{'];

fn has_meta(component: &str) -> bool {
    component.contains(META_CHARS)
}

/// Compile a single path component into a matcher.
///
/// `literal_separator` keeps `*` from ever spanning a `/`, so `**` degrades to
/// `*` the way a shell glob does.
fn component_matcher(component: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(component)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// Expand `pattern` into the sorted list of existing paths that match it.
///
/// The pattern is walked one component at a time:
/// - literal components are appended to every candidate as-is;
/// - components containing `*`, `?`, `[` or `{` are matched against the names
///   listed in each candidate directory.
///
/// A leading `./` is dropped from the produced paths, absolute patterns stay
/// absolute. Directories that cannot be listed contribute no matches. Only
/// malformed pattern syntax is an error.
pub fn expand_glob(fs: &dyn FileSystem, pattern: &str) -> Result<Vec<PathBuf>, globset::Error> {
    let mut candidates: Vec<PathBuf> = vec![PathBuf::new()];

    for component in Path::new(pattern).components() {
        match component {
            Component::CurDir => continue,
            Component::Prefix(_) | Component::RootDir | Component::ParentDir => {
                for candidate in candidates.iter_mut() {
                    candidate.push(component.as_os_str());
                }
            }
            Component::Normal(name) => {
                let name_str = name.to_string_lossy();
                if !has_meta(&name_str) {
                    for candidate in candidates.iter_mut() {
                        candidate.push(name);
                    }
                    continue;
                }

                let matcher = component_matcher(&name_str)?;
                let mut next = Vec::new();
                for dir in candidates.iter() {
                    next.extend(matching_children(fs, dir, &matcher));
                }
                candidates = next;
            }
        }
    }

    candidates.retain(|p| !p.as_os_str().is_empty() && fs.exists(p));
    candidates.sort();
    candidates.dedup();
    Ok(candidates)
}

fn matching_children(fs: &dyn FileSystem, dir: &Path, matcher: &GlobMatcher) -> Vec<PathBuf> {
    let listing_dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };

    let entries = match fs.read_dir(listing_dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = ?listing_dir, error = %err, "skipping unreadable directory during glob expansion");
            return Vec::new();
        }
    };

    let mut names: Vec<OsString> = entries
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
        .collect();
    names.sort();

    names
        .into_iter()
        .filter(|name| matcher.is_match(Path::new(name)))
        .map(|name| dir.join(name))
        .collect()
}
