// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone)]
enum MockKind {
    File,
    Dir(Vec<String>), // List of child names
}

#[derive(Debug, Clone)]
struct MockEntry {
    kind: MockKind,
    modified: SystemTime,
}

/// In-memory filesystem with hand-driven modification times.
///
/// Relative paths are keyed without a leading `./`; the root is `"."`.
#[derive(Debug, Clone)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

fn initial_time() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_000_000)
}

fn normalize(path: &Path) -> PathBuf {
    let stripped = path.strip_prefix(".").unwrap_or(path);
    if stripped.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        stripped.to_path_buf()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no such file: {:?}", path))
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(
            PathBuf::from("."),
            MockEntry {
                kind: MockKind::Dir(Vec::new()),
                modified: initial_time(),
            },
        );

        Self {
            files: Arc::new(Mutex::new(files)),
        }
    }

    /// Add a file with a fixed initial modification time.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        self.add_file_at(path, initial_time());
    }

    pub fn add_file_at(&self, path: impl AsRef<Path>, modified: SystemTime) {
        let path = normalize(path.as_ref());
        let mut files = self.files.lock().unwrap();
        files.insert(
            path.clone(),
            MockEntry {
                kind: MockKind::File,
                modified,
            },
        );
        Self::link_to_parent(&mut files, &path);
    }

    /// Advance the modification time of an existing entry by one second.
    pub fn touch(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut files = self.files.lock().unwrap();
        if let Some(entry) = files.get_mut(&path) {
            entry.modified += Duration::from_secs(1);
        }
    }

    /// Remove an entry. Its parent keeps listing the name, as a file deleted
    /// between `read_dir` and `stat` would look.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        self.files.lock().unwrap().remove(&path);
    }

    fn parent_key(path: &Path) -> Option<PathBuf> {
        let parent = path.parent()?;
        Some(if parent.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            parent.to_path_buf()
        })
    }

    fn link_to_parent(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let Some(parent) = Self::parent_key(path) else {
            return;
        };
        if parent == path {
            return;
        }
        Self::ensure_dir_entry(files, &parent);
        if let Some(MockEntry {
            kind: MockKind::Dir(children),
            ..
        }) = files.get_mut(&parent)
        {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if !children.iter().any(|c| c == name) {
                    children.push(name.to_string());
                }
            }
        }
    }

    fn ensure_dir_entry(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if files.contains_key(path) {
            return;
        }
        files.insert(
            path.to_path_buf(),
            MockEntry {
                kind: MockKind::Dir(Vec::new()),
                modified: initial_time(),
            },
        );
        Self::link_to_parent(files, path);
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(&normalize(path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        match files.get(&normalize(path)) {
            Some(MockEntry {
                kind: MockKind::Dir(children),
                ..
            }) => Ok(children.iter().map(|name| path.join(name)).collect()),
            Some(_) => Err(io::Error::other(format!("not a directory: {:?}", path))),
            None => Err(not_found(path)),
        }
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        let files = self.files.lock().unwrap();
        files
            .get(&normalize(path))
            .map(|entry| entry.modified)
            .ok_or_else(|| not_found(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_files_are_listed_under_their_parents() {
        let fs = MockFileSystem::new();
        fs.add_file("src/a.txt");
        fs.add_file("src/deep/b.txt");

        let mut root = fs.read_dir(Path::new(".")).unwrap();
        root.sort();
        assert_eq!(root, vec![PathBuf::from("./src")]);

        assert_eq!(
            fs.read_dir(Path::new("src/deep")).unwrap(),
            vec![PathBuf::from("src/deep/b.txt")]
        );
        assert!(fs.exists(Path::new("./src/a.txt")));
    }

    #[test]
    fn removed_file_fails_stat() {
        let fs = MockFileSystem::new();
        fs.add_file("a.txt");
        fs.remove("a.txt");

        let err = fs.modified(Path::new("a.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn touch_advances_modification_time() {
        let fs = MockFileSystem::new();
        fs.add_file("a.txt");
        let before = fs.modified(Path::new("a.txt")).unwrap();
        fs.touch("a.txt");
        let after = fs.modified(Path::new("a.txt")).unwrap();
        assert!(after > before);
    }
}
