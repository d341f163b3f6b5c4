//! Shared unit test utilities.
//!
//! Provides tree builders for real-filesystem tests and an in-memory
//! [`FileSystem`] double so traversal tests never touch storage.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::fsys::{FileSystem, compile_name_filter, name_matches, name_of};

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically. Paths ending in `/` become
/// empty directories.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if path.ends_with('/') {
            fs::create_dir_all(&full_path).unwrap();
            continue;
        }
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp directory populated via [`create_tree`].
pub fn temp_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    create_tree(dir.path(), files);
    dir
}

/// In-memory file system rooted at `/`.
///
/// Stores a flat set of absolute paths; directories carry a trailing `/`.
/// Missing parents are inserted automatically.
#[derive(Debug, Clone)]
pub struct MemFileSystem {
    case_sensitive: bool,
    paths: BTreeSet<String>,
}

impl MemFileSystem {
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
            paths: BTreeSet::new(),
        }
    }

    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
            paths: BTreeSet::new(),
        }
    }

    /// Add entries relative to the root: `"a/x.txt"` is a file, `"a/b/"`
    /// a directory.
    pub fn with(mut self, entries: &[&str]) -> Self {
        for entry in entries {
            self.add(entry);
        }
        self
    }

    /// Build from a JSON tree: objects are directories, anything else a
    /// file.
    ///
    /// ```ignore
    /// let fs = MemFileSystem::from_json(true, r#"{"a": {"x.txt": ""}}"#);
    /// ```
    pub fn from_json(case_sensitive: bool, json: &str) -> Self {
        fn walk(fs: &mut MemFileSystem, prefix: &str, value: &serde_json::Value) {
            let Some(map) = value.as_object() else {
                return;
            };
            for (name, child) in map {
                if child.is_object() {
                    let dir = format!("{prefix}{name}/");
                    fs.paths.insert(dir.clone());
                    walk(fs, &dir, child);
                } else {
                    fs.paths.insert(format!("{prefix}{name}"));
                }
            }
        }

        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let mut fs = if case_sensitive {
            Self::case_sensitive()
        } else {
            Self::case_insensitive()
        };
        walk(&mut fs, "/", &value);
        fs
    }

    fn add(&mut self, entry: &str) {
        let full = format!("/{}", entry.trim_start_matches('/'));
        let is_dir = full.ends_with('/');
        let dir_part_end = if is_dir {
            full.len()
        } else {
            full.rfind('/').unwrap() + 1
        };
        let mut idx = 1;
        while let Some(pos) = full[idx..dir_part_end].find('/') {
            let end = idx + pos + 1;
            self.paths.insert(full[..end].to_string());
            idx = end;
        }
        if !is_dir {
            self.paths.insert(full);
        }
    }

    fn list<'a>(
        &'a self,
        path: &str,
        filter: &str,
        recursive: bool,
        case_insensitive: bool,
        want_dirs: bool,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        let matcher = compile_name_filter(filter, case_insensitive);
        let prefix = path.to_string();
        Box::new(
            self.paths
                .iter()
                .filter(move |p| {
                    if !p.starts_with(&prefix) || p.len() == prefix.len() {
                        return false;
                    }
                    if p.ends_with('/') != want_dirs {
                        return false;
                    }
                    let rest = p[prefix.len()..].trim_end_matches('/');
                    if !recursive && rest.contains('/') {
                        return false;
                    }
                    name_matches(&matcher, name_of(p))
                })
                .cloned(),
        )
    }
}

impl FileSystem for MemFileSystem {
    fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn resolve_absolute(&self, path: &str) -> String {
        let mut out = match path {
            "" | "." => "/".to_string(),
            p if p.starts_with('/') => p.to_string(),
            p => format!("/{p}"),
        };
        if !out.ends_with('/') {
            out.push('/');
        }
        out
    }

    fn dir_exists(&self, path: &str) -> bool {
        path == "/" || self.paths.contains(path)
    }

    fn list_dirs<'a>(
        &'a self,
        path: &str,
        filter: &str,
        recursive: bool,
        case_insensitive: bool,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        self.list(path, filter, recursive, case_insensitive, true)
    }

    fn list_files<'a>(
        &'a self,
        path: &str,
        filter: &str,
        recursive: bool,
        case_insensitive: bool,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        self.list(path, filter, recursive, case_insensitive, false)
    }
}
