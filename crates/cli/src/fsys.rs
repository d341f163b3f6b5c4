// SPDX-License-Identifier: MIT

//! File-system capability consumed by the traversal engine.
//!
//! Listings are lazy, return `/`-normalized full paths with directories
//! suffixed by a trailing `/`, and convert access errors into empty results
//! (logged at debug level). The engine never sees an I/O error: an
//! unreadable directory simply contributes nothing.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;

/// Directory/file listing primitive.
///
/// `filter` is the coarse name pattern produced by the segment compiler:
/// literals plus `*` and `?` only. It is applied to entry names, matched
/// case-insensitively when `case_insensitive` is set. Implementations must
/// over-match rather than under-match; precise filtering happens upstream.
pub trait FileSystem {
    /// Whether name comparisons on this platform distinguish case.
    fn is_case_sensitive(&self) -> bool;

    /// Resolve `path` to an absolute directory string with a trailing `/`.
    fn resolve_absolute(&self, path: &str) -> String;

    /// Whether `path` names an existing directory.
    fn dir_exists(&self, path: &str) -> bool;

    /// Immediate (or, when `recursive`, all-depth) child directories of
    /// `path` whose names match `filter`.
    fn list_dirs<'a>(
        &'a self,
        path: &str,
        filter: &str,
        recursive: bool,
        case_insensitive: bool,
    ) -> Box<dyn Iterator<Item = String> + 'a>;

    /// Immediate (or, when `recursive`, all-depth) child files of `path`
    /// whose names match `filter`.
    fn list_files<'a>(
        &'a self,
        path: &str,
        filter: &str,
        recursive: bool,
        case_insensitive: bool,
    ) -> Box<dyn Iterator<Item = String> + 'a>;
}

/// Last path component, without any trailing separator.
pub(crate) fn name_of(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Compile a coarse name filter. `None` means "match everything", which is
/// also the fallback if compilation fails — the filter may over-match,
/// never under-match.
pub(crate) fn compile_name_filter(filter: &str, case_insensitive: bool) -> Option<GlobMatcher> {
    if filter == "*" {
        return None;
    }
    // The only metacharacters a coarse filter carries are `*` and `?`;
    // escape everything globset would otherwise interpret.
    let mut escaped = String::with_capacity(filter.len());
    for c in filter.chars() {
        if matches!(c, '[' | ']' | '{' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    match GlobBuilder::new(&escaped)
        .literal_separator(false)
        .case_insensitive(case_insensitive)
        .backslash_escape(true)
        .build()
    {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(err) => {
            tracing::debug!("coarse filter `{filter}` failed to compile: {err}");
            None
        }
    }
}

pub(crate) fn name_matches(matcher: &Option<GlobMatcher>, name: &str) -> bool {
    matcher.as_ref().is_none_or(|m| m.is_match(name))
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    fn list<'a>(
        &'a self,
        path: &str,
        filter: &str,
        recursive: bool,
        case_insensitive: bool,
        want_dirs: bool,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        let matcher = compile_name_filter(filter, case_insensitive);
        if recursive {
            return Self::list_recursive(path, matcher, want_dirs);
        }

        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("skipping {path}: {err}");
                return Box::new(std::iter::empty());
            }
        };
        let mut prefix = path.to_string();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        Box::new(entries.filter_map(move |entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            let is_dir = file_type.is_dir();
            if (want_dirs && !is_dir) || (!want_dirs && !file_type.is_file()) {
                return None;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name_matches(&matcher, &name) {
                return None;
            }
            let mut out = format!("{prefix}{name}");
            if is_dir {
                out.push('/');
            }
            Some(out)
        }))
    }

    fn list_recursive(
        path: &str,
        matcher: Option<GlobMatcher>,
        want_dirs: bool,
    ) -> Box<dyn Iterator<Item = String> + 'static> {
        let walk = WalkBuilder::new(path)
            .standard_filters(false)
            .follow_links(false)
            .build();
        Box::new(walk.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("walk error: {err}");
                    return None;
                }
            };
            // Depth 0 is the listed directory itself.
            if entry.depth() == 0 {
                return None;
            }
            let file_type = entry.file_type()?;
            let is_dir = file_type.is_dir();
            if (want_dirs && !is_dir) || (!want_dirs && !file_type.is_file()) {
                return None;
            }
            let name = entry.file_name().to_string_lossy();
            if !name_matches(&matcher, &name) {
                return None;
            }
            let mut out = entry.path().to_string_lossy().replace('\\', "/");
            if is_dir {
                out.push('/');
            }
            Some(out)
        }))
    }
}

impl FileSystem for OsFileSystem {
    fn is_case_sensitive(&self) -> bool {
        !cfg!(any(windows, target_os = "macos"))
    }

    fn resolve_absolute(&self, path: &str) -> String {
        let p = Path::new(path);
        let abs = if p.is_absolute() {
            p.to_path_buf()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(p)
        };
        let abs = std::fs::canonicalize(&abs).unwrap_or(abs);
        let mut out = abs.to_string_lossy().replace('\\', "/");
        if !out.ends_with('/') {
            out.push('/');
        }
        out
    }

    fn dir_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
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

#[cfg(test)]
#[path = "fsys_tests.rs"]
mod tests;
