// SPDX-License-Identifier: MIT

//! Pattern normalization and validation.
//!
//! Canonicalizes a raw glob string in a single pass: separators become `/`,
//! duplicate separators collapse, and runs of three or more `*` collapse to
//! `**`. A leading root (`/`, or a drive prefix on drive-letter platforms)
//! becomes the start directory; otherwise the configured start directory is
//! resolved through the file-system collaborator.

use crate::error::{Error, Result};
use crate::fsys::FileSystem;
use crate::pattern::segment::CompiledSegment;
use crate::pattern::split::{component, first_range, is_last, next_range};
use crate::walker::Selection;

/// A normalized glob pattern bound to its start directory.
///
/// Immutable once built; one value is owned by one enumeration.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    text: String,
    start_dir: String,
    trailing_sep: bool,
}

impl GlobPattern {
    /// Normalize `raw` and resolve the start directory.
    pub fn new(raw: &str, from_dir: &str, fs: &dyn FileSystem) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::EmptyPattern);
        }
        let (root, rest) = split_root(raw, cfg!(windows));
        let start_dir = match root {
            Some(root) => root,
            None => fs.resolve_absolute(from_dir),
        };
        let (text, trailing_sep) = normalize(rest);
        Ok(Self {
            raw: raw.to_string(),
            text,
            start_dir,
            trailing_sep,
        })
    }

    /// Normalized pattern text: no root prefix, no trailing separator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Absolute start directory, with a trailing `/`.
    pub fn start_dir(&self) -> &str {
        &self.start_dir
    }

    /// Whether the raw pattern ended with a separator.
    pub fn trailing_sep(&self) -> bool {
        self.trailing_sep
    }

    /// Reject patterns that can never enumerate anything sensible.
    ///
    /// Runs before traversal so a bad pattern fails without yielding any
    /// partial output. Every component is compiled once here, which also
    /// surfaces bracket-expression errors up front.
    pub fn validate(&self, selection: Selection) -> Result<()> {
        let files_only = selection == Selection::Files;
        if self.trailing_sep && files_only {
            return Err(Error::TrailingSeparator(self.raw.clone()));
        }

        let mut range = first_range(&self.text);
        loop {
            let comp = component(&self.text, range);
            if comp == "**" {
                if is_last(&self.text, range) && files_only {
                    return Err(Error::TrailingRecursive(self.raw.clone()));
                }
            } else if comp.contains("**") {
                return Err(Error::UnboundedRecursive(self.raw.clone()));
            } else {
                CompiledSegment::compile(comp, false)?;
            }
            match next_range(&self.text, range) {
                Some(next) => range = next,
                None => break,
            }
        }
        Ok(())
    }
}

/// Split a leading root off the raw pattern.
///
/// Returns the root as a directory string (`/` or `X:/`) and the remainder
/// of the pattern. Drive prefixes are only recognized when
/// `drive_letters` is set.
fn split_root(raw: &str, drive_letters: bool) -> (Option<String>, &str) {
    if raw.starts_with('/') || raw.starts_with('\\') {
        return (Some("/".to_string()), &raw[1..]);
    }
    if drive_letters {
        let bytes = raw.as_bytes();
        if bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && (bytes[2] == b'/' || bytes[2] == b'\\')
        {
            return (Some(format!("{}:/", &raw[..1])), &raw[3..]);
        }
    }
    (None, raw)
}

/// Single left-to-right canonicalization pass.
fn normalize(rest: &str) -> (String, bool) {
    let mut out = String::with_capacity(rest.len());
    for c in rest.chars() {
        let c = if c == '\\' { '/' } else { c };
        match c {
            '/' if out.ends_with('/') => {}
            '*' if out.ends_with("**") => {}
            _ => out.push(c),
        }
    }
    let trailing = out.ends_with('/');
    if trailing {
        out.pop();
    }
    (out, trailing)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
