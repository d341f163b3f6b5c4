// SPDX-License-Identifier: MIT

//! Recursive-descent glob traversal.
//!
//! The engine walks the directory tree one pattern component at a time.
//! Each unit of work is a frame `(directory, component range, recursive)`;
//! frames sit in a [`WorkBuffer`] so depth-first and breadth-first
//! expansion share one loop. Results stream out of a lazy iterator — a
//! terminal frame's listing is only consumed as the caller pulls, and
//! dropping the iterator abandons any open listing.
//!
//! A `**` component consumes no directory level; it marks the next
//! consuming component as matching at any depth. Once a directory fails to
//! match a component it is pruned permanently.

use crate::distinct::{Distinct, distinct};
use crate::error::Result;
use crate::fsys::{FileSystem, name_of};
use crate::order::{TraverseOrder, WorkBuffer};
use crate::pattern::normalize::GlobPattern;
use crate::pattern::segment::CompiledSegment;
use crate::pattern::split::{ComponentRange, component, first_range, is_last, next_range};

/// Which entry kinds terminal components yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Files,
    Dirs,
    All,
}

impl Selection {
    pub fn wants_files(self) -> bool {
        matches!(self, Selection::Files | Selection::All)
    }

    pub fn wants_dirs(self) -> bool {
        matches!(self, Selection::Dirs | Selection::All)
    }
}

/// Requested case sensitivity, resolved against the platform once per
/// enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCasing {
    Sensitive,
    Insensitive,
    #[default]
    Platform,
}

impl MatchCasing {
    /// Effective insensitivity for this enumeration.
    pub fn case_insensitive(self, fs: &dyn FileSystem) -> bool {
        match self {
            MatchCasing::Sensitive => false,
            MatchCasing::Insensitive => true,
            MatchCasing::Platform => !fs.is_case_sensitive(),
        }
    }
}

/// Enumeration configuration.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Directory relative patterns enumerate from.
    pub start_dir: String,

    /// Entry kinds to yield.
    pub selection: Selection,

    /// Case sensitivity of name matching.
    pub casing: MatchCasing,

    /// Expansion order for discovered sub-directories.
    pub order: TraverseOrder,

    /// Suppress duplicate result paths.
    pub distinct: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            start_dir: ".".to_string(),
            selection: Selection::default(),
            casing: MatchCasing::default(),
            order: TraverseOrder::default(),
            distinct: false,
        }
    }
}

/// Glob enumerator over a [`FileSystem`].
///
/// Holds only immutable configuration; every [`walk`](Self::walk) call
/// snapshots it into an independent iterator, so one walker value can run
/// repeated or concurrent enumerations without interference.
pub struct GlobWalker<'a> {
    fs: &'a dyn FileSystem,
    options: WalkOptions,
}

impl<'a> GlobWalker<'a> {
    pub fn new(fs: &'a dyn FileSystem, options: WalkOptions) -> Self {
        Self { fs, options }
    }

    pub fn with_defaults(fs: &'a dyn FileSystem) -> Self {
        Self::new(fs, WalkOptions::default())
    }

    /// Start a lazy enumeration of `pattern`.
    ///
    /// Pattern problems surface here, before any result is yielded;
    /// traversal itself never fails — unreadable directories contribute
    /// nothing.
    pub fn walk(&self, pattern: &str) -> Result<Walk<'a>> {
        let glob = GlobPattern::new(pattern, &self.options.start_dir, self.fs)?;
        glob.validate(self.options.selection)?;

        let case_insensitive = self.options.casing.case_insensitive(self.fs);
        let mut frames = WorkBuffer::new(self.options.order);
        frames.push(Frame {
            dir: glob.start_dir().to_string(),
            range: first_range(glob.text()),
            recursive: false,
        });

        let traversal = Traversal {
            fs: self.fs,
            text: glob.text().to_string(),
            selection: self.options.selection,
            case_insensitive,
            frames,
            current: None,
        };
        Ok(Walk {
            inner: distinct(traversal, self.options.distinct),
        })
    }
}

/// Lazy stream of matching paths.
pub struct Walk<'a> {
    inner: Distinct<Traversal<'a>>,
}

impl Iterator for Walk<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }
}

/// One unit of traversal work.
#[derive(Debug)]
struct Frame {
    dir: String,
    range: ComponentRange,
    /// This frame's component matches at any depth below `dir`.
    recursive: bool,
}

struct Traversal<'a> {
    fs: &'a dyn FileSystem,
    text: String,
    selection: Selection,
    case_insensitive: bool,
    frames: WorkBuffer<Frame>,
    current: Option<Box<dyn Iterator<Item = String> + 'a>>,
}

impl Iterator for Traversal<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(path) = current.next() {
                    return Some(path);
                }
                self.current = None;
            }
            let frame = self.frames.take()?;
            self.expand(frame);
        }
    }
}

impl<'a> Traversal<'a> {
    /// Process one frame: either set up a terminal listing or push frames
    /// for matching sub-directories.
    fn expand(&mut self, frame: Frame) {
        let mut range = frame.range;
        let mut recursive = frame.recursive;

        // `**` components consume no directory level; they put the next
        // consuming component into any-depth mode. A trailing `**` is an
        // any-depth listing of everything below this frame.
        while component(&self.text, range) == "**" {
            recursive = true;
            match next_range(&self.text, range) {
                Some(next) => range = next,
                None => {
                    self.current = Some(listing(
                        self.fs,
                        self.selection,
                        self.case_insensitive,
                        frame.dir,
                        CompiledSegment::wildcard(),
                        true,
                    ));
                    return;
                }
            }
        }

        let comp = component(&self.text, range).to_string();
        let last = is_last(&self.text, range);

        // Current/parent tokens re-anchor the frame without listing.
        if comp == "." || comp == ".." {
            let dir = if comp == "." {
                frame.dir
            } else {
                parent_dir(&frame.dir)
            };
            if last {
                if self.selection.wants_dirs() && self.fs.dir_exists(&dir) {
                    self.current = Some(Box::new(std::iter::once(dir)));
                }
            } else if let Some(next) = next_range(&self.text, range) {
                self.frames.push(Frame {
                    dir,
                    range: next,
                    recursive,
                });
            }
            return;
        }

        let segment = match CompiledSegment::compile(&comp, self.case_insensitive) {
            Ok(segment) => segment,
            Err(err) => {
                // Validation compiled every component already; nothing to
                // do but drop the frame.
                tracing::debug!("segment `{comp}` failed to compile: {err}");
                return;
            }
        };

        if last {
            self.current = Some(listing(
                self.fs,
                self.selection,
                self.case_insensitive,
                frame.dir,
                segment,
                recursive,
            ));
            return;
        }

        let Some(next) = next_range(&self.text, range) else {
            return;
        };
        let matches: Vec<String> = self
            .fs
            .list_dirs(&frame.dir, &segment.prefilter, recursive, self.case_insensitive)
            .filter(|path| segment.matches_name(name_of(path)))
            .collect();
        for dir in matches {
            self.frames.push(Frame {
                dir,
                range: next,
                recursive: false,
            });
        }
    }
}

/// Terminal listing of `dir` filtered through `segment`, restricted to the
/// selected entry kinds.
fn listing<'a>(
    fs: &'a dyn FileSystem,
    selection: Selection,
    case_insensitive: bool,
    dir: String,
    segment: CompiledSegment,
    recursive: bool,
) -> Box<dyn Iterator<Item = String> + 'a> {
    let mut parts: Vec<Box<dyn Iterator<Item = String> + 'a>> = Vec::new();
    if selection.wants_files() {
        let filter = segment.clone();
        parts.push(Box::new(
            fs.list_files(&dir, &segment.prefilter, recursive, case_insensitive)
                .filter(move |path| filter.matches_name(name_of(path))),
        ));
    }
    if selection.wants_dirs() {
        let prefilter = segment.prefilter.clone();
        parts.push(Box::new(
            fs.list_dirs(&dir, &prefilter, recursive, case_insensitive)
                .filter(move |path| segment.matches_name(name_of(path))),
        ));
    }
    Box::new(parts.into_iter().flatten())
}

/// Lexical parent of a trailing-`/` directory string; a root is its own
/// parent.
fn parent_dir(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => trimmed[..=i].to_string(),
        None => dir.to_string(),
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
