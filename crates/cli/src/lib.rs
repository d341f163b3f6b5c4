pub mod cli;
pub mod config;
pub mod distinct;
pub mod error;
pub mod fsys;
pub mod order;
pub mod output;
pub mod pattern;
pub mod walker;

pub use cli::{CaseArg, Cli, KindArg, OrderArg, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use fsys::{FileSystem, OsFileSystem};
pub use order::TraverseOrder;
pub use pattern::{CompiledSegment, ComponentRange, GlobPattern};
pub use walker::{GlobWalker, MatchCasing, Selection, Walk, WalkOptions};

#[cfg(test)]
pub mod test_utils;
