//! Glob pattern compilation.
//!
//! A raw pattern goes through three stages before traversal:
//! - normalization (separator unification, `***` collapse, root detection),
//! - on-demand splitting into `/`-delimited component ranges,
//! - per-component compilation into a coarse name filter plus, when bracket
//!   expressions are involved, a precise anchored regex.

pub mod normalize;
pub mod segment;
pub mod split;

pub use normalize::GlobPattern;
pub use segment::CompiledSegment;
pub use split::{ComponentRange, component, first_range, is_last, next_range};
