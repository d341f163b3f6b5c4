// SPDX-License-Identifier: MIT

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::order::TraverseOrder;
use crate::walker::{MatchCasing, Selection};

/// A shell-glob file and directory enumerator with recursive wildcards
#[derive(Parser)]
#[command(name = "globtrot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Glob pattern to enumerate (`*`, `?`, `[...]`, `[[:class:]]`, `**`)
    #[arg(value_name = "PATTERN", required_unless_present = "completions")]
    pub pattern: Option<String>,

    /// Directory to enumerate from
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub from: String,

    /// Entry kinds to yield
    #[arg(short = 't', long = "type", value_enum, value_name = "KIND")]
    pub kind: Option<KindArg>,

    /// Case sensitivity of name matching
    #[arg(long, value_enum, value_name = "MODE")]
    pub case: Option<CaseArg>,

    /// Traversal order
    #[arg(long, value_enum, value_name = "ORDER")]
    pub order: Option<OrderArg>,

    /// Suppress duplicate results
    #[arg(short = 'u', long)]
    pub unique: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "GLOBTROT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// Entry kinds, as spelled on the command line and in globtrot.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindArg {
    Files,
    Dirs,
    All,
}

impl From<KindArg> for Selection {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Files => Selection::Files,
            KindArg::Dirs => Selection::Dirs,
            KindArg::All => Selection::All,
        }
    }
}

/// Case sensitivity, as spelled on the command line and in globtrot.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseArg {
    /// Follow the platform convention
    Auto,
    Sensitive,
    Insensitive,
}

impl From<CaseArg> for MatchCasing {
    fn from(case: CaseArg) -> Self {
        match case {
            CaseArg::Auto => MatchCasing::Platform,
            CaseArg::Sensitive => MatchCasing::Sensitive,
            CaseArg::Insensitive => MatchCasing::Insensitive,
        }
    }
}

/// Traversal order, as spelled on the command line and in globtrot.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderArg {
    Breadth,
    Depth,
}

impl From<OrderArg> for TraverseOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Breadth => TraverseOrder::BreadthFirst,
            OrderArg::Depth => TraverseOrder::DepthFirst,
        }
    }
}

/// Output format for matched paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line
    Text,
    /// A JSON array of path strings
    Json,
}
