// SPDX-License-Identifier: MIT

//! Configuration file discovery and parsing.
//!
//! Looks for `globtrot.toml` from the start directory up to the git root.
//! The file only carries defaults; command-line flags always win.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{CaseArg, KindArg, OrderArg};
use crate::error::{Error, Result};

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "globtrot.toml";

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1 when present).
    pub version: Option<i64>,

    /// Default enumeration options.
    #[serde(default)]
    pub defaults: Defaults,
}

/// The `[defaults]` table.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct Defaults {
    /// Entry kinds to yield: `files`, `dirs`, or `all`.
    #[serde(rename = "type")]
    pub kind: Option<KindArg>,

    /// Case sensitivity: `auto`, `sensitive`, or `insensitive`.
    pub case: Option<CaseArg>,

    /// Traversal order: `breadth` or `depth`.
    pub order: Option<OrderArg>,

    /// Suppress duplicate results.
    pub unique: Option<bool>,
}

/// Find globtrot.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "GLOBTROT_CONFIG")
/// 2. Discovery from the start directory up to git root
/// 3. None (use defaults)
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(start_dir)),
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path).map_err(|err| Error::Config {
        message: format!("{}: {err}", path.display()),
        path: Some(path.to_path_buf()),
    })?;
    let config: Config = toml::from_str(&raw).map_err(|err| Error::Config {
        message: format!("{}: {err}", path.display()),
        path: Some(path.to_path_buf()),
    })?;
    if let Some(version) = config.version
        && version != 1
    {
        return Err(Error::Config {
            message: format!("unsupported config version {version} (expected 1)"),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
