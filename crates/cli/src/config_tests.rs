#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::cli::{CaseArg, KindArg, OrderArg};

#[test]
fn finds_config_in_start_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "version = 1\n").unwrap();

    let found = find_config(tmp.path());
    assert_eq!(found, Some(tmp.path().join(CONFIG_FILE)));
}

#[test]
fn walks_up_to_find_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "version = 1\n").unwrap();
    let nested = tmp.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    let found = find_config(&nested);
    assert_eq!(found, Some(tmp.path().join(CONFIG_FILE)));
}

#[test]
fn stops_at_git_root() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "version = 1\n").unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();
    let nested = repo.join("src");
    fs::create_dir_all(&nested).unwrap();

    // The config above the git root must not be picked up.
    assert_eq!(find_config(&nested), None);
}

#[test]
fn explicit_missing_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let err = resolve(Some(&missing), tmp.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn explicit_config_wins_over_discovery() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "version = 1\n").unwrap();
    let other = tmp.path().join("other.toml");
    fs::write(&other, "version = 1\n").unwrap();

    let resolved = resolve(Some(&other), tmp.path()).unwrap();
    assert_eq!(resolved, Some(other));
}

#[test]
fn parses_typed_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(
        &path,
        r#"
version = 1

[defaults]
type = "dirs"
case = "insensitive"
order = "depth"
unique = true
"#,
    )
    .unwrap();

    let config = load(&path).unwrap();
    assert_eq!(config.defaults.kind, Some(KindArg::Dirs));
    assert_eq!(config.defaults.case, Some(CaseArg::Insensitive));
    assert_eq!(config.defaults.order, Some(OrderArg::Depth));
    assert_eq!(config.defaults.unique, Some(true));
}

#[test]
fn empty_config_is_all_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(&path, "").unwrap();

    let config = load(&path).unwrap();
    assert!(config.version.is_none());
    assert!(config.defaults.kind.is_none());
    assert!(config.defaults.unique.is_none());
}

#[test]
fn rejects_unsupported_version() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(&path, "version = 2\n").unwrap();

    let err = load(&path).unwrap_err();
    assert!(err.to_string().contains("version"), "got: {err}");
}

#[test]
fn rejects_malformed_toml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(&path, "defaults = nonsense\n").unwrap();

    assert!(matches!(load(&path), Err(Error::Config { .. })));
}
