//! Integration tests for Settings layered loading.
//!
//! These tests never read the real global config or the environment:
//! they pass explicit files and disable the env layer.

use std::fs;

use bstree::config::Settings;
use bstree::Order;
use tempfile::TempDir;

#[test]
fn given_no_files_when_load_then_defaults() {
    let settings = Settings::load_from(None, None, false).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("bstree.toml");
    fs::write(&global, "order = \"level\"\n").unwrap();

    let settings = Settings::load_from(Some(global.as_path()), None, false).expect("load settings");

    assert_eq!(settings.order, Order::Level);
    assert_eq!(settings.separator, ", ");
    assert!(!settings.balance);
}

#[test]
fn given_explicit_file_when_load_then_wins_over_global() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(&global, "order = \"level\"\nseparator = \" \"\n").unwrap();
    fs::write(&local, "order = \"inorder\"\nbalance = true\n").unwrap();

    let settings = Settings::load_from(Some(global.as_path()), Some(local.as_path()), false).expect("load settings");

    assert_eq!(settings.order, Order::Inorder);
    assert_eq!(settings.separator, " ");
    assert!(settings.balance);
}

#[test]
fn given_missing_global_file_when_load_then_skipped() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("absent.toml");
    let settings = Settings::load_from(Some(global.as_path()), None, false).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("absent.toml");
    let err = Settings::load_from(None, Some(local.as_path()), false).unwrap_err();
    assert_eq!(err.exit_code(), bstree::exitcode::CONFIG);
}

#[test]
fn given_unknown_order_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("bad.toml");
    fs::write(&local, "order = \"sideways\"\n").unwrap();
    assert!(Settings::load_from(None, Some(local.as_path()), false).is_err());
}
