//! Package discovery on disk

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::Path;

use common::*;
use pretty_assertions::assert_eq;
use recovergoroutine::features::parsing::PackageLoader;
use recovergoroutine::{Analyzer, AnalyzerConfig, RecoverError};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, source: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, source).unwrap();
}

fn unsafe_package(name: &str) -> String {
    fixture_package(fixture_unsafe_launch()).replace("package fixture", &format!("package {name}"))
}

#[test]
fn test_walks_nested_packages() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a/a.go", &unsafe_package("a"));
    write(dir.path(), "a/b/b.go", &unsafe_package("b"));
    write(dir.path(), "c/c.go", &fixture_package(fixture_safe_launch()));

    let packages = PackageLoader::new().load_paths([dir.path()]).unwrap();
    let names: Vec<_> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "fixture"]);

    let report = Analyzer::default().run_paths([dir.path()]).unwrap();
    assert_eq!(report.diagnostics.len(), 2);
}

#[test]
fn test_ignored_directories() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.go", &fixture_package(fixture_safe_launch()));
    write(dir.path(), "vendor/v/v.go", &unsafe_package("v"));
    write(dir.path(), "testdata/t/t.go", &unsafe_package("t"));
    write(dir.path(), ".hidden/h.go", &unsafe_package("h"));
    write(dir.path(), "_skip/s.go", &unsafe_package("s"));

    let report = Analyzer::default().run_paths([dir.path()]).unwrap();
    assert_eq!(report.packages, 1);
    assert_clean(&report);
}

#[test]
fn test_explicit_testdata_root_is_walked() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "testdata/t.go", &unsafe_package("t"));

    let report = Analyzer::default()
        .run_paths([dir.path().join("testdata")])
        .unwrap();
    assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn test_single_file_and_duplicates() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a/a.go", &unsafe_package("a"));
    let file = dir.path().join("a/a.go");

    let report = Analyzer::default()
        .run_paths([file.clone(), file, dir.path().to_path_buf()])
        .unwrap();
    assert_eq!(report.files, 1);
    assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn test_skip_tests() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a/a.go", &fixture_package(fixture_safe_launch()));
    write(dir.path(), "a/a_test.go", &fixture_package(fixture_unsafe_launch()).replace("run", "runTest"));

    let report = Analyzer::default().run_paths([dir.path()]).unwrap();
    assert_eq!(report.diagnostics.len(), 1);

    let config = AnalyzerConfig::new().with_skip_tests(true);
    let report = Analyzer::new(config).run_paths([dir.path()]).unwrap();
    assert_eq!(report.files, 1);
    assert_clean(&report);
}

#[test]
fn test_missing_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Analyzer::default()
        .run_paths([dir.path().join("nope")])
        .unwrap_err();
    assert!(matches!(err, RecoverError::Io { .. }), "got {err:?}");
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recovergoroutine.yaml");
    fs::write(&path, "recover: Guard\nskip_tests: true\n").unwrap();

    let config = AnalyzerConfig::from_yaml_file(&path).unwrap();
    assert_eq!(config.custom_recover(), Some("Guard"));
    assert!(config.skip_tests);
}
