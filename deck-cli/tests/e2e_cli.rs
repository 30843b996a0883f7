//! End-to-End CLI Tests for pitchdeck

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog shipped with the deck crate
fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../deck/content/catalog.json")
}

/// Get a command pointing to the pitchdeck binary, isolated from the
/// caller's working directory and log settings
fn pitchdeck(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pitchdeck");
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

/// Copy of the shipped catalog with one English feature removed
fn broken_catalog(dir: &Path) -> PathBuf {
    let mut catalog: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(catalog_path()).unwrap()).unwrap();
    catalog["en"]["products"][2]["features"]
        .as_array_mut()
        .unwrap()
        .pop();
    let path = dir.join("broken.json");
    std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();
    path
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("export"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_theme() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .args(["render", "--theme", "sepia"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown theme 'sepia'"));
    }
}

// ============================================
// render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_default_file() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("pitchdeck.html"));

        let html = std::fs::read_to_string(temp.path().join("pitchdeck.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html class="dark" lang="en">"#));
        assert!(html.contains("Application 2024"));
        assert_eq!(html.matches(r#"data-role="product-test""#).count(), 1);
        assert_eq!(html.matches("status-badge").count(), 5);
    }

    #[test]
    fn writes_one_file_per_language() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .args(["render", "--all-languages", "--theme", "light", "--out", "dist/deck.html"])
            .assert()
            .success();

        let de = std::fs::read_to_string(temp.path().join("dist/deck.de.html")).unwrap();
        let en = std::fs::read_to_string(temp.path().join("dist/deck.en.html")).unwrap();
        assert!(de.contains(r#"<html class="light" lang="de">"#));
        assert!(de.contains("Bewerbung 2024"));
        assert!(en.contains(r#"<html class="light" lang="en">"#));
        assert!(!temp.path().join("dist/deck.html").exists());
    }

    #[test]
    fn always_test_link_policy_drops_badges() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .args(["render", "--cta", "always-test-link", "-o", "deck.html"])
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("deck.html")).unwrap();
        assert!(!html.contains("status-badge"));
        assert_eq!(html.matches(r#"data-role="product-test""#).count(), 6);
    }

    #[test]
    fn reads_defaults_from_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("pitchdeck.toml"),
            "[render]\nlanguage = \"de\"\nout = \"from-config.html\"\n",
        )
        .unwrap();

        pitchdeck(temp.path()).arg("render").assert().success();

        let html = std::fs::read_to_string(temp.path().join("from-config.html")).unwrap();
        assert!(html.contains(r#"lang="de""#));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .args(["render", "--config", "nope.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("config file nope.toml not found"));
    }

    #[test]
    fn refuses_out_of_parity_catalog() {
        let temp = TempDir::new().unwrap();
        let catalog = broken_catalog(temp.path());
        pitchdeck(temp.path())
            .arg("render")
            .arg("--catalog")
            .arg(&catalog)
            .assert()
            .failure()
            .stderr(predicate::str::contains("products[2].features"));

        assert!(!temp.path().join("pitchdeck.html").exists());
    }
}

// ============================================
// check / export
// ============================================

mod check_and_export {
    use super::*;

    #[test]
    fn shipped_catalog_passes() {
        let temp = TempDir::new().unwrap();
        pitchdeck(temp.path())
            .arg("check")
            .arg("--catalog")
            .arg(catalog_path())
            .assert()
            .success()
            .stdout(predicate::str::contains("catalog OK: 6 products"));
    }

    #[test]
    fn reports_each_violation_and_exits_1() {
        let temp = TempDir::new().unwrap();
        let catalog = broken_catalog(temp.path());
        pitchdeck(temp.path())
            .arg("check")
            .arg("--catalog")
            .arg(&catalog)
            .assert()
            .code(1)
            .stdout(predicate::str::starts_with("products[2].features: "));
    }

    #[test]
    fn malformed_catalog_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        pitchdeck(temp.path())
            .arg("check")
            .arg("--catalog")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse catalog"));
    }

    #[test]
    fn exports_one_language_as_json() {
        let temp = TempDir::new().unwrap();
        let output = pitchdeck(temp.path())
            .args(["export", "--lang", "de"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["hero"]["headline"], "Bewerbung 2024");
        assert_eq!(value["products"].as_array().unwrap().len(), 6);
    }
}
