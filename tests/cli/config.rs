use crate::support::{pathgraph, reversed_chain_edges};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_explicit_config_sets_relaxation() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathgraph.toml");
    fs::write(&config, "relaxation = \"converged\"\n").unwrap();

    pathgraph()
        .arg("--config")
        .arg(&config)
        .args(["--quiet", "path"])
        .args(reversed_chain_edges())
        .args(["--from", "1", "--to", "4"])
        .assert()
        .success()
        .stdout("Path ( 1 -> 2 -> 3 -> 4 )\n");
}

#[test]
fn test_mode_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathgraph.toml");
    fs::write(&config, "relaxation = \"converged\"\n").unwrap();

    pathgraph()
        .arg("--config")
        .arg(&config)
        .args(["--quiet", "path"])
        .args(reversed_chain_edges())
        .args(["--from", "1", "--to", "4", "--mode", "two-phase"])
        .assert()
        .success()
        .stdout("Path ( 1 -> 4 )\n");
}

#[test]
fn test_config_dir_env_enables_strict() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "strict = true\n").unwrap();

    pathgraph()
        .env("PATHGRAPH_CONFIG_DIR", dir.path())
        .args(["connected", "-e", "1:2:3", "--edge=1:2:0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1 edge(s) rejected in strict mode"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();

    pathgraph()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["connected", "-e", "1:2:3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_config_value() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathgraph.toml");
    fs::write(&config, "relaxation = \"dijkstra\"\n").unwrap();

    pathgraph()
        .arg("--config")
        .arg(&config)
        .args(["connected", "-e", "1:2:3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
