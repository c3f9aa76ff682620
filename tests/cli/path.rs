use crate::support::{pathgraph, reversed_chain_edges, sample_edges};
use predicates::prelude::*;

// ============================================================================
// Path command tests
// ============================================================================

#[test]
fn test_path_direct_edge() {
    pathgraph()
        .args(["path", "-e", "1:2:10", "-e", "2:3:15", "--from", "1", "--to", "2"])
        .assert()
        .success()
        .stdout("Path ( 1 -> 2 )\nweight: 10 (1 hops, two-phase)\n");
}

#[test]
fn test_path_beats_direct_edge() {
    pathgraph()
        .arg("path")
        .args(sample_edges())
        .args(["--from", "1", "--to", "4"])
        .assert()
        .success()
        .stdout("Path ( 1 -> 5 -> 4 )\nweight: 40 (2 hops, two-phase)\n");
}

#[test]
fn test_path_same_vertex() {
    pathgraph()
        .args(["--quiet", "path", "-e", "1:2:10", "--from", "2", "--to", "2"])
        .assert()
        .success()
        .stdout("Path ( 2 )\n");
}

#[test]
fn test_path_unreachable_exit_code_3() {
    pathgraph()
        .args([
            "path", "-e", "1:2:10", "-e", "3:6:15", "-e", "4:5:10", "-e", "5:6:20", "--from", "1",
            "--to", "6",
        ])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("error: no path from 1 to 6"));
}

#[test]
fn test_path_all_edges_invalid() {
    pathgraph()
        .args([
            "path",
            "--edge=-1:-2:10",
            "--edge=12:3:-1",
            "--from",
            "1",
            "--to",
            "2",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge_rejected"))
        .stderr(predicate::str::contains("no path from 1 to 2"));
}

#[test]
fn test_path_strict_rejects() {
    pathgraph()
        .args([
            "--strict",
            "path",
            "--edge=-1:-2:10",
            "--edge=12:3:-1",
            "--from",
            "1",
            "--to",
            "2",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("2 edge(s) rejected in strict mode"));
}

#[test]
fn test_path_json() {
    let output = pathgraph()
        .args(["--format", "json", "path"])
        .args(sample_edges())
        .args(["--from", "1", "--to", "4"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], 1);
    assert_eq!(json["to"], 4);
    assert_eq!(json["mode"], "two-phase");
    assert_eq!(json["path"], serde_json::json!([1, 5, 4]));
    assert_eq!(json["hops"], 2);
    assert_eq!(json["weight"], 40);
}

#[test]
fn test_path_json_error_envelope() {
    let output = pathgraph()
        .args(["--format", "json", "path", "-e", "1:2:1", "--from", "2", "--to", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("json error line");
    let json: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["error"]["type"], "no_path");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_path_records() {
    pathgraph()
        .args(["--format", "records", "path"])
        .args(sample_edges())
        .args(["--from", "1", "--to", "4"])
        .assert()
        .success()
        .stdout(
            "H pathgraph=1 records=1 mode=path from=1 to=4 relaxation=two-phase found=true length=3 weight=40\n\
             V 1\nV 5\nV 4\nE 1 5 10\nE 5 4 30\n",
        );
}

#[test]
fn test_two_phase_misses_long_chain() {
    pathgraph()
        .args(["--quiet", "path"])
        .args(reversed_chain_edges())
        .args(["--from", "1", "--to", "4"])
        .assert()
        .success()
        .stdout("Path ( 1 -> 4 )\n");
}

#[test]
fn test_converged_mode_finds_long_chain() {
    pathgraph()
        .arg("path")
        .args(reversed_chain_edges())
        .args(["--from", "1", "--to", "4", "--mode", "converged"])
        .assert()
        .success()
        .stdout("Path ( 1 -> 2 -> 3 -> 4 )\nweight: 3 (3 hops, converged)\n");
}

#[test]
fn test_unknown_mode_is_usage_error() {
    pathgraph()
        .args(["path", "-e", "1:2:1", "--from", "1", "--to", "2", "--mode", "dijkstra"])
        .assert()
        .code(2);
}
