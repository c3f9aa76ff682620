use crate::support::{pathgraph, sample_edges};
use predicates::prelude::*;

// ============================================================================
// Connected command tests
// ============================================================================

#[test]
fn test_connected_sample_graph() {
    pathgraph()
        .arg("connected")
        .args(sample_edges())
        .assert()
        .success()
        .stdout("connected\nroot: 1 (5 vertices)\n");
}

#[test]
fn test_not_connected_lists_unreached() {
    pathgraph()
        .args(["connected", "-e", "1:2:10", "-e", "3:6:15", "-e", "4:5:10", "-e", "5:6:20"])
        .assert()
        .success()
        .stdout("not connected\nroot: 1 (6 vertices)\nunreached: 3 6 4 5\n");
}

#[test]
fn test_connected_quiet() {
    pathgraph()
        .args(["--quiet", "connected", "-e", "1:2:1", "-e", "3:2:1"])
        .assert()
        .success()
        .stdout("not connected\n");
}

#[test]
fn test_connected_json() {
    let output = pathgraph()
        .args(["--format", "json", "connected", "-e", "1:2:10", "-e", "3:1:5"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["connected"], false);
    assert_eq!(json["root"], 1);
    assert_eq!(json["vertices"], 3);
    assert_eq!(json["unreached"], serde_json::json!([3]));
    assert_eq!(json["rejected"], 0);
}

#[test]
fn test_connected_records() {
    pathgraph()
        .args(["--format", "records", "connected", "-e", "1:2:10", "--edge=-1:2:3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H pathgraph=1 records=1 mode=connected root=1 vertices=2 connected=true rejected=1\n",
        ));
}

#[test]
fn test_connected_without_vertices() {
    pathgraph()
        .args(["connected", "--edge=-1:-2:10"])
        .assert()
        .success()
        .stdout("connected\ngraph has no vertices\n");
}
