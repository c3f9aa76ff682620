use crate::support::pathgraph;
use predicates::prelude::*;

// ============================================================================
// Inspect command tests
// ============================================================================

#[test]
fn test_inspect_human_matrix() {
    pathgraph()
        .args(["inspect", "-e", "1:2:10", "-e", "2:3:15"])
        .assert()
        .success()
        .stdout(
            "3 vertices, 2 edges, 0 rejected\n\
             \n\
             \x20  |  1  2  3\n\
             \x201 |  . 10  .\n\
             \x202 |  .  . 15\n\
             \x203 |  .  .  .\n",
        );
}

#[test]
fn test_inspect_lists_rejected() {
    pathgraph()
        .args(["inspect", "-e", "1:2:10", "--edge=12:3:-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected:"))
        .stdout(predicate::str::contains(
            "12:3:-1  weight must be positive, got -1",
        ));
}

#[test]
fn test_inspect_records() {
    pathgraph()
        .args(["--format", "records", "inspect", "-e", "1:2:10", "-e", "2:3:15", "-e", "1:2:4"])
        .assert()
        .success()
        .stdout(
            "H pathgraph=1 records=1 mode=inspect vertices=3 edges=3 rejected=0\n\
             V 0 1\nV 1 2\nV 2 3\nE 1 2 10\nE 2 3 15\nE 1 2 4\n",
        );
}

#[test]
fn test_inspect_json_last_write_wins() {
    let output = pathgraph()
        .args(["--format", "json", "inspect", "-e", "1:2:10", "-e", "1:2:4", "--edge=0:-3:1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertices"], serde_json::json!([1, 2]));
    assert_eq!(json["matrix"], serde_json::json!([[0, 4], [0, 0]]));
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
    assert_eq!(json["rejected"][0]["end"], -3);
    assert_eq!(json["rejected"][0]["error"]["kind"], "negative-end");
}
