use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for pathgraph, isolated from the user's config and log env
pub fn pathgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("pathgraph");
    cmd.env("PATHGRAPH_CONFIG_DIR", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("RUST_LOG")
        .env_remove("PATHGRAPH_LOG")
        .env_remove("PATHGRAPH_LOG_LEVEL");
    cmd
}

/// Edge arguments for the ten-edge sample graph
pub fn sample_edges() -> Vec<String> {
    [
        "1:2:10", "1:5:10", "5:1:10", "4:2:40", "4:3:20", "5:4:30", "1:4:50", "1:3:30", "5:3:10",
        "3:5:10",
    ]
    .iter()
    .map(|e| format!("--edge={e}"))
    .collect()
}

/// Chain 1 -> 2 -> 3 -> 4 whose dense indices run against the path
pub fn reversed_chain_edges() -> Vec<String> {
    ["1:4:100", "3:4:1", "2:3:1", "1:2:1"]
        .iter()
        .map(|e| format!("--edge={e}"))
        .collect()
}
