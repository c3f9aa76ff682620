//! `pathgraph connected` - reachability from the first discovered vertex

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use pathgraph_core::edge::VertexId;
use pathgraph_core::error::Result;
use pathgraph_core::graph::Graph;

#[derive(Debug, Serialize)]
struct ConnectedOutput {
    connected: bool,
    root: Option<VertexId>,
    vertices: usize,
    /// Vertices never reached from the root, in dense-index order
    unreached: Vec<VertexId>,
    rejected: usize,
}

/// Execute the connected command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let connected = graph.is_connected();
    let output = ConnectedOutput {
        connected,
        root: graph.vertices().first().copied(),
        vertices: graph.vertex_count(),
        unreached: graph.unreached(),
        rejected: graph.rejected().len(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, &output),
        OutputFormat::Records => output_records(&output),
    }

    Ok(())
}

fn output_human(cli: &Cli, output: &ConnectedOutput) {
    if output.connected {
        println!("connected");
    } else {
        println!("not connected");
    }

    if cli.quiet {
        return;
    }

    match output.root {
        Some(root) => println!("root: {} ({} vertices)", root, output.vertices),
        None => println!("graph has no vertices"),
    }
    if !output.unreached.is_empty() {
        let ids: Vec<String> = output.unreached.iter().map(|v| v.to_string()).collect();
        println!("unreached: {}", ids.join(" "));
    }
}

fn output_records(output: &ConnectedOutput) {
    let root = output
        .root
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "H pathgraph=1 records=1 mode=connected root={} vertices={} connected={} rejected={}",
        root, output.vertices, output.connected, output.rejected
    );
    for vertex in &output.unreached {
        println!("U {}", vertex);
    }
}
