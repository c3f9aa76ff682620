//! `pathgraph path` - lowest-weight path between two vertices

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use pathgraph_core::edge::VertexId;
use pathgraph_core::error::{GraphError, Result};
use pathgraph_core::graph::{Graph, PathResult, RelaxationMode};

#[derive(Debug, Serialize)]
struct PathOutput<'a> {
    from: VertexId,
    to: VertexId,
    mode: RelaxationMode,
    path: &'a PathResult,
    hops: usize,
    weight: i64,
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    from: VertexId,
    to: VertexId,
    mode: RelaxationMode,
) -> Result<()> {
    let path = graph
        .optimal_way_with(from, to, mode)
        .ok_or(GraphError::NoPath { from, to })?;

    let output = PathOutput {
        from,
        to,
        mode,
        path: &path,
        hops: path.hops(),
        weight: graph.path_weight(&path).unwrap_or_default(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", path);
            if !cli.quiet {
                println!("weight: {} ({} hops, {})", output.weight, output.hops, mode);
            }
        }
        OutputFormat::Records => output_records(graph, &output),
    }

    Ok(())
}

fn output_records(graph: &Graph, output: &PathOutput<'_>) {
    println!(
        "H pathgraph=1 records=1 mode=path from={} to={} relaxation={} found=true length={} weight={}",
        output.from,
        output.to,
        output.mode,
        output.path.len(),
        output.weight
    );
    for vertex in output.path.vertices() {
        println!("V {}", vertex);
    }
    for hop in output.path.vertices().windows(2) {
        let weight = graph.weight(hop[0], hop[1]).unwrap_or_default();
        println!("E {} {} {}", hop[0], hop[1], weight);
    }
}
