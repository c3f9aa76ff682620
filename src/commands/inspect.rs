//! `pathgraph inspect` - dump the built graph

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use pathgraph_core::edge::{EdgeRecord, VertexId, Weight};
use pathgraph_core::error::Result;
use pathgraph_core::graph::{Graph, RejectedEdge};

#[derive(Debug, Serialize)]
struct InspectOutput<'a> {
    vertices: &'a [VertexId],
    matrix: Vec<&'a [Weight]>,
    edges: &'a [EdgeRecord],
    rejected: &'a [RejectedEdge],
}

/// Execute the inspect command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = InspectOutput {
                vertices: graph.vertices(),
                matrix: graph.matrix().rows().collect(),
                edges: graph.edges(),
                rejected: graph.rejected(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, graph),
        OutputFormat::Records => output_records(graph),
    }

    Ok(())
}

fn output_human(cli: &Cli, graph: &Graph) {
    let vertices = graph.vertices();
    println!(
        "{} vertices, {} edges, {} rejected",
        graph.vertex_count(),
        graph.edge_count(),
        graph.rejected().len()
    );

    if !vertices.is_empty() {
        let width = graph
            .matrix()
            .rows()
            .flatten()
            .map(|w| w.to_string().len())
            .chain(vertices.iter().map(|v| v.to_string().len()))
            .max()
            .unwrap_or(1);

        println!();
        let header: Vec<String> = vertices.iter().map(|v| format!("{:>width$}", v)).collect();
        println!("{:>width$} | {}", "", header.join(" "));
        for (vertex, row) in vertices.iter().zip(graph.matrix().rows()) {
            let cells: Vec<String> = row
                .iter()
                .map(|w| match *w {
                    0 => format!("{:>width$}", "."),
                    w => format!("{:>width$}", w),
                })
                .collect();
            println!("{:>width$} | {}", vertex, cells.join(" "));
        }
    }

    if cli.quiet || graph.rejected().is_empty() {
        return;
    }

    println!();
    println!("rejected:");
    for rejected in graph.rejected() {
        println!(
            "  {}:{}:{}  {}",
            rejected.begin, rejected.end, rejected.weight, rejected.error
        );
    }
}

fn output_records(graph: &Graph) {
    println!(
        "H pathgraph=1 records=1 mode=inspect vertices={} edges={} rejected={}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.rejected().len()
    );
    for (index, vertex) in graph.vertices().iter().enumerate() {
        println!("V {} {}", index, vertex);
    }
    for edge in graph.edges() {
        println!("E {} {} {}", edge.begin(), edge.end(), edge.weight());
    }
    for rejected in graph.rejected() {
        println!(
            "R {} {} {} \"{}\"",
            rejected.begin, rejected.end, rejected.weight, rejected.error
        );
    }
}
