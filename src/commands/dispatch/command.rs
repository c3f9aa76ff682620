//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use pathgraph_core::config::Config;
use pathgraph_core::error::{GraphError, Result};
use pathgraph_core::graph::{Graph, GraphBuilder};
use pathgraph_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Strict mode from the flag or the config file
    pub fn strict(&self) -> bool {
        self.cli.strict || self.config.strict
    }

    /// Build a graph from the command's edges.
    ///
    /// Rejected edges are reported by the graph's event sink; in strict mode
    /// they also fail the command.
    pub fn build_graph(&self, args: &GraphArgs) -> Result<Graph> {
        let graph = GraphBuilder::new()
            .edges(args.edges.iter().map(|spec| (spec.begin, spec.end, spec.weight)))
            .build();

        trace_time!(
            self.start,
            "build_graph",
            vertices = graph.vertex_count(),
            rejected = graph.rejected().len()
        );

        if self.strict() && !graph.rejected().is_empty() {
            return Err(GraphError::RejectedEdges {
                count: graph.rejected().len(),
            });
        }

        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Reachability and lowest-weight paths over weighted directed graphs.");
        println!();
        println!("Run `pathgraph --help` for usage information.");
        Ok(())
    }
}
