//! Command dispatch logic for pathgraph

use std::time::Instant;

use crate::cli::{Cli, Commands};
use pathgraph_core::config::Config;
use pathgraph_core::error::Result;
use tracing::debug;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, config: &Config, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    debug!(elapsed = ?start.elapsed(), strict = ctx.strict(), "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Connected(args) => {
                let graph = ctx.build_graph(args)?;
                crate::commands::connected::execute(ctx.cli, &graph)
            }
            Commands::Path {
                graph,
                from,
                to,
                mode,
            } => {
                let built = ctx.build_graph(graph)?;
                let mode = mode.unwrap_or(ctx.config.relaxation);
                crate::commands::path::execute(ctx.cli, &built, *from, *to, mode)
            }
            Commands::Inspect(args) => {
                let graph = ctx.build_graph(args)?;
                crate::commands::inspect::execute(ctx.cli, &graph)
            }
        }
    }
}
