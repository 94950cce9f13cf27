//! Lambda Bundler CLI
//!
//! Usage: lambda-bundler <COMMAND>
//!
//! Commands:
//!   build     Build one self-contained artifact per target
//!   validate  Check structural markers without writing
//!   clean     Remove previously generated artifacts

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lambda_bundler::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { workspace, targets } => commands::build::cmd_build(
            &workspace,
            targets.as_deref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Validate { workspace, scope } => {
            commands::validate::cmd_validate(&workspace, &scope, cli.json, cli.verbose, cli.color)
        }
        Commands::Clean { workspace, dry_run } => {
            commands::clean::cmd_clean(&workspace, dry_run, cli.json, cli.verbose, cli.color)
        }
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from `warn`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
