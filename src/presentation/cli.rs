//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - `--workspace` defaults to the current directory; relative directories
//!   given on the command line resolve against it

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Lambda Bundler - embed a shared configuration module into self-contained function artifacts
#[derive(Parser, Debug)]
#[command(name = "lambda-bundler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to find the project and its directories
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceArgs {
    /// Workspace root holding bundler.toml (default: current directory)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Directory holding the function sources and the shared module
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Directory receiving one sub-directory per target
    #[arg(long)]
    pub deployment_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build one self-contained artifact per target
    Build {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        /// Only build these targets (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        targets: Option<Vec<String>>,
    },

    /// Check structural markers without writing anything
    Validate {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        #[command(flatten)]
        scope: ValidateArgs,
    },

    /// Remove previously generated artifacts
    Clean {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        /// Show what would be removed
        #[arg(long)]
        dry_run: bool,
    },
}

/// Mutually exclusive validate scopes; none means `--complete`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[group(multiple = false)]
pub struct ValidateArgs {
    /// Validate a single target source
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Validate every target source
    #[arg(long)]
    pub all: bool,

    /// Validate the shared configuration module
    #[arg(long)]
    pub shared_config: bool,

    /// Validate every target and the shared module
    #[arg(long)]
    pub complete: bool,

    /// Assemble one target in memory and print it
    #[arg(long, value_name = "NAME")]
    pub preview: Option<String>,
}
