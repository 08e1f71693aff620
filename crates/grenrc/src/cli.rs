//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Manage the release-notes configuration and render changelogs.
#[derive(Debug, Parser)]
#[command(name = "grenrc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init(commands::init::InitArgs),

    /// Load and validate the configuration
    Check(commands::check::CheckArgs),

    /// Render a changelog from a release list
    Render(commands::render::RenderArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => commands::init::run(args),
            Commands::Check(args) => commands::check::run(args),
            Commands::Render(args) => commands::render::run(args),
        }
    }
}
