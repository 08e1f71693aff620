//! Check command.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use grenrc_config::GroupBy;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Configuration file (default: search upwards from the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail when the configuration has warnings
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Runs the check command.
pub fn run(args: CheckArgs) -> Result<()> {
    let loaded = super::load(args.config.as_deref())?;
    let config = &loaded.config;

    println!("Configuration: {}", loaded.path.display());
    println!("  Repository:  {}", config.slug());
    println!("  Data source: {}", config.data_source);
    println!("  Changelog:   {}", config.changelog_filename);

    match &config.group_by {
        GroupBy::Disabled => println!("  Grouping:    disabled"),
        GroupBy::Label => println!("  Grouping:    by label"),
        GroupBy::Sections(sections) => {
            println!("  Grouping:    {} sections", sections.len());
            for section in sections {
                let labels: Vec<&str> = section.labels.iter().map(String::as_str).collect();
                println!("    {}: {}", section.heading, labels.join(", "));
            }
        }
    }

    if !config.ignore_labels.is_empty() {
        let ignored: Vec<&str> = config.ignore_labels.iter().map(String::as_str).collect();
        println!("  Ignored:     {}", ignored.join(", "));
    }

    let warnings = config.lint();
    for warning in &warnings {
        println!("  warning: {warning}");
    }

    if args.deny_warnings && !warnings.is_empty() {
        bail!("configuration has {} warning(s)", warnings.len());
    }

    println!("Configuration is valid");
    Ok(())
}
