//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod summarize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize text documents into short previews
    Summarize(summarize::SummarizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Summarize(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> CliResult<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      One summary per document");
                println!("  json      JSON array of document summaries");
                println!("  markdown  Markdown section per document");
                Ok(())
            }
        }
    }
}
