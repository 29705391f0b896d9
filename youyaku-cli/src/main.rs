//! youyaku command-line entry point

use clap::Parser;
use youyaku_cli::commands::Commands;

/// Extractive preview summaries from text documents
#[derive(Debug, Parser)]
#[command(name = "youyaku", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
