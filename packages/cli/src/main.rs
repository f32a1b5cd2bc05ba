mod commands;
mod config;
mod description;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compact, script, CompactArgs, ScriptArgs};
use tracing_subscriber::EnvFilter;

/// RNArtist CLI - drawing scripts for RNA secondary structures
#[derive(Parser, Debug)]
#[command(name = "rnartist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the drawing script for a JSON document description
    Script(ScriptArgs),

    /// Compact a selection of drawn elements into category selectors
    Compact(CompactArgs),
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Script(args) => script(args, &cwd),
                Command::Compact(args) => compact(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
