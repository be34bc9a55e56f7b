//! # mutil CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mutil_cli::classify::{run_classify, ClassifyArgs};
use mutil_cli::hash::{run_hash, HashArgs};
use mutil_cli::parse::{run_parse, ParseArgs};

/// Small front end over the mutil-core value types.
#[derive(Parser, Debug)]
#[command(name = "mutil", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine the hashes of the given values, in order.
    Hash(HashArgs),

    /// Parse text as a number; prints "no value" when it does not parse.
    Parse(ParseArgs),

    /// Classify text as a number (left) or free text (right).
    Classify(ClassifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("mutil CLI starting");

    let mut out = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args, &mut out),
        Commands::Parse(args) => run_parse(&args, &mut out),
        Commands::Classify(args) => run_classify(&args, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
