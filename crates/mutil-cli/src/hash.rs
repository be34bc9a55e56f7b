//! # Hash Subcommand
//!
//! Folds the given values through `HashCombiner` in argument order. The
//! printed code is only meaningful within this process run.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use mutil_core::HashCombiner;

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Values to combine, in order.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Seed the accumulator, e.g. with the output of an earlier run.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seed: i32,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs, out: &mut dyn Write) -> Result<u8> {
    let code = args
        .values
        .iter()
        .fold(HashCombiner::with_seed(args.seed), |acc, value| acc.add(value.as_str()))
        .finish();

    tracing::info!(values = args.values.len(), seed = args.seed, code, "combined hash");
    writeln!(out, "{code}").context("failed to write hash code")?;
    Ok(0)
}
