//! # Classify Subcommand
//!
//! Sorts input into `Either<i64, String>`: left when the text parses as an
//! integer, right otherwise. The right side is reported with its length.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use mutil_core::{parse, Either};

/// Arguments for the classify subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Text to classify.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

/// Number-or-text view of `text`.
pub fn classify(text: &str) -> Either<i64, String> {
    match parse::parse_i64(Some(text)).into_option() {
        Some(number) => Either::Left(number),
        None => Either::Right(text.to_string()),
    }
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, out: &mut dyn Write) -> Result<u8> {
    let either = classify(&args.text);
    tracing::info!(left = either.is_left(), "classified input");

    let line = either
        .select(|text| (text.chars().count(), text))
        .map(
            |number| format!("left: {number}"),
            |(length, text)| format!("right: {text} (length {length})"),
        );
    writeln!(out, "{line}").context("failed to write classification")?;
    Ok(0)
}
