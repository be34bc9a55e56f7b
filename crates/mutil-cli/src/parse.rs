//! # Parse Subcommand
//!
//! Parses text into a `Maybe` of the requested numeric kind. Exits with 1
//! when the text does not parse.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use mutil_core::{parse, Maybe};

/// Numeric target of the parse.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

/// Arguments for the parse subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Numeric kind to parse as.
    #[arg(value_enum)]
    pub kind: NumberKind,

    /// Text to parse.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

/// Execute the parse subcommand.
pub fn run_parse(args: &ParseArgs, out: &mut dyn Write) -> Result<u8> {
    let text = Some(args.text.as_str());
    let (rendered, present) = match args.kind {
        NumberKind::I16 => render(parse::parse_i16(text)),
        NumberKind::I32 => render(parse::parse_i32(text)),
        NumberKind::I64 => render(parse::parse_i64(text)),
        NumberKind::F32 => render(parse::parse_f32(text)),
        NumberKind::F64 => render(parse::parse_f64(text)),
    };

    tracing::info!(kind = ?args.kind, present, "parsed input");
    writeln!(out, "{rendered}").context("failed to write parse result")?;
    Ok(if present { 0 } else { 1 })
}

fn render<T: Display>(maybe: Maybe<T>) -> (String, bool) {
    (maybe.to_string(), maybe.is_present())
}
