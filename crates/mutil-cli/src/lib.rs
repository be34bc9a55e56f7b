#![deny(missing_docs)]

//! # mutil-cli — Command-Line Front End
//!
//! A thin consumer of `mutil-core`. Each subcommand builds toolkit values
//! from its arguments and prints the outcome.
//!
//! ## Subcommands
//!
//! - `hash`: order-sensitive hash combination of the given values
//! - `parse`: numeric parsing into `Maybe`
//! - `classify`: number-or-text classification into `Either`
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handler logic.
//! - Handlers write to a caller-supplied writer and return the exit code.
//! - No toolkit logic lives here.

pub mod classify;
pub mod hash;
pub mod parse;
