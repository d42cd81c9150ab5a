//! Command modules for the litt CLI.
//!
//! Each subcommand is implemented in its own file; `common` holds the
//! shared file loading and parallel scanning.

pub mod common;

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
