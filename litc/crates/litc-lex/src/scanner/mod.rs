//! Scanner module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Scanner struct, dispatch and the tokenize loop
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Digit-run scanning
//! - `string` - String literal scanning
//! - `symbol` - Single-character punctuation
//! - `comment` - Whitespace and `$` comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod string;
mod symbol;

pub use core::Scanner;
