//! CLI subcommands.

pub mod list;
pub mod parse;
pub mod process;
