//! Subcommand implementations.

pub mod examples;
pub mod run;
