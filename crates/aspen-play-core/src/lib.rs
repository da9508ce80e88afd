//! Headless core for the Aspen playground: configuration, the example
//! catalog, and the remote execution client.

pub mod config;
pub mod examples;
pub mod runner;
