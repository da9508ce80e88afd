//! Lists the example catalog.

use anyhow::Result;
use aspen_play_core::config::Config;
use aspen_play_core::examples::catalog_with_extras;

/// Prints one example name per line, built-ins first.
pub fn list(config: &Config) -> Result<()> {
    for example in catalog_with_extras(&config.examples) {
        println!("{}", example.name);
    }
    Ok(())
}
