// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example.
//!
//! Loads one or more `key=value` files and prints the merged configuration.
//!
//! ```text
//! cargo run --example basic_usage -- base.cfg local.cfg
//! ```

use kvcfg::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: basic_usage <file>...");
        std::process::exit(2);
    }

    let loader = ConfigLoader::new(FileFetcher::new());
    for path in &paths {
        loader.load(path).await?;
    }

    let config = loader.get_all();
    let mut keys: Vec<&ConfigKey> = config.keys().collect();
    keys.sort();

    println!("Loaded {} entries from {} file(s):", config.len(), paths.len());
    for key in keys {
        let value = &config[key];
        println!("  {:<20} {:<8} {}", key.as_str(), value.type_name(), value);
    }

    Ok(())
}
