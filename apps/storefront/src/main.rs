//! # TechStore Storefront Entry Point
//!
//! Loads configuration, builds the in-memory store, and prints the first
//! page snapshot as JSON for the front end to hydrate from.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults, techstore.toml, TECHSTORE_* env vars)
//! 3. Build the catalog (seed file or built-in products)
//! 4. Print the initial view

use anyhow::Context;
use tracing::info;

use techstore_storefront::commands;
use techstore_storefront::{init_tracing, Storefront};

fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting TechStore storefront");

    let storefront = Storefront::bootstrap().context("failed to start storefront")?;

    for product in commands::catalog::get_catalog(&storefront.store) {
        info!(
            id = %product.id,
            name = %product.name,
            price = %storefront.config.format_price(product.price),
            "Listed"
        );
    }

    let view = commands::view::get_view(&storefront.store);
    let json = serde_json::to_string_pretty(&view).context("failed to serialize view")?;
    println!("{}", json);

    Ok(())
}
