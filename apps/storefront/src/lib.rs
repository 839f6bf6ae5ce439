//! # TechStore Storefront Library
//!
//! Command layer for the TechStore single-page storefront. The front end
//! calls the functions in [`commands`]; all state logic lives in
//! `techstore-core`.
//!
//! ## Module Organization
//! ```text
//! techstore_storefront/
//! ├── lib.rs          ◄─── You are here (bootstrap & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared store handle
//! │   └── config.rs   ◄─── Layered configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Browse & search
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── admin.rs    ◄─── Login, product form, delete
//! │   ├── view.rs     ◄─── Page snapshot & dispatch
//! │   └── config.rs   ◄─── Store name, price formatting
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigError, StoreHandle, StorefrontConfig};

/// A configured storefront: the shared store plus read-only config.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub store: StoreHandle,
    pub config: StorefrontConfig,
}

impl Storefront {
    /// Builds the store described by `config`.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Catalog ── seed_path set? ── yes ──► read JSON, check ids & fields  │
    /// │                               └─ no ───► four built-in products         │
    /// │                                                                         │
    /// │  2. Store ──── empty cart, logged out, configured admin password        │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn from_config(config: StorefrontConfig) -> Result<Self, ConfigError> {
        let catalog = config.load_catalog()?;
        info!(
            store_name = %config.store_name,
            products = catalog.len(),
            seed = ?config.seed_path,
            "Catalog loaded"
        );

        let store = StoreHandle::with_catalog(catalog, config.admin_password.clone());
        Ok(Storefront { store, config })
    }

    /// Loads configuration from the default sources and builds the store.
    pub fn bootstrap() -> Result<Self, ConfigError> {
        Storefront::from_config(StorefrontConfig::load()?)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=techstore=trace` - Show trace for techstore crates only
/// - Default: INFO, DEBUG for techstore crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,techstore=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
