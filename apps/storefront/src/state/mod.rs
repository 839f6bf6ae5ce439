//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐    │
//! │  │   StoreHandle                │   │   StorefrontConfig           │    │
//! │  │                              │   │                              │    │
//! │  │   Arc<Mutex<StoreState>>     │   │   store name, currency,      │    │
//! │  │   catalog, cart, admin       │   │   admin password, seed path  │    │
//! │  │   (mutable)                  │   │   (read-only)                │    │
//! │  └──────────────────────────────┘   └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take only the state they need.

mod config;
mod store;

pub use self::config::{ConfigError, StorefrontConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use store::StoreHandle;
