//! # techstore-core: Pure Storefront Logic for TechStore
//!
//! This crate holds the state logic behind the TechStore single-page
//! storefront: the product catalog, the shopping cart, and the admin panel
//! that edits the catalog. Everything is in memory and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TechStore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (web page)                         │   │
//! │  │    Hero ─ New arrivals ─ Sale ─ Catalog ─ Cart drawer ─ Admin   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    add_to_cart, update_cart_item, save_draft, etc.              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ techstore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │  admin  │ │  store  │ │  view   │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and its identifier
//! - [`money`] - Integer money in whole roubles
//! - [`catalog`] - The authoritative product list and its seed
//! - [`cart`] - Cart items, quantities and totals
//! - [`admin`] - Admin login state machine and the product draft buffer
//! - [`store`] - The owned state container and its pure reducer
//! - [`view`] - Serializable snapshot of what the page renders
//! - [`validation`] - Field rules shared by drafts and the cart
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use techstore_core::store::{reduce, Action, StoreState};
//! use techstore_core::{Money, ProductId};
//!
//! let state = StoreState::seeded();
//! let state = reduce(state, Action::AddToCart(ProductId::new(2)));
//! let state = reduce(state, Action::AddToCart(ProductId::new(2)));
//!
//! assert_eq!(state.cart.total(), Money::new(49_998));
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use admin::{AdminMode, AdminState, ProductDraft};
pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{reduce, Action, SaveOutcome, StoreState};
pub use types::{Product, ProductId};
pub use view::{AdminView, CartView, StorefrontView};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Admin password used when configuration does not supply one.
///
/// Compared in memory as a plain literal. There is no hashing or lockout.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Image shown for products created without an image URI.
pub const DEFAULT_PRODUCT_IMAGE: &str = "/placeholder.svg";

/// Longest accepted catalog search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum quantity of a single product in the cart.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest accepted product price, in roubles.
///
/// With [`MAX_ITEM_QUANTITY`] this keeps every line total far inside `i64`.
pub const MAX_PRODUCT_PRICE: i64 = 100_000_000;
