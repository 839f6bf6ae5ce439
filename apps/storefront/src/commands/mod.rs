//! # Commands Module
//!
//! Functions the front end calls into. Each takes the state it needs plus
//! its arguments and returns a serializable response or [`ApiError`].
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Commands                                  │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐  │
//! │  │  catalog.rs     │  │  cart.rs        │  │  admin.rs               │  │
//! │  │                 │  │                 │  │                         │  │
//! │  │ get_catalog     │  │ get_cart        │  │ admin_login / logout    │  │
//! │  │ get_product     │  │ add_to_cart     │  │ begin_create_product    │  │
//! │  │ search_products │  │ update_cart_item│  │ begin_edit_product      │  │
//! │  │ get_categories  │  │ remove_from_cart│  │ edit_draft / cancel     │  │
//! │  │                 │  │ clear_cart      │  │ save_draft              │  │
//! │  │                 │  │                 │  │ create / update /       │  │
//! │  │                 │  │                 │  │ delete_product          │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                               │
//! │  │  view.rs        │  │  config.rs      │                               │
//! │  │ get_view        │  │ get_config      │                               │
//! │  │ dispatch        │  │ format_price    │                               │
//! │  └─────────────────┘  └─────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`ApiError`]: crate::error::ApiError

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod view;
