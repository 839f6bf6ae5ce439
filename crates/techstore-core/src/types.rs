//! # Domain Types
//!
//! The product record shared by the catalog, the cart and the admin panel.
//!
//! ## Product Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product                                                                │
//! │  ─────────────────────────────────────────────                          │
//! │  id             ProductId   unique within the catalog                   │
//! │  name           String      "Quantum Smartphone X1"                     │
//! │  price          Money       89 999 ₽                                    │
//! │  originalPrice  Money?      99 999 ₽ (struck through, informational)    │
//! │  image          String      opaque URI, never validated                 │
//! │  category       String      "Смартфоны"                                 │
//! │  isNew          bool        shown in "Новинки"                          │
//! │  isSale         bool        shown in "Акции"                            │
//! │  description    String                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase, which is what the front end reads.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Integer identifier of a product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(i64);

impl ProductId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name on cards and in the cart drawer.
    pub name: String,

    /// Current selling price.
    pub price: Money,

    /// Pre-sale price, struck through next to `price`.
    ///
    /// Informational only. It may even be lower than `price`.
    #[serde(default)]
    pub original_price: Option<Money>,

    /// Image URI.
    pub image: String,

    /// Category label.
    pub category: String,

    /// Listed under new arrivals.
    #[serde(default)]
    pub is_new: bool,

    /// Listed under the sale section.
    #[serde(default)]
    pub is_sale: bool,

    /// One-line description under the name.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Returns how much cheaper the product is than its original price.
    ///
    /// `None` when there is no original price or it is not above the
    /// current price.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Case-insensitive match against name, description and category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
