//! # Cart
//!
//! The shopping cart shown in the cart drawer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Front End Action         Cart Method             State Change          │
//! │  ────────────────         ───────────             ────────────          │
//! │                                                                         │
//! │  "В корзину" ────────────► add() ───────────────► push or qty + 1       │
//! │                                                                         │
//! │  "+" / "-" stepper ──────► update_quantity() ───► qty = n (0 removes)   │
//! │                                                                         │
//! │  Trash icon ─────────────► remove() ────────────► item dropped          │
//! │                                                                         │
//! │  Drawer footer ──────────► total() ─────────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one item per product id
//! - Every stored quantity is in `1..=MAX_ITEM_QUANTITY`
//! - Totals are recomputed on every read, never cached

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

/// An item in the shopping cart.
///
/// ## Price Freezing
/// `product` is a copy taken when the item was first added. Later admin
/// edits or deletes of the catalog entry do not touch it, so the drawer
/// keeps showing what the shopper picked.
///
/// Serializes flat, the product fields side by side with `quantity`:
/// `{"id": 1, "name": "...", "price": 89999, ..., "quantity": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product snapshot at time of adding.
    #[serde(flatten)]
    #[ts(flatten)]
    pub product: Product,

    /// Quantity in cart, 1 to [`MAX_ITEM_QUANTITY`].
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Already in cart: quantity + 1
    /// - Not in cart: new item with quantity 1
    /// - Already at [`MAX_ITEM_QUANTITY`]: rejected, cart unchanged
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        match self.items.iter_mut().find(|i| i.product_id() == product.id) {
            Some(item) if item.quantity >= MAX_ITEM_QUANTITY => {
                return Err(
                    ValidationError::out_of_range("quantity", 0, MAX_ITEM_QUANTITY).into(),
                );
            }
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::from_product(product)),
        }
        Ok(())
    }

    /// Removes the item for `product_id`.
    ///
    /// Returns `false` when nothing was removed; that is not an error.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of the item for `product_id`.
    ///
    /// ## Behavior
    /// - `0`: same as [`Cart::remove`]
    /// - `1..=MAX_ITEM_QUANTITY`: sets the quantity exactly
    /// - `< 0` or above the maximum: rejected, cart unchanged
    /// - product not in cart: no-op
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if quantity == 0 {
            self.remove(product_id);
            return Ok(());
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id() == product_id) {
            item.quantity = quantity;
        }
        Ok(())
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Quantity of `product_id` in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items (the header badge).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price × quantity over all items.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}
