//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  update_cart_item(0)          │
//! │  │  Empty   │ ─────────────► │  Active  │ ─────────────────────┐        │
//! │  │  Cart    │                │  Cart    │  remove_from_cart    │        │
//! │  └──────────┘ ◄───────────── └──────────┘ ◄────────────────────┘        │
//! │       ▲          clear_cart       │                                     │
//! │       └───────────────────────────┘ (last item removed)                 │
//! │                                                                         │
//! │  There is no checkout. The cart lives until the page is closed.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreHandle;
use techstore_core::{Cart, CartItem, CartTotals, CoreError, ProductId};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreHandle) -> CartResponse {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(&s.cart))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity + 1
/// - If product not in cart: added with quantity 1
/// - Price is frozen at time of adding
/// - Already at the maximum quantity: `CART_ERROR`, cart unchanged
pub fn add_to_cart(store: &StoreHandle, product_id: i64) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    store.with_store_mut(|s| {
        s.add_to_cart(ProductId::new(product_id))
            .map_err(|e| match e {
                CoreError::Validation(v) => ApiError::cart(v.to_string()),
                other => ApiError::from(other),
            })?;
        Ok::<_, ApiError>(CartResponse::from(&s.cart))
    })
}

/// Sets the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0: removes the item
/// - Negative quantity or above 999: `CART_ERROR`, cart unchanged
/// - Product not in cart: nothing happens
pub fn update_cart_item(
    store: &StoreHandle,
    product_id: i64,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    store.with_store_mut(|s| {
        s.cart
            .update_quantity(ProductId::new(product_id), quantity)
            .map_err(|e| ApiError::cart(e.to_string()))?;
        Ok::<_, ApiError>(CartResponse::from(&s.cart))
    })
}

/// Removes an item from the cart. Unknown ids are ignored.
pub fn remove_from_cart(store: &StoreHandle, product_id: i64) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    store.with_store_mut(|s| {
        s.cart.remove(ProductId::new(product_id));
        CartResponse::from(&s.cart)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(store: &StoreHandle) -> CartResponse {
    debug!("clear_cart command");

    store.with_store_mut(|s| {
        s.cart.clear();
        CartResponse::from(&s.cart)
    })
}
