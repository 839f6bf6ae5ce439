//! # View Model
//!
//! A serializable snapshot of everything the page renders, built from a
//! [`StoreState`].
//!
//! ```text
//! ┌────────────────────────────── StorefrontView ───────────────────────────┐
//! │  newArrivals   products with isNew                                      │
//! │  onSale        products with isSale                                     │
//! │  catalog       every product, catalog order                             │
//! │  categories    distinct category labels                                 │
//! │  cart          items, badge count, total                                │
//! │  admin         logged in?, open form, product being edited              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::admin::{AdminState, ProductDraft};
use crate::cart::{Cart, CartItem};
use crate::money::Money;
use crate::store::StoreState;
use crate::types::{Product, ProductId};

/// Cart drawer contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub items: Vec<CartItem>,
    /// Header badge: sum of quantities.
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items().to_vec(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

/// Admin panel state as the page needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminView {
    pub authenticated: bool,
    pub draft: Option<ProductDraft>,
    pub editing: Option<ProductId>,
}

impl From<&AdminState> for AdminView {
    fn from(admin: &AdminState) -> Self {
        AdminView {
            authenticated: admin.is_authenticated(),
            draft: admin.draft().cloned(),
            editing: admin.editing(),
        }
    }
}

/// Full page snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StorefrontView {
    pub new_arrivals: Vec<Product>,
    pub on_sale: Vec<Product>,
    pub catalog: Vec<Product>,
    pub categories: Vec<String>,
    pub cart: CartView,
    pub admin: AdminView,
}

impl StorefrontView {
    pub fn from_state(state: &StoreState) -> Self {
        let catalog = &state.catalog;

        StorefrontView {
            new_arrivals: catalog.new_arrivals().cloned().collect(),
            on_sale: catalog.on_sale().cloned().collect(),
            catalog: catalog.products().to_vec(),
            categories: catalog.categories().into_iter().map(String::from).collect(),
            cart: CartView::from(&state.cart),
            admin: AdminView::from(&state.admin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{reduce, Action};

    #[test]
    fn test_seeded_view_sections() {
        let view = StorefrontView::from_state(&StoreState::seeded());

        assert_eq!(view.new_arrivals.len(), 2);
        assert_eq!(view.on_sale.len(), 2);
        assert_eq!(view.catalog.len(), 4);
        assert_eq!(view.categories.len(), 4);
        assert!(view.cart.items.is_empty());
        assert!(!view.admin.authenticated);
    }

    #[test]
    fn test_cart_badge_counts_quantities() {
        let state = reduce(StoreState::seeded(), Action::AddToCart(ProductId::new(1)));
        let state = reduce(state, Action::AddToCart(ProductId::new(1)));
        let state = reduce(state, Action::AddToCart(ProductId::new(4)));

        let view = StorefrontView::from_state(&state);
        assert_eq!(view.cart.items.len(), 2);
        assert_eq!(view.cart.total_quantity, 3);
        assert_eq!(view.cart.total, Money::new(89_999 * 2 + 32_999));
    }

    #[test]
    fn test_view_json_keys() {
        let json = serde_json::to_value(StorefrontView::from_state(&StoreState::seeded())).unwrap();
        assert!(json.get("newArrivals").is_some());
        assert!(json.get("onSale").is_some());
        assert_eq!(json["cart"]["totalQuantity"], 0);
        assert_eq!(json["admin"]["authenticated"], false);
    }
}
