//! # Store
//!
//! Owns the catalog, the cart and the admin state, and applies actions to
//! them.
//!
//! ## Two Ways In
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  state.apply(action)  ──► Result<(), CoreError>                         │
//! │                           mutates in place, all-or-nothing              │
//! │                                                                         │
//! │  reduce(state, action) ──► StoreState                                   │
//! │                           pure; a failing action returns the input      │
//! │                           state unchanged (silent no-op)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method here checks its preconditions before touching any field,
//! so an `Err` always means nothing changed.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::admin::{AdminState, ProductDraft};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId};
use crate::DEFAULT_ADMIN_PASSWORD;

// =============================================================================
// Actions
// =============================================================================

/// Everything the front end can ask the store to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum Action {
    // Cart
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    #[serde(rename_all = "camelCase")]
    UpdateQuantity {
        product_id: ProductId,
        quantity: i64,
    },
    ClearCart,

    // Admin session
    Login {
        password: String,
    },
    Logout,

    // Admin form
    BeginCreate,
    BeginEdit(ProductId),
    EditDraft(ProductDraft),
    CancelDraft,
    SaveDraft,

    // Admin catalog edits without the form
    CreateProduct(ProductDraft),
    UpdateProduct {
        id: ProductId,
        draft: ProductDraft,
    },
    DeleteProduct(ProductId),
}

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
#[ts(export)]
pub enum SaveOutcome {
    Created(ProductId),
    Updated(ProductId),
}

// =============================================================================
// Store State
// =============================================================================

/// The whole storefront state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub admin: AdminState,
    admin_password: String,
}

impl StoreState {
    /// Creates a store over `catalog` with an empty cart, logged out.
    pub fn new(catalog: Catalog, admin_password: impl Into<String>) -> Self {
        StoreState {
            catalog,
            cart: Cart::new(),
            admin: AdminState::new(),
            admin_password: admin_password.into(),
        }
    }

    /// The launch catalog with the default admin password.
    pub fn seeded() -> Self {
        StoreState::new(Catalog::seeded(), DEFAULT_ADMIN_PASSWORD)
    }

    /// Applies one action.
    pub fn apply(&mut self, action: Action) -> CoreResult<()> {
        match action {
            Action::AddToCart(id) => self.add_to_cart(id),
            Action::RemoveFromCart(id) => {
                self.cart.remove(id);
                Ok(())
            }
            Action::UpdateQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(product_id, quantity),
            Action::ClearCart => {
                self.cart.clear();
                Ok(())
            }
            Action::Login { password } => self.login(&password),
            Action::Logout => {
                self.admin.logout();
                Ok(())
            }
            Action::BeginCreate => self.admin.begin_create(),
            Action::BeginEdit(id) => self.begin_edit(id),
            Action::EditDraft(patch) => self.admin.edit_draft(patch),
            Action::CancelDraft => {
                self.admin.cancel_draft();
                Ok(())
            }
            Action::SaveDraft => self.save_draft().map(|_| ()),
            Action::CreateProduct(draft) => self.create_product(draft).map(|_| ()),
            Action::UpdateProduct { id, draft } => self.update_product(id, &draft).map(|_| ()),
            Action::DeleteProduct(id) => self.delete_product(id).map(|_| ()),
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of the catalog product `id` to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) -> CoreResult<()> {
        let product = self.catalog.get(id).ok_or(CoreError::ProductNotFound(id))?;
        self.cart.add(product)
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub fn login(&mut self, password: &str) -> CoreResult<()> {
        self.admin.login(password, &self.admin_password, Utc::now())
    }

    pub fn begin_edit(&mut self, id: ProductId) -> CoreResult<()> {
        self.admin.require_login()?;
        let product = self.catalog.get(id).ok_or(CoreError::ProductNotFound(id))?;
        self.admin.begin_edit(product)
    }

    /// Saves the open form: update when editing, create otherwise.
    ///
    /// On success the form closes. On failure it stays open as it was.
    pub fn save_draft(&mut self) -> CoreResult<SaveOutcome> {
        self.admin.require_login()?;
        let draft = self.admin.draft().cloned().ok_or(CoreError::NoDraft)?;

        let outcome = match self.admin.editing() {
            Some(id) => {
                self.catalog.update(id, &draft)?;
                SaveOutcome::Updated(id)
            }
            None => SaveOutcome::Created(self.catalog.insert(draft)?),
        };

        self.admin.close_draft();
        Ok(outcome)
    }

    /// Appends a product built from `draft`.
    pub fn create_product(&mut self, draft: ProductDraft) -> CoreResult<ProductId> {
        self.admin.require_login()?;
        self.catalog.insert(draft)
    }

    /// Merges `draft` onto product `id`.
    pub fn update_product(&mut self, id: ProductId, draft: &ProductDraft) -> CoreResult<&Product> {
        self.admin.require_login()?;
        self.catalog.update(id, draft)
    }

    /// Removes product `id` from the catalog.
    ///
    /// Cart items for the product stay in the cart with their frozen price.
    /// A form open on the deleted product is closed.
    pub fn delete_product(&mut self, id: ProductId) -> CoreResult<Option<Product>> {
        self.admin.require_login()?;

        let removed = self.catalog.delete(id);
        if removed.is_some() && self.admin.editing() == Some(id) {
            self.admin.close_draft();
        }
        Ok(removed)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        StoreState::seeded()
    }
}

/// Applies `action` to `state` and returns the next state.
///
/// Failing actions are silent no-ops: the input state comes back as is.
///
/// ## Example
/// ```rust
/// use techstore_core::store::{reduce, Action, StoreState};
///
/// let state = StoreState::seeded();
/// let next = reduce(state.clone(), Action::Login { password: "wrong".into() });
/// assert_eq!(next, state);
/// ```
pub fn reduce(state: StoreState, action: Action) -> StoreState {
    let mut next = state.clone();
    match next.apply(action) {
        Ok(()) => next,
        Err(_) => state,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn admin_store() -> StoreState {
        reduce(
            StoreState::seeded(),
            Action::Login {
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            },
        )
    }

    fn x_draft() -> ProductDraft {
        ProductDraft::new().name("X").price(100).category("Аудио")
    }

    #[test]
    fn test_add_to_cart_via_reduce() {
        let state = reduce(StoreState::seeded(), Action::AddToCart(ProductId::new(2)));
        let state = reduce(state, Action::AddToCart(ProductId::new(2)));

        assert_eq!(state.cart.item_count(), 1);
        assert_eq!(state.cart.quantity_of(ProductId::new(2)), 2);
        assert_eq!(state.cart.total(), Money::new(49_998));
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let state = StoreState::seeded();
        let next = reduce(state.clone(), Action::AddToCart(ProductId::new(99)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_quantity_actions() {
        let mut state = StoreState::seeded();
        state.apply(Action::AddToCart(ProductId::new(1))).unwrap();

        let state = reduce(
            state,
            Action::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: 3,
            },
        );
        assert_eq!(state.cart.quantity_of(ProductId::new(1)), 3);

        let state = reduce(
            state,
            Action::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: -2,
            },
        );
        assert_eq!(state.cart.quantity_of(ProductId::new(1)), 3);

        let state = reduce(
            state,
            Action::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: 200_000_000_000_000,
            },
        );
        assert_eq!(state.cart.quantity_of(ProductId::new(1)), 3);
        assert_eq!(state.cart.total(), Money::new(3 * 89_999));

        let state = reduce(
            state,
            Action::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: 0,
            },
        );
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_login_state_machine() {
        let state = StoreState::seeded();

        let wrong = reduce(
            state.clone(),
            Action::Login {
                password: "nope".to_string(),
            },
        );
        assert!(!wrong.admin.is_authenticated());

        let state = admin_store();
        assert!(state.admin.is_authenticated());

        let state = reduce(state, Action::Logout);
        assert!(!state.admin.is_authenticated());
    }

    #[test]
    fn test_custom_password() {
        let mut state = StoreState::new(Catalog::seeded(), "s3cret");
        assert_eq!(
            state.login(DEFAULT_ADMIN_PASSWORD),
            Err(CoreError::InvalidPassword)
        );
        state.login("s3cret").unwrap();
        assert!(state.admin.is_authenticated());
    }

    #[test]
    fn test_crud_requires_login() {
        let mut state = StoreState::seeded();

        assert_eq!(
            state.create_product(x_draft()),
            Err(CoreError::NotAuthenticated)
        );
        assert_eq!(
            state.delete_product(ProductId::new(1)),
            Err(CoreError::NotAuthenticated)
        );
        assert_eq!(state.catalog.len(), 4);
    }

    #[test]
    fn test_create_product_appends_one() {
        let state = admin_store();
        let existing: Vec<ProductId> = state.catalog.products().iter().map(|p| p.id).collect();

        let state = reduce(state, Action::CreateProduct(x_draft()));

        assert_eq!(state.catalog.len(), 5);
        let created = state.catalog.products().last().cloned().unwrap();
        assert!(!existing.contains(&created.id));
        assert_eq!(created.name, "X");
        assert_eq!(created.price, Money::new(100));
        assert_eq!(created.category, "Аудио");
    }

    #[test]
    fn test_create_missing_price_is_noop() {
        let state = admin_store();
        let draft = ProductDraft::new().name("X").category("Аудио");

        let next = reduce(state.clone(), Action::CreateProduct(draft));

        assert_eq!(next.catalog.len(), state.catalog.len());
        assert_eq!(next, state);
    }

    #[test]
    fn test_form_create_flow() {
        let mut state = admin_store();

        state.apply(Action::BeginCreate).unwrap();
        state.apply(Action::EditDraft(ProductDraft::new().name("X"))).unwrap();

        // Incomplete: save fails, form stays open with what was typed
        assert!(state.save_draft().is_err());
        assert_eq!(
            state.admin.draft().and_then(|d| d.name.clone()),
            Some("X".to_string())
        );

        state
            .apply(Action::EditDraft(ProductDraft::new().price(100).category("Аудио")))
            .unwrap();
        let outcome = state.save_draft().unwrap();

        assert_eq!(outcome, SaveOutcome::Created(ProductId::new(5)));
        assert!(state.admin.draft().is_none());
        assert_eq!(state.catalog.len(), 5);
    }

    #[test]
    fn test_form_edit_flow_changes_only_target() {
        let mut state = admin_store();
        let before = state.catalog.clone();

        state.apply(Action::BeginEdit(ProductId::new(3))).unwrap();
        state
            .apply(Action::EditDraft(ProductDraft::new().is_sale(true)))
            .unwrap();
        let outcome = state.save_draft().unwrap();

        assert_eq!(outcome, SaveOutcome::Updated(ProductId::new(3)));
        for (old, new) in before.products().iter().zip(state.catalog.products()) {
            if old.id == ProductId::new(3) {
                assert!(new.is_sale);
                assert_eq!(new.name, old.name);
                assert_eq!(new.price, old.price);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_begin_edit_unknown_product() {
        let mut state = admin_store();
        assert_eq!(
            state.apply(Action::BeginEdit(ProductId::new(77))),
            Err(CoreError::ProductNotFound(ProductId::new(77)))
        );
        assert!(state.admin.draft().is_none());
    }

    #[test]
    fn test_save_without_draft() {
        let mut state = admin_store();
        assert_eq!(state.save_draft(), Err(CoreError::NoDraft));
    }

    #[test]
    fn test_delete_product() {
        let state = admin_store();

        let state = reduce(state, Action::DeleteProduct(ProductId::new(2)));
        assert_eq!(state.catalog.len(), 3);
        assert!(!state.catalog.contains(ProductId::new(2)));

        let again = reduce(state.clone(), Action::DeleteProduct(ProductId::new(2)));
        assert_eq!(again, state);
    }

    #[test]
    fn test_delete_keeps_cart_items() {
        let mut state = admin_store();
        state.add_to_cart(ProductId::new(2)).unwrap();

        state.delete_product(ProductId::new(2)).unwrap();

        assert_eq!(state.cart.quantity_of(ProductId::new(2)), 1);
        assert_eq!(state.cart.total(), Money::new(24_999));
    }

    #[test]
    fn test_delete_closes_form_on_deleted_product() {
        let mut state = admin_store();
        state.begin_edit(ProductId::new(4)).unwrap();

        state.delete_product(ProductId::new(4)).unwrap();

        assert!(state.admin.draft().is_none());
        assert!(state.admin.editing().is_none());
    }

    #[test]
    fn test_action_json_shape() {
        let action: Action = serde_json::from_str(
            r#"{"type":"updateQuantity","payload":{"productId":2,"quantity":5}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::UpdateQuantity {
                product_id: ProductId::new(2),
                quantity: 5
            }
        );

        let json = serde_json::to_string(&Action::AddToCart(ProductId::new(1))).unwrap();
        assert_eq!(json, r#"{"type":"addToCart","payload":1}"#);
    }
}
