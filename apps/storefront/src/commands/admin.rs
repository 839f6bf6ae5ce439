//! # Admin Commands
//!
//! Commands behind the admin panel: login, the product form, and delete.
//!
//! ## Product Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Product Form                                   │
//! │                                                                         │
//! │  admin_login("admin123")                                                │
//! │       │                                                                 │
//! │       ├──► begin_create_product()        empty draft                    │
//! │       │                                                                 │
//! │       └──► begin_edit_product(3)         draft pre-filled from #3       │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │            edit_draft({price: 139999})   any number of times            │
//! │                  │                                                      │
//! │        ┌─────────┴──────────┐                                           │
//! │        ▼                    ▼                                           │
//! │   save_draft()         cancel_draft()                                   │
//! │   ok  ──► form closes  form closes, catalog untouched                   │
//! │   err ──► form stays open with what was typed                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::StoreHandle;
use techstore_core::{AdminView, CoreError, Product, ProductDraft, ProductId, SaveOutcome};

/// Result of saving the product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub outcome: SaveOutcome,
    pub product: Product,
}

/// Result of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// `None` when the id was already gone
    pub removed: Option<Product>,
    pub remaining: usize,
}

// =============================================================================
// Session
// =============================================================================

/// Enters admin mode.
///
/// ## Returns
/// - Admin view on success
/// - `UNAUTHORIZED` on a wrong password (still logged out)
pub fn admin_login(store: &StoreHandle, password: &str) -> Result<AdminView, ApiError> {
    debug!("admin_login command");

    store.with_store_mut(|s| match s.login(password) {
        Ok(()) => {
            info!("Admin logged in");
            Ok(AdminView::from(&s.admin))
        }
        Err(e) => {
            warn!("Rejected admin login");
            Err(ApiError::from(e))
        }
    })
}

/// Leaves admin mode and drops any open form.
pub fn admin_logout(store: &StoreHandle) -> AdminView {
    debug!("admin_logout command");

    store.with_store_mut(|s| {
        if s.admin.is_authenticated() {
            info!("Admin logged out");
        }
        s.admin.logout();
        AdminView::from(&s.admin)
    })
}

// =============================================================================
// Product Form
// =============================================================================

/// Opens an empty "add product" form.
pub fn begin_create_product(store: &StoreHandle) -> Result<ProductDraft, ApiError> {
    debug!("begin_create_product command");

    store.with_store_mut(|s| {
        s.admin.begin_create()?;
        open_draft(s.admin.draft())
    })
}

/// Opens the form pre-filled from product `id`.
pub fn begin_edit_product(store: &StoreHandle, id: i64) -> Result<ProductDraft, ApiError> {
    debug!(id = %id, "begin_edit_product command");

    store.with_store_mut(|s| {
        s.begin_edit(ProductId::new(id))?;
        open_draft(s.admin.draft())
    })
}

/// Overwrites the form fields present in `patch`.
pub fn edit_draft(store: &StoreHandle, patch: ProductDraft) -> Result<ProductDraft, ApiError> {
    debug!(?patch, "edit_draft command");

    store.with_store_mut(|s| {
        s.admin.edit_draft(patch)?;
        open_draft(s.admin.draft())
    })
}

/// Closes the form without saving.
pub fn cancel_draft(store: &StoreHandle) -> AdminView {
    debug!("cancel_draft command");

    store.with_store_mut(|s| {
        s.admin.cancel_draft();
        AdminView::from(&s.admin)
    })
}

/// Saves the form: updates the edited product, or appends a new one.
pub fn save_draft(store: &StoreHandle) -> Result<SaveResponse, ApiError> {
    debug!("save_draft command");

    store.with_store_mut(|s| {
        let outcome = s.save_draft()?;
        let id = match outcome {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        };
        let product = s
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::internal(format!("Saved product {} is missing", id)))?;

        info!(?outcome, name = %product.name, "Product saved");
        Ok::<_, ApiError>(SaveResponse { outcome, product })
    })
}

// =============================================================================
// Direct Catalog Edits
// =============================================================================

/// Appends a product built from `draft`, bypassing the form.
pub fn create_product(store: &StoreHandle, draft: ProductDraft) -> Result<Product, ApiError> {
    debug!(?draft, "create_product command");

    store.with_store_mut(|s| {
        let id = s.create_product(draft)?;
        let product = s
            .catalog
            .get(id)
            .cloned()
            .ok_or(CoreError::ProductNotFound(id))?;

        info!(%id, name = %product.name, "Product created");
        Ok::<_, ApiError>(product)
    })
}

/// Merges `draft` onto product `id`, bypassing the form.
pub fn update_product(
    store: &StoreHandle,
    id: i64,
    draft: ProductDraft,
) -> Result<Product, ApiError> {
    debug!(id = %id, ?draft, "update_product command");

    store.with_store_mut(|s| {
        let product = s.update_product(ProductId::new(id), &draft)?.clone();
        info!(%id, name = %product.name, "Product updated");
        Ok::<_, ApiError>(product)
    })
}

/// Removes product `id` from the catalog.
///
/// Cart items for the product stay in the cart at their frozen price.
pub fn delete_product(store: &StoreHandle, id: i64) -> Result<DeleteResponse, ApiError> {
    debug!(id = %id, "delete_product command");

    store.with_store_mut(|s| {
        let removed = s.delete_product(ProductId::new(id))?;
        if let Some(product) = &removed {
            info!(%id, name = %product.name, "Product deleted");
        }

        Ok::<_, ApiError>(DeleteResponse {
            removed,
            remaining: s.catalog.len(),
        })
    })
}

fn open_draft(draft: Option<&ProductDraft>) -> Result<ProductDraft, ApiError> {
    draft.cloned().ok_or_else(|| CoreError::NoDraft.into())
}
