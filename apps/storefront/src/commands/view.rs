//! # View Commands
//!
//! Whole-page snapshot and the generic action entry point.

use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreHandle;
use techstore_core::{Action, StorefrontView};

/// Everything the page renders: sections, cart drawer, admin panel.
pub fn get_view(store: &StoreHandle) -> StorefrontView {
    debug!("get_view command");
    store.with_store(StorefrontView::from_state)
}

/// Applies one [`Action`] and returns the new page snapshot.
///
/// For front ends that keep a single message channel instead of calling
/// the typed commands. A rejected action changes nothing.
pub fn dispatch(store: &StoreHandle, action: Action) -> Result<StorefrontView, ApiError> {
    debug!(?action, "dispatch command");

    store.with_store_mut(|s| {
        s.apply(action)?;
        Ok::<_, ApiError>(StorefrontView::from_state(s))
    })
}
