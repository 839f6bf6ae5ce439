//! # Store State
//!
//! Shared handle to the in-memory storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StoreHandle ── Arc<Mutex<StoreState>>                                  │
//! │                                                                         │
//! │     with_store(|s| ...)       read: catalog, cart, view                 │
//! │     with_store_mut(|s| ...)   write: cart ops, admin ops                │
//! │                                                                         │
//! │  Every StoreState method is all-or-nothing, so a closure that returns   │
//! │  Err has left the state exactly as it found it.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use techstore_core::{Catalog, StoreState};

/// Store state wrapper for command access.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    store: Arc<Mutex<StoreState>>,
}

impl StoreHandle {
    pub fn new(state: StoreState) -> Self {
        StoreHandle {
            store: Arc::new(Mutex::new(state)),
        }
    }

    /// Store over `catalog` with the given admin password.
    pub fn with_catalog(catalog: Catalog, admin_password: impl Into<String>) -> Self {
        StoreHandle::new(StoreState::new(catalog, admin_password))
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use techstore_storefront::state::StoreHandle;
    ///
    /// let store = StoreHandle::default();
    /// assert_eq!(store.with_store(|s| s.catalog.len()), 4);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreState) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StoreState) -> R,
    {
        f(&mut self.lock())
    }

    /// A panicking command cannot leave a half-applied action behind, so a
    /// poisoned lock still guards a consistent state.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
