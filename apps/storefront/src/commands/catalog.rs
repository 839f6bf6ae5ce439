//! # Catalog Commands
//!
//! Commands for browsing and searching the catalog.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  Shopper types "наушники"                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products(store, "наушники")                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                          │
//! │  │  > 100 chars?  ──► VALIDATION_ERROR       │                          │
//! │  │  blank?        ──► whole catalog          │                          │
//! │  │  otherwise     ──► name/description/      │                          │
//! │  │                    category substring     │                          │
//! │  └───────────────────────────────────────────┘                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> in catalog order                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreHandle;
use techstore_core::{Product, ProductId};

/// Every product, in catalog order.
pub fn get_catalog(store: &StoreHandle) -> Vec<Product> {
    debug!("get_catalog command");
    store.with_store(|s| s.catalog.products().to_vec())
}

/// Gets one product by id.
pub fn get_product(store: &StoreHandle, id: i64) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");

    let id = ProductId::new(id);
    store
        .with_store(|s| s.catalog.get(id).cloned())
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Searches the catalog.
///
/// ## Arguments
/// * `query` - Free text, case-insensitive. Blank returns everything.
pub fn search_products(store: &StoreHandle, query: &str) -> Result<Vec<Product>, ApiError> {
    let start = Instant::now();
    debug!(query = %query, "search_products command");

    let results = store.with_store(|s| {
        s.catalog
            .search(query)
            .map(|hits| hits.into_iter().cloned().collect::<Vec<_>>())
    })?;

    info!(
        query = %query,
        results = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Product search completed"
    );

    Ok(results)
}

/// Distinct categories in first-seen order.
pub fn get_categories(store: &StoreHandle) -> Vec<String> {
    debug!("get_categories command");
    store.with_store(|s| s.catalog.categories().into_iter().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_get_catalog_and_product() {
        let store = StoreHandle::default();

        assert_eq!(get_catalog(&store).len(), 4);
        assert_eq!(get_product(&store, 3).unwrap().name, "NeoBook Ultra");
        assert_eq!(get_product(&store, 99).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_search_products() {
        let store = StoreHandle::default();

        let hits = search_products(&store, "watch").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::new(4));

        let err = search_products(&store, &"a".repeat(101)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_get_categories() {
        let store = StoreHandle::default();
        assert_eq!(
            get_categories(&store),
            vec!["Смартфоны", "Аудио", "Ноутбуки", "Носимые"]
        );
    }
}
