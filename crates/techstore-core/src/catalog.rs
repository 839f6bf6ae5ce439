//! # Catalog
//!
//! The authoritative product list, seeded at startup and edited from the
//! admin panel.
//!
//! ## Id Allocation
//! ```text
//! seed ids: 1 2 3 4          next_id = 5
//! insert "X"        ──► 5    next_id = 6
//! delete 5                   next_id = 6   (never rewinds)
//! insert "Y"        ──► 6
//! ```
//! Ids are never handed out twice, so a cart item left behind by a deleted
//! product can never collide with a newer product. Once the counter would
//! pass `i64::MAX`, inserts fail with `IdsExhausted` instead of wrapping.

use std::collections::HashSet;

use crate::admin::ProductDraft;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::{validate_product, validate_search_query, ValidationResult};

/// Ordered list of products with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: i64,
}

impl Catalog {
    /// Builds a catalog from seed products, keeping their order.
    ///
    /// ## Errors
    /// - `InvalidProductId`: an id is zero, negative or `i64::MAX`
    /// - `DuplicateProductId`: two products share an id
    /// - `Validation`: a product breaks the admin form rules (blank name,
    ///   missing or out of range price, blank category)
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.get() <= 0 || product.id.get() == i64::MAX {
                return Err(CoreError::InvalidProductId(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
            validate_product(product)?;
        }

        Ok(Catalog::from_unique(products))
    }

    /// A catalog holding the launch products from [`seed_products`].
    pub fn seeded() -> Self {
        Catalog::from_unique(seed_products())
    }

    /// Ids must already be unique and below `i64::MAX`.
    fn from_unique(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        Catalog { products, next_id }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// The id the next insert will receive.
    pub fn peek_next_id(&self) -> ProductId {
        ProductId::new(self.next_id)
    }

    /// Appends a product built from `draft` under a fresh id.
    ///
    /// The catalog is untouched when the draft is missing a required field
    /// or the id counter is exhausted.
    pub fn insert(&mut self, draft: ProductDraft) -> CoreResult<ProductId> {
        let id = self.peek_next_id();
        let following = self.next_id.checked_add(1).ok_or(CoreError::IdsExhausted)?;
        let product = draft.finalize(id)?;

        self.products.push(product);
        self.next_id = following;
        Ok(id)
    }

    /// Merges `draft` onto the product with `id`, in place.
    pub fn update(&mut self, id: ProductId, draft: &ProductDraft) -> CoreResult<&Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        *slot = draft.apply_to(slot)?;
        Ok(slot)
    }

    /// Removes the product with `id`. Missing ids are a no-op.
    pub fn delete(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    // =========================================================================
    // Storefront Sections
    // =========================================================================

    /// Products flagged as new arrivals.
    pub fn new_arrivals(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(|p| p.is_new)
    }

    /// Products flagged as on sale.
    pub fn on_sale(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(|p| p.is_sale)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Case-insensitive search over name, description and category.
    ///
    /// ## Example
    /// ```rust
    /// use techstore_core::Catalog;
    ///
    /// let catalog = Catalog::seeded();
    /// let hits = catalog.search("neobook").unwrap();
    /// assert_eq!(hits.len(), 1);
    ///
    /// // Blank queries list everything
    /// assert_eq!(catalog.search("   ").unwrap().len(), catalog.len());
    /// ```
    pub fn search(&self, query: &str) -> ValidationResult<Vec<&Product>> {
        let needle = validate_search_query(query)?.to_lowercase();

        Ok(self
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .collect())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seeded()
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// The four launch products.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Quantum Smartphone X1".to_string(),
            price: Money::new(89_999),
            original_price: Some(Money::new(99_999)),
            image: "/img/40472602-c256-44fe-bedd-b4f74a43e7bf.jpg".to_string(),
            category: "Смартфоны".to_string(),
            is_new: true,
            is_sale: true,
            description: "Революционный смартфон с квантовым процессором".to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "Cyber Headphones Pro".to_string(),
            price: Money::new(24_999),
            original_price: None,
            image: "/img/6cea27e4-9af6-453c-8173-13544af6d5ee.jpg".to_string(),
            category: "Аудио".to_string(),
            is_new: true,
            is_sale: false,
            description: "Беспроводные наушники с пространственным звуком".to_string(),
        },
        Product {
            id: ProductId::new(3),
            name: "NeoBook Ultra".to_string(),
            price: Money::new(149_999),
            original_price: None,
            image: "/img/51a7ec09-0461-4ebe-b547-9752725923d7.jpg".to_string(),
            category: "Ноутбуки".to_string(),
            is_new: false,
            is_sale: false,
            description: "Ультрабук следующего поколения".to_string(),
        },
        Product {
            id: ProductId::new(4),
            name: "Smart Watch Alpha".to_string(),
            price: Money::new(32_999),
            original_price: Some(Money::new(39_999)),
            image: "/img/40472602-c256-44fe-bedd-b4f74a43e7bf.jpg".to_string(),
            category: "Носимые".to_string(),
            is_new: false,
            is_sale: true,
            description: "Умные часы с holographic дисплеем".to_string(),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
