//! # Validation Module
//!
//! Field rules for the admin draft form, cart quantities and catalog search.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Rules Apply                                  │
//! │                                                                         │
//! │  Admin form "Save"                                                     │
//! │  ├── validate_product_name   name present, not blank, ≤ 200 chars      │
//! │  ├── validate_price          price present, > 0, ≤ 100 000 000         │
//! │  └── validate_category       category present, not blank               │
//! │                                                                         │
//! │  Cart quantity stepper                                                 │
//! │  └── validate_quantity       0..=999 (0 means remove)                  │
//! │                                                                         │
//! │  Header search box                                                     │
//! │  └── validate_search_query   ≤ 100 chars, trimmed                      │
//! │                                                                         │
//! │  Seed catalog load                                                     │
//! │  └── validate_product        the three form rules on a whole product   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A zero price counts as missing, the same as an empty name.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_ITEM_QUANTITY, MAX_PRODUCT_NAME_LEN, MAX_PRODUCT_PRICE, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use techstore_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(Some("  NeoBook Ultra ")).unwrap(), "NeoBook Ultra");
/// assert!(validate_product_name(Some("")).is_err());
/// assert!(validate_product_name(None).is_err());
/// ```
pub fn validate_product_name(name: Option<&str>) -> ValidationResult<String> {
    let name = name.map(str::trim).unwrap_or_default();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be present
/// - Zero counts as missing
/// - Must not be negative
/// - Must not exceed [`MAX_PRODUCT_PRICE`]
pub fn validate_price(price: Option<Money>) -> ValidationResult<Money> {
    match price {
        None => Err(ValidationError::required("price")),
        Some(p) if p.is_zero() => Err(ValidationError::required("price")),
        Some(p) if !p.is_positive() => Err(ValidationError::must_be_positive("price")),
        Some(p) if p.amount() > MAX_PRODUCT_PRICE => {
            Err(ValidationError::out_of_range("price", 1, MAX_PRODUCT_PRICE))
        }
        Some(p) => Ok(p),
    }
}

/// Validates a category label and returns it trimmed.
pub fn validate_category(category: Option<&str>) -> ValidationResult<String> {
    let category = category.map(str::trim).unwrap_or_default();

    if category.is_empty() {
        return Err(ValidationError::required("category"));
    }

    Ok(category.to_string())
}

/// Validates a requested cart quantity.
///
/// Zero is allowed and means "remove". Negative values are rejected.
///
/// ## Example
/// ```rust
/// use techstore_core::validation::validate_quantity;
///
/// assert!(validate_quantity(0).is_ok());
/// assert!(validate_quantity(999).is_ok());
/// assert!(validate_quantity(1000).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::must_be_positive("quantity"));
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::out_of_range("quantity", 0, MAX_ITEM_QUANTITY));
    }

    Ok(())
}

/// Checks a complete product against the same rules a saved draft must meet.
///
/// Used for catalogs that arrive fully formed, such as seed files.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(Some(&product.name))?;
    validate_price(Some(product.price))?;
    validate_category(Some(&product.category))?;
    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns the whole catalog)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name(Some("X")).unwrap(), "X");
        assert!(validate_product_name(Some("   ")).is_err());
        assert!(validate_product_name(None).is_err());
        assert!(validate_product_name(Some(&"A".repeat(201))).is_err());
        assert!(validate_product_name(Some(&"Я".repeat(200))).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(Some(Money::new(100))).unwrap(), Money::new(100));
        assert_eq!(
            validate_price(None),
            Err(ValidationError::required("price"))
        );
        assert_eq!(
            validate_price(Some(Money::zero())),
            Err(ValidationError::required("price"))
        );
        assert_eq!(
            validate_price(Some(Money::new(-5))),
            Err(ValidationError::must_be_positive("price"))
        );
        assert!(validate_price(Some(Money::new(MAX_PRODUCT_PRICE))).is_ok());
        assert!(matches!(
            validate_price(Some(Money::new(MAX_PRODUCT_PRICE + 1))),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_product() {
        let mut product = crate::catalog::seed_products().remove(0);
        assert!(validate_product(&product).is_ok());

        product.price = Money::zero();
        assert_eq!(
            validate_product(&product),
            Err(ValidationError::required("price"))
        );

        product.price = Money::new(100);
        product.category = "  ".to_string();
        assert_eq!(
            validate_product(&product),
            Err(ValidationError::required("category"))
        );
    }

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category(Some(" Аудио ")).unwrap(), "Аудио");
        assert!(validate_category(Some("")).is_err());
        assert!(validate_category(None).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(-1).is_err());
        assert_eq!(
            validate_quantity(1_000),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: 999,
            })
        );
        assert!(validate_quantity(200_000_000_000_000).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  watch ").unwrap(), "watch");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }
}
