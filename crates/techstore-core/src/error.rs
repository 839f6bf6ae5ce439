//! # Error Types
//!
//! Domain-specific error types for techstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  techstore-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog, cart and admin failures               │
//! │  └── ValidationError  - Draft and quantity input failures              │
//! │                                                                         │
//! │  apps/storefront                                                       │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. Every failing operation leaves the state exactly
//! as it was, so the caller may simply ignore the error.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by catalog, cart and admin operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    ///
    /// Only seed catalogs can trigger this; ids handed out by the catalog
    /// itself are never reused.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// A seed catalog entry has an id the catalog cannot hold.
    ///
    /// Ids must be positive and leave room for the next one to be assigned.
    #[error("Invalid product id: {0}")]
    InvalidProductId(ProductId),

    /// The id counter has reached `i64::MAX`.
    #[error("No product ids left to assign")]
    IdsExhausted,

    /// A catalog mutation was attempted outside admin mode.
    #[error("Admin login required")]
    NotAuthenticated,

    /// The admin password did not match.
    ///
    /// ## User Workflow
    /// ```text
    /// Admin dialog: password "hunter2"
    ///      │
    ///      ▼
    /// InvalidPassword
    ///      │
    ///      ▼
    /// Dialog stays open, still LoggedOut
    /// ```
    #[error("Invalid admin password")]
    InvalidPassword,

    /// Save or edit was requested but no draft is open.
    #[error("No product draft is open")]
    NoDraft,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn must_be_positive(field: &str) -> Self {
        ValidationError::MustBePositive {
            field: field.to_string(),
        }
    }

    pub(crate) fn out_of_range(field: &str, min: i64, max: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
