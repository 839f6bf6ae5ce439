//! # Admin State
//!
//! Login state machine and the product form buffer of the admin panel.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌───────────┐   login(password matches)   ┌────────────────────┐      │
//! │   │ LoggedOut │ ──────────────────────────► │ LoggedIn { since } │      │
//! │   │           │ ◄────────────────────────── │                    │      │
//! │   └───────────┘          logout()           └────────────────────┘      │
//! │        ▲                                                                │
//! │        └── wrong password: InvalidPassword, stays LoggedOut             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Draft Workflow
//! ```text
//! begin_create() ──► draft = {}            editing = None
//! begin_edit(p)  ──► draft = fields of p   editing = Some(p.id)
//! edit_draft(..) ──► overwrite fields present in the patch
//! save (store)   ──► editing? update : create, then close the draft
//! cancel_draft() ──► draft = None          editing = None
//! ```
//! A save that fails validation keeps the draft open so the form stays
//! filled in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::{
    validate_category, validate_price, validate_product_name, ValidationResult,
};
use crate::DEFAULT_PRODUCT_IMAGE;

// =============================================================================
// Product Draft
// =============================================================================

/// A partially filled product, used as the admin form buffer.
///
/// Every field is optional. A draft only becomes a [`Product`] through
/// [`ProductDraft::finalize`] (create) or [`ProductDraft::apply_to`]
/// (update), both of which require `name`, `price` and `category`.
///
/// ## `originalPrice`
/// The only field that can be cleared, so it has three states:
///
/// | JSON                      | Value              | On update       |
/// |---------------------------|--------------------|-----------------|
/// | key absent                | `None`             | keep current    |
/// | `"originalPrice": null`   | `Some(None)`       | remove it       |
/// | `"originalPrice": 99999`  | `Some(Some(..))`   | set it          |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<Money>,
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(as = "Option<Money>")]
    pub original_price: Option<Option<Money>>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub is_new: Option<bool>,
    pub is_sale: Option<bool>,
    pub description: Option<String>,
}

impl ProductDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        ProductDraft::default()
    }

    /// Pre-fills a draft from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        ProductDraft {
            name: Some(product.name.clone()),
            price: Some(product.price),
            original_price: Some(product.original_price),
            image: Some(product.image.clone()),
            category: Some(product.category.clone()),
            is_new: Some(product.is_new),
            is_sale: Some(product.is_sale),
            description: Some(product.description.clone()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: impl Into<Money>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn original_price(mut self, price: impl Into<Money>) -> Self {
        self.original_price = Some(Some(price.into()));
        self
    }

    /// Marks the original price for removal.
    pub fn clear_original_price(mut self) -> Self {
        self.original_price = Some(None);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_new(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    pub fn is_sale(mut self, is_sale: bool) -> Self {
        self.is_sale = Some(is_sale);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overwrites this draft's fields with every field present in `patch`.
    pub fn merge(&mut self, patch: ProductDraft) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.price.is_some() {
            self.price = patch.price;
        }
        if patch.original_price.is_some() {
            self.original_price = patch.original_price;
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
        if patch.category.is_some() {
            self.category = patch.category;
        }
        if patch.is_new.is_some() {
            self.is_new = patch.is_new;
        }
        if patch.is_sale.is_some() {
            self.is_sale = patch.is_sale;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
    }

    /// Turns the draft into a new product with the given id.
    ///
    /// ## Defaults
    /// - `image`: [`DEFAULT_PRODUCT_IMAGE`] when absent or blank
    /// - `description`: empty
    /// - `is_new` / `is_sale`: `false`
    ///
    /// ## Example
    /// ```rust
    /// use techstore_core::{Money, ProductDraft, ProductId};
    ///
    /// let product = ProductDraft::new()
    ///     .name("X")
    ///     .price(100)
    ///     .category("Аудио")
    ///     .finalize(ProductId::new(5))
    ///     .unwrap();
    ///
    /// assert_eq!(product.price, Money::new(100));
    /// assert!(!product.is_new);
    ///
    /// let missing_price = ProductDraft::new().name("X").category("Аудио");
    /// assert!(missing_price.finalize(ProductId::new(6)).is_err());
    /// ```
    pub fn finalize(self, id: ProductId) -> ValidationResult<Product> {
        let name = validate_product_name(self.name.as_deref())?;
        let price = validate_price(self.price)?;
        let category = validate_category(self.category.as_deref())?;

        let image = self
            .image
            .filter(|uri| !uri.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCT_IMAGE.to_string());

        Ok(Product {
            id,
            name,
            price,
            original_price: self.original_price.flatten(),
            image,
            category,
            is_new: self.is_new.unwrap_or(false),
            is_sale: self.is_sale.unwrap_or(false),
            description: self.description.unwrap_or_default(),
        })
    }

    /// Merges the draft onto `product`, keeping its id.
    ///
    /// Fields absent from the draft keep the product's values; an explicit
    /// `originalPrice: null` removes it. The merged record must still have a
    /// name, a positive price and a category.
    pub fn apply_to(&self, product: &Product) -> ValidationResult<Product> {
        let name = self.name.as_deref().unwrap_or(product.name.as_str());
        let category = self.category.as_deref().unwrap_or(product.category.as_str());

        let name = validate_product_name(Some(name))?;
        let price = validate_price(Some(self.price.unwrap_or(product.price)))?;
        let category = validate_category(Some(category))?;

        Ok(Product {
            id: product.id,
            name,
            price,
            original_price: self.original_price.unwrap_or(product.original_price),
            image: self.image.clone().unwrap_or_else(|| product.image.clone()),
            category,
            is_new: self.is_new.unwrap_or(product.is_new),
            is_sale: self.is_sale.unwrap_or(product.is_sale),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| product.description.clone()),
        })
    }
}

/// Reads a present key as `Some`, so `null` becomes `Some(None)`.
///
/// Absent keys never reach this and fall back to the field default.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<Money>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Money>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Admin Mode
// =============================================================================

/// Whether the admin panel is unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "camelCase")]
#[ts(export)]
pub enum AdminMode {
    #[default]
    LoggedOut,
    LoggedIn {
        #[ts(as = "String")]
        since: DateTime<Utc>,
    },
}

// =============================================================================
// Admin State
// =============================================================================

/// Admin panel state: login mode plus the open form, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminState {
    mode: AdminMode,
    draft: Option<ProductDraft>,
    editing: Option<ProductId>,
}

impl AdminState {
    /// Creates a logged-out admin state with no open form.
    pub fn new() -> Self {
        AdminState::default()
    }

    pub fn mode(&self) -> AdminMode {
        self.mode
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.mode, AdminMode::LoggedIn { .. })
    }

    /// The open form buffer.
    pub fn draft(&self) -> Option<&ProductDraft> {
        self.draft.as_ref()
    }

    /// Id of the product the open form edits; `None` while creating.
    pub fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    /// Compares `input` against the admin password.
    ///
    /// Logging in again while logged in keeps the original `since`.
    pub fn login(&mut self, input: &str, expected: &str, now: DateTime<Utc>) -> CoreResult<()> {
        if input != expected {
            return Err(CoreError::InvalidPassword);
        }

        if !self.is_authenticated() {
            self.mode = AdminMode::LoggedIn { since: now };
        }
        Ok(())
    }

    /// Returns to `LoggedOut` and discards any open form.
    pub fn logout(&mut self) {
        self.mode = AdminMode::LoggedOut;
        self.close_draft();
    }

    /// Fails with `NotAuthenticated` unless logged in.
    pub fn require_login(&self) -> CoreResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(CoreError::NotAuthenticated)
        }
    }

    /// Opens an empty form for a new product.
    pub fn begin_create(&mut self) -> CoreResult<()> {
        self.require_login()?;
        self.draft = Some(ProductDraft::new());
        self.editing = None;
        Ok(())
    }

    /// Opens a form pre-filled from `product`.
    pub fn begin_edit(&mut self, product: &Product) -> CoreResult<()> {
        self.require_login()?;
        self.draft = Some(ProductDraft::from_product(product));
        self.editing = Some(product.id);
        Ok(())
    }

    /// Applies a field patch to the open form.
    pub fn edit_draft(&mut self, patch: ProductDraft) -> CoreResult<()> {
        self.require_login()?;
        let draft = self.draft.as_mut().ok_or(CoreError::NoDraft)?;
        draft.merge(patch);
        Ok(())
    }

    /// Discards the open form.
    pub fn cancel_draft(&mut self) {
        self.close_draft();
    }

    pub(crate) fn close_draft(&mut self) {
        self.draft = None;
        self.editing = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "admin123";

    fn headphones() -> Product {
        Product {
            id: ProductId::new(2),
            name: "Cyber Headphones Pro".to_string(),
            price: Money::new(24_999),
            original_price: None,
            image: "/img/headphones.jpg".to_string(),
            category: "Аудио".to_string(),
            is_new: true,
            is_sale: false,
            description: "Беспроводные наушники".to_string(),
        }
    }

    fn logged_in() -> AdminState {
        let mut admin = AdminState::new();
        admin.login(PASSWORD, PASSWORD, Utc::now()).unwrap();
        admin
    }

    #[test]
    fn test_login_and_logout() {
        let mut admin = AdminState::new();
        assert!(!admin.is_authenticated());

        admin.login(PASSWORD, PASSWORD, Utc::now()).unwrap();
        assert!(admin.is_authenticated());

        admin.logout();
        assert_eq!(admin.mode(), AdminMode::LoggedOut);
    }

    #[test]
    fn test_wrong_password_stays_logged_out() {
        let mut admin = AdminState::new();
        let result = admin.login("hunter2", PASSWORD, Utc::now());

        assert_eq!(result, Err(CoreError::InvalidPassword));
        assert!(!admin.is_authenticated());
    }

    #[test]
    fn test_relogin_keeps_since() {
        let mut admin = logged_in();
        let first = admin.mode();
        admin
            .login(PASSWORD, PASSWORD, Utc::now() + chrono::Duration::minutes(5))
            .unwrap();
        assert_eq!(admin.mode(), first);
    }

    #[test]
    fn test_forms_require_login() {
        let mut admin = AdminState::new();
        assert_eq!(admin.begin_create(), Err(CoreError::NotAuthenticated));
        assert_eq!(admin.begin_edit(&headphones()), Err(CoreError::NotAuthenticated));
        assert!(admin.draft().is_none());
    }

    #[test]
    fn test_edit_draft_without_form() {
        let mut admin = logged_in();
        let result = admin.edit_draft(ProductDraft::new().name("X"));
        assert_eq!(result, Err(CoreError::NoDraft));
    }

    #[test]
    fn test_begin_edit_prefills_draft() {
        let mut admin = logged_in();
        admin.begin_edit(&headphones()).unwrap();

        assert_eq!(admin.editing(), Some(ProductId::new(2)));
        let draft = admin.draft().unwrap();
        assert_eq!(draft.name.as_deref(), Some("Cyber Headphones Pro"));
        assert_eq!(draft.price, Some(Money::new(24_999)));
    }

    #[test]
    fn test_logout_discards_draft() {
        let mut admin = logged_in();
        admin.begin_create().unwrap();
        admin.logout();

        assert!(admin.draft().is_none());
        assert!(admin.editing().is_none());
    }

    #[test]
    fn test_merge_only_overwrites_present_fields() {
        let mut draft = ProductDraft::from_product(&headphones());
        draft.merge(ProductDraft::new().price(19_999).is_sale(true));

        assert_eq!(draft.price, Some(Money::new(19_999)));
        assert_eq!(draft.is_sale, Some(true));
        assert_eq!(draft.name.as_deref(), Some("Cyber Headphones Pro"));
    }

    #[test]
    fn test_finalize_defaults() {
        let product = ProductDraft::new()
            .name("X")
            .price(100)
            .category("Аудио")
            .image("  ")
            .finalize(ProductId::new(9))
            .unwrap();

        assert_eq!(product.id, ProductId::new(9));
        assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);
        assert_eq!(product.description, "");
        assert_eq!(product.original_price, None);
        assert!(!product.is_new && !product.is_sale);
    }

    #[test]
    fn test_finalize_requires_fields() {
        let missing_name = ProductDraft::new().price(100).category("Аудио");
        assert!(missing_name.finalize(ProductId::new(1)).is_err());

        let missing_category = ProductDraft::new().name("X").price(100);
        assert!(missing_category.finalize(ProductId::new(1)).is_err());

        let zero_price = ProductDraft::new().name("X").price(0).category("Аудио");
        assert!(zero_price.finalize(ProductId::new(1)).is_err());
    }

    #[test]
    fn test_apply_to_merges_and_keeps_id() {
        let original = headphones();
        let draft = ProductDraft::new().name("Cyber Headphones Max");

        let updated = draft.apply_to(&original).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Cyber Headphones Max");
        assert_eq!(updated.price, original.price);
        assert_eq!(updated.category, original.category);
        assert_eq!(updated.is_new, original.is_new);
    }

    #[test]
    fn test_apply_to_original_price_states() {
        let mut on_sale = headphones();
        on_sale.original_price = Some(Money::new(29_999));

        let kept = ProductDraft::new().price(19_999).apply_to(&on_sale).unwrap();
        assert_eq!(kept.original_price, Some(Money::new(29_999)));

        let cleared = ProductDraft::new()
            .clear_original_price()
            .apply_to(&on_sale)
            .unwrap();
        assert_eq!(cleared.original_price, None);

        let set = ProductDraft::new()
            .original_price(34_999)
            .apply_to(&headphones())
            .unwrap();
        assert_eq!(set.original_price, Some(Money::new(34_999)));
    }

    #[test]
    fn test_original_price_null_in_json_clears() {
        let mut on_sale = headphones();
        on_sale.original_price = Some(Money::new(29_999));

        let absent: ProductDraft = serde_json::from_str(r#"{"price":19999}"#).unwrap();
        assert_eq!(absent.original_price, None);
        assert_eq!(
            absent.apply_to(&on_sale).unwrap().original_price,
            Some(Money::new(29_999))
        );

        let null: ProductDraft = serde_json::from_str(r#"{"originalPrice":null}"#).unwrap();
        assert_eq!(null.original_price, Some(None));
        assert_eq!(null.apply_to(&on_sale).unwrap().original_price, None);

        let json = serde_json::to_value(&null).unwrap();
        assert!(json["originalPrice"].is_null());
        assert!(json.as_object().unwrap().contains_key("originalPrice"));
        let json = serde_json::to_value(ProductDraft::new()).unwrap();
        assert!(!json.as_object().unwrap().contains_key("originalPrice"));
    }

    #[test]
    fn test_merge_carries_clear() {
        let mut on_sale = headphones();
        on_sale.original_price = Some(Money::new(29_999));
        let mut draft = ProductDraft::from_product(&on_sale);

        draft.merge(ProductDraft::new().name("Cyber Headphones Max"));
        assert_eq!(draft.original_price, Some(Some(Money::new(29_999))));

        draft.merge(ProductDraft::new().clear_original_price());
        assert_eq!(draft.original_price, Some(None));
        assert_eq!(draft.finalize(ProductId::new(7)).unwrap().original_price, None);
    }

    #[test]
    fn test_apply_to_rejects_blanked_required_field() {
        let draft = ProductDraft::new().category("");
        assert!(draft.apply_to(&headphones()).is_err());
    }

    #[test]
    fn test_draft_json_is_camel_case_and_lenient() {
        let draft: ProductDraft =
            serde_json::from_str(r#"{"name":"X","price":100,"isNew":true}"#).unwrap();
        assert_eq!(draft.name.as_deref(), Some("X"));
        assert_eq!(draft.is_new, Some(true));
        assert_eq!(draft.category, None);
    }
}
