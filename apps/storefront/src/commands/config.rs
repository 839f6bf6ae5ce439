//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::StorefrontConfig;
use techstore_core::Money;

/// Gets the storefront configuration (without the admin password).
///
/// ## When Used
/// - Page load (header, title)
/// - Price formatting on the front end
pub fn get_config(config: &StorefrontConfig) -> StorefrontConfig {
    debug!("get_config command");
    config.clone()
}

/// Formats an amount the way the storefront shows prices.
pub fn format_price(config: &StorefrontConfig, amount: i64) -> String {
    debug!(amount = %amount, "format_price command");
    config.format_price(Money::new(amount))
}
