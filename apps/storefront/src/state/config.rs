//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TECHSTORE_*`, e.g. `TECHSTORE_ADMIN_PASSWORD`)
//! 2. Config file (`techstore.toml`, path overridable)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use techstore_core::{Catalog, CoreError, Money, Product, DEFAULT_ADMIN_PASSWORD};
use thiserror::Error;

/// Config file looked up next to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "techstore.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TECHSTORE";

/// Storefront configuration.
///
/// Keys are snake_case in `techstore.toml` and camelCase when sent to the
/// front end. The admin password is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), default)]
pub struct StorefrontConfig {
    /// Shown in the header and page title
    pub store_name: String,

    /// Appended to every price
    pub currency_symbol: String,

    /// Digit group separator, a plain space for roubles
    pub thousands_separator: String,

    /// Literal compared against the admin dialog input
    #[serde(skip_serializing)]
    pub admin_password: String,

    /// JSON file with the launch catalog. Built-in products when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    /// ## Default Values
    /// - Store: "TechStore"
    /// - Currency: ₽ with space-separated thousands
    /// - Admin password: the built-in literal
    /// - Catalog: the four built-in products
    fn default() -> Self {
        StorefrontConfig {
            store_name: "TechStore".to_string(),
            currency_symbol: "₽".to_string(),
            thousands_separator: " ".to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            seed_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Loads `techstore.toml` (if present) and `TECHSTORE_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        StorefrontConfig::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Same as [`StorefrontConfig::load`] with an explicit config file path.
    ///
    /// A missing file is fine; a malformed one is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_layered(path.as_ref(), Environment::with_prefix(ENV_PREFIX))
    }

    /// Parses TOML text over the defaults. No environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Formats a price for display, e.g. `89 999 ₽`.
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with(&self.thousands_separator, &self.currency_symbol)
    }

    /// Builds the launch catalog: the seed file when configured, the
    /// built-in products otherwise.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.seed_path {
            Some(path) => load_seed_file(path),
            None => Ok(Catalog::seeded()),
        }
    }
}

/// Defaults, then the optional file at `path`, then `env` on top.
fn load_layered(path: &Path, env: Environment) -> Result<StorefrontConfig, ConfigError> {
    let file = File::from(path).required(false);

    let config = with_defaults()?.add_source(file).add_source(env).build()?;

    Ok(config.try_deserialize()?)
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ::config::ConfigError> {
    let defaults = StorefrontConfig::default();

    Config::builder()
        .set_default("store_name", defaults.store_name)?
        .set_default("currency_symbol", defaults.currency_symbol)?
        .set_default("thousands_separator", defaults.thousands_separator)?
        .set_default("admin_password", defaults.admin_password)
}

/// Reads a JSON array of products (camelCase keys, same shape the front end
/// receives).
fn load_seed_file(path: &Path) -> Result<Catalog, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    let products: Vec<Product> =
        serde_json::from_str(&text).map_err(|source| ConfigError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Catalog::new(products)?)
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Cannot read seed catalog {}: {source}", path.display())]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed seed catalog {}: {source}", path.display())]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid seed catalog: {0}")]
    SeedCatalog(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_vars(vars: &[(&str, &str)]) -> Environment {
        let map: ::config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.admin_password, "admin123");
    }

    #[test]
    fn test_toml_overrides() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            store_name = "Neon Shop"
            admin_password = "s3cret"
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Neon Shop");
        assert_eq!(config.admin_password, "s3cret");
        assert_eq!(config.currency_symbol, "₽");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = StorefrontConfig::load_from("/nonexistent/techstore.toml").unwrap();
        assert_eq!(config.store_name, "TechStore");
    }

    #[test]
    fn test_env_overrides() {
        let env = env_vars(&[
            ("TECHSTORE_ADMIN_PASSWORD", "from-env"),
            ("TECHSTORE_SEED_PATH", "/srv/techstore/seed.json"),
            ("OTHER_ADMIN_PASSWORD", "ignored"),
        ]);

        let config = load_layered(Path::new("/nonexistent/techstore.toml"), env).unwrap();

        assert_eq!(config.admin_password, "from-env");
        assert_eq!(
            config.seed_path,
            Some(PathBuf::from("/srv/techstore/seed.json"))
        );
        assert_eq!(config.store_name, "TechStore");
        assert_eq!(config.currency_symbol, "₽");
        assert_eq!(config.thousands_separator, " ");
    }

    #[test]
    fn test_env_wins_over_file() {
        let path = std::env::temp_dir().join(format!("techstore-env-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "store_name = \"Neon Shop\"\nadmin_password = \"from-file\"\n",
        )
        .unwrap();

        let env = env_vars(&[("TECHSTORE_ADMIN_PASSWORD", "from-env")]);
        let config = load_layered(&path, env);
        std::fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        assert_eq!(config.store_name, "Neon Shop");
        assert_eq!(config.admin_password, "from-env");
    }

    #[test]
    fn test_format_price() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_price(Money::new(89_999)), "89 999 ₽");
        assert_eq!(config.format_price(Money::new(149_999)), "149 999 ₽");
        assert_eq!(config.format_price(Money::new(500)), "500 ₽");
    }

    #[test]
    fn test_password_not_serialized() {
        let json = serde_json::to_value(StorefrontConfig::default()).unwrap();
        assert!(json.get("adminPassword").is_none());
        assert_eq!(json["storeName"], "TechStore");
    }

    #[test]
    fn test_builtin_catalog_without_seed_path() {
        let catalog = StorefrontConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_unreadable_seed_file() {
        let config = StorefrontConfig {
            seed_path: Some(PathBuf::from("/nonexistent/seed.json")),
            ..StorefrontConfig::default()
        };

        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::SeedRead { .. })
        ));
    }
}
