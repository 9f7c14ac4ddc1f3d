//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SABER_SIMPLES_STORAGE_DIR` - Directory backing the durable cart slot
//!   (default: `<data dir>/saber-simples`)
//! - `SABER_SIMPLES_STORAGE_KEY` - Key of the cart slot (default: `saberSimplesCart`)
//! - `SABER_SIMPLES_CATALOG` - Path to the guide catalog JSON
//!   (default: `content/guides.json` inside this crate's source directory)
//! - `SABER_SIMPLES_CURRENCY` - Display currency: `BRL`, `USD` or `EUR` (default: `BRL`)
//! - `SABER_SIMPLES_NOTIFICATIONS` - `dialog` or `banner` (default: `dialog`)
//! - `SABER_SIMPLES_BANNER_MS` - How long a banner notification stays up (default: 3000)
//! - `SABER_SIMPLES_PULSE_MS` - How long the cart button pulses after an add (default: 500)

use std::path::PathBuf;
use std::time::Duration;

use saber_simples_core::CurrencyCode;
use thiserror::Error;

/// Key of the durable slot the page has always used.
pub const DEFAULT_STORAGE_KEY: &str = "saberSimplesCart";

const DEFAULT_CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/content/guides.json");
const DEFAULT_BANNER_MS: u64 = 3000;
const DEFAULT_PULSE_MS: u64 = 500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How user-facing notices are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationStyle {
    /// Blocking alert the user must dismiss.
    #[default]
    Dialog,
    /// Non-blocking banner that disappears on its own.
    Banner {
        /// Time before the banner is dismissed.
        dismiss_after: Duration,
    },
}

/// Settings the cart manager needs at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSettings {
    /// Currency used for every formatted amount.
    pub currency: CurrencyCode,
    /// Delivery mechanism for notices.
    pub notifications: NotificationStyle,
    /// Lifetime of the cart button pulse after a successful add.
    pub pulse: Duration,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            notifications: NotificationStyle::default(),
            pulse: Duration::from_millis(DEFAULT_PULSE_MS),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory of the file-backed key-value store.
    pub storage_dir: PathBuf,
    /// Key of the cart slot inside the store.
    pub storage_key: String,
    /// Path to the guide catalog.
    pub catalog_path: PathBuf,
    /// Cart manager settings.
    pub cart: CartSettings,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = lookup("SABER_SIMPLES_STORAGE_DIR")
            .map_or_else(default_storage_dir, PathBuf::from);
        let storage_key = lookup("SABER_SIMPLES_STORAGE_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        let catalog_path = lookup("SABER_SIMPLES_CATALOG")
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);

        let currency = match lookup("SABER_SIMPLES_CURRENCY") {
            Some(value) => value.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("SABER_SIMPLES_CURRENCY".to_string(), e)
            })?,
            None => CurrencyCode::default(),
        };

        let banner_ms = parse_millis(&lookup, "SABER_SIMPLES_BANNER_MS", DEFAULT_BANNER_MS)?;
        let pulse_ms = parse_millis(&lookup, "SABER_SIMPLES_PULSE_MS", DEFAULT_PULSE_MS)?;

        let notifications = match lookup("SABER_SIMPLES_NOTIFICATIONS")
            .as_deref()
            .map(str::trim)
        {
            None | Some("dialog") => NotificationStyle::Dialog,
            Some("banner") => NotificationStyle::Banner {
                dismiss_after: Duration::from_millis(banner_ms),
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "SABER_SIMPLES_NOTIFICATIONS".to_string(),
                    format!("expected 'dialog' or 'banner', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            storage_dir,
            storage_key,
            catalog_path,
            cart: CartSettings {
                currency,
                notifications,
                pulse: Duration::from_millis(pulse_ms),
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Default store directory under the platform data dir.
fn default_storage_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".saber-simples"),
        |dir| dir.join("saber-simples"),
    )
}

/// Parse a millisecond count, falling back to `default` when unset.
fn parse_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.storage_key, "saberSimplesCart");
        assert!(config.catalog_path.is_absolute());
        assert!(config.catalog_path.ends_with("content/guides.json"));
        assert!(config.catalog_path.exists());
        assert_eq!(config.cart, CartSettings::default());
        assert_eq!(config.cart.pulse, Duration::from_millis(500));
    }

    #[test]
    fn test_banner_notifications() {
        let config = config(&[
            ("SABER_SIMPLES_NOTIFICATIONS", "banner"),
            ("SABER_SIMPLES_BANNER_MS", "1200"),
        ])
        .unwrap();
        assert_eq!(
            config.cart.notifications,
            NotificationStyle::Banner {
                dismiss_after: Duration::from_millis(1200)
            }
        );
    }

    #[test]
    fn test_invalid_notifications() {
        let err = config(&[("SABER_SIMPLES_NOTIFICATIONS", "toast")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "SABER_SIMPLES_NOTIFICATIONS"));
    }

    #[test]
    fn test_invalid_pulse() {
        assert!(config(&[("SABER_SIMPLES_PULSE_MS", "soon")]).is_err());
    }

    #[test]
    fn test_currency_override() {
        let config = config(&[("SABER_SIMPLES_CURRENCY", "usd")]).unwrap();
        assert_eq!(config.cart.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_blank_storage_key_uses_default() {
        let config = config(&[
            ("SABER_SIMPLES_STORAGE_KEY", "  "),
            ("SABER_SIMPLES_STORAGE_DIR", "/tmp/cart"),
        ])
        .unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/cart"));
    }
}
