//! Configuration types for the Medusa storefront adapter.
//!
//! This module provides the core configuration types used to initialize
//! the adapter for API communication with a Medusa backend.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MedusaConfig`]: The immutable configuration holding both settings
//! - [`MedusaConfigBuilder`]: A builder for constructing [`MedusaConfig`] instances
//! - [`PublishableApiKey`]: A validated API key newtype with masked debug output
//! - [`AdminUrl`]: A validated absolute base URL
//!
//! # Example
//!
//! ```rust
//! use medusa_storefront::{MedusaConfig, PublishableApiKey, AdminUrl};
//!
//! let config = MedusaConfig::builder()
//!     .publishable_api_key(PublishableApiKey::new("pk_test_123").unwrap())
//!     .admin_url(AdminUrl::new("https://store.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AdminUrl, PublishableApiKey};

use crate::error::ConfigError;
use std::collections::HashMap;

/// Settings key for the publishable API key, as named by the plugin host.
pub const PUBLISHABLE_API_KEY_SETTING: &str = "publishableAPIKey";

/// Settings key for the admin URL, as named by the plugin host.
pub const ADMIN_URL_SETTING: &str = "adminURL";

/// Configuration for the Medusa storefront adapter.
///
/// This struct holds the two values every API call needs: the publishable
/// API key (sent as a fixed header on every request) and the admin base URL
/// (the root all endpoint paths are resolved against). It is created once
/// at adapter activation and never mutated.
///
/// # Thread Safety
///
/// `MedusaConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use medusa_storefront::{MedusaConfig, PublishableApiKey, AdminUrl};
///
/// let config = MedusaConfig::builder()
///     .publishable_api_key(PublishableApiKey::new("pk_test_123").unwrap())
///     .admin_url(AdminUrl::new("https://store.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.publishable_api_key().as_ref(), "pk_test_123");
/// ```
#[derive(Clone, Debug)]
pub struct MedusaConfig {
    publishable_api_key: PublishableApiKey,
    admin_url: AdminUrl,
}

// Verify MedusaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MedusaConfig>();
};

impl MedusaConfig {
    /// Creates a new builder for constructing a `MedusaConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use medusa_storefront::{MedusaConfig, PublishableApiKey, AdminUrl};
    ///
    /// let config = MedusaConfig::builder()
    ///     .publishable_api_key(PublishableApiKey::new("pk_test_123").unwrap())
    ///     .admin_url(AdminUrl::new("https://store.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> MedusaConfigBuilder {
        MedusaConfigBuilder::new()
    }

    /// Creates a configuration from a plugin settings map.
    ///
    /// Reads the `publishableAPIKey` and `adminURL` keys, trimming
    /// surrounding whitespace from both values. This mirrors the settings
    /// surface the plugin host presents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredSetting`] if either key is
    /// absent, and the underlying validation error if a value is present
    /// but invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use medusa_storefront::MedusaConfig;
    ///
    /// let mut settings = HashMap::new();
    /// settings.insert("publishableAPIKey".to_string(), " pk_test_123 ".to_string());
    /// settings.insert("adminURL".to_string(), "https://store.example.com".to_string());
    ///
    /// let config = MedusaConfig::from_settings(&settings).unwrap();
    /// assert_eq!(config.publishable_api_key().as_ref(), "pk_test_123");
    /// ```
    pub fn from_settings(settings: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let key = settings.get(PUBLISHABLE_API_KEY_SETTING).ok_or(
            ConfigError::MissingRequiredSetting {
                setting: PUBLISHABLE_API_KEY_SETTING,
            },
        )?;
        let admin_url =
            settings
                .get(ADMIN_URL_SETTING)
                .ok_or(ConfigError::MissingRequiredSetting {
                    setting: ADMIN_URL_SETTING,
                })?;

        Ok(Self {
            publishable_api_key: PublishableApiKey::new(key.clone())?,
            admin_url: AdminUrl::new(admin_url.clone())?,
        })
    }

    /// Returns the publishable API key.
    #[must_use]
    pub const fn publishable_api_key(&self) -> &PublishableApiKey {
        &self.publishable_api_key
    }

    /// Returns the admin base URL.
    #[must_use]
    pub const fn admin_url(&self) -> &AdminUrl {
        &self.admin_url
    }
}

/// Builder for constructing [`MedusaConfig`] instances.
///
/// Both fields are required; [`build`](MedusaConfigBuilder::build) fails if
/// either is missing.
///
/// # Example
///
/// ```rust
/// use medusa_storefront::{MedusaConfig, PublishableApiKey, AdminUrl};
///
/// let config = MedusaConfig::builder()
///     .publishable_api_key(PublishableApiKey::new("pk_test_123").unwrap())
///     .admin_url(AdminUrl::new("https://store.example.com").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MedusaConfigBuilder {
    publishable_api_key: Option<PublishableApiKey>,
    admin_url: Option<AdminUrl>,
}

impl MedusaConfigBuilder {
    /// Creates a new builder with no values set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the publishable API key (required).
    #[must_use]
    pub fn publishable_api_key(mut self, key: PublishableApiKey) -> Self {
        self.publishable_api_key = Some(key);
        self
    }

    /// Sets the admin base URL (required).
    #[must_use]
    pub fn admin_url(mut self, url: AdminUrl) -> Self {
        self.admin_url = Some(url);
        self
    }

    /// Builds the [`MedusaConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredSetting`] if `publishable_api_key`
    /// or `admin_url` are not set.
    pub fn build(self) -> Result<MedusaConfig, ConfigError> {
        let publishable_api_key =
            self.publishable_api_key
                .ok_or(ConfigError::MissingRequiredSetting {
                    setting: PUBLISHABLE_API_KEY_SETTING,
                })?;
        let admin_url = self.admin_url.ok_or(ConfigError::MissingRequiredSetting {
            setting: ADMIN_URL_SETTING,
        })?;

        Ok(MedusaConfig {
            publishable_api_key,
            admin_url,
        })
    }
}
