//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the two settings the
//! adapter requires. Values are trimmed of surrounding whitespace and
//! validated on construction; invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// A validated Medusa publishable API key.
///
/// This newtype ensures the key is non-empty after trimming and masks its
/// value in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `PublishableApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use medusa_storefront::PublishableApiKey;
///
/// let key = PublishableApiKey::new("  pk_test_123  ").unwrap();
/// assert_eq!(key.as_ref(), "pk_test_123");
/// assert_eq!(format!("{:?}", key), "PublishableApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PublishableApiKey(String);

impl PublishableApiKey {
    /// Creates a new validated publishable API key.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublishableApiKey`] if the key is empty
    /// after trimming.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyPublishableApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublishableApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PublishableApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PublishableApiKey(*****)")
    }
}

/// A validated Medusa admin base URL.
///
/// This newtype trims and parses the URL, rejecting values that are not
/// absolute or cannot serve as a base for relative resolution. Keeping the
/// parsed [`Url`] around means endpoint paths can later be joined with
/// standard URL-resolution rules instead of string concatenation.
///
/// # Example
///
/// ```rust
/// use medusa_storefront::AdminUrl;
///
/// let url = AdminUrl::new("https://store.example.com").unwrap();
/// assert_eq!(url.as_ref(), "https://store.example.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminUrl(Url);

impl AdminUrl {
    /// Creates a new validated admin URL.
    ///
    /// Surrounding whitespace is trimmed before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAdminUrl`] if the value is empty, not
    /// an absolute URL, or cannot be used as a base for joining paths.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let parsed =
            Url::parse(&url).map_err(|_| ConfigError::InvalidAdminUrl { url: url.clone() })?;

        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidAdminUrl { url });
        }

        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for AdminUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publishable_api_key_rejects_empty_string() {
        let result = PublishableApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyPublishableApiKey)));
    }

    #[test]
    fn test_publishable_api_key_rejects_whitespace_only() {
        let result = PublishableApiKey::new("   \t ");
        assert!(matches!(result, Err(ConfigError::EmptyPublishableApiKey)));
    }

    #[test]
    fn test_publishable_api_key_trims_surrounding_whitespace() {
        let key = PublishableApiKey::new("  pk_test_abc  ").unwrap();
        assert_eq!(key.as_ref(), "pk_test_abc");
    }

    #[test]
    fn test_publishable_api_key_masks_value_in_debug() {
        let key = PublishableApiKey::new("pk_super_secret").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "PublishableApiKey(*****)");
        assert!(!debug_output.contains("pk_super_secret"));
    }

    #[test]
    fn test_admin_url_accepts_absolute_urls() {
        let url = AdminUrl::new("https://store.example.com").unwrap();
        assert_eq!(url.url().scheme(), "https");
        assert_eq!(url.url().host_str(), Some("store.example.com"));

        // With port
        let url = AdminUrl::new("http://localhost:9000").unwrap();
        assert_eq!(url.url().port(), Some(9000));
    }

    #[test]
    fn test_admin_url_trims_surrounding_whitespace() {
        let url = AdminUrl::new("  https://store.example.com  ").unwrap();
        assert_eq!(url.url().host_str(), Some("store.example.com"));
    }

    #[test]
    fn test_admin_url_rejects_invalid() {
        // No scheme
        assert!(AdminUrl::new("store.example.com").is_err());

        // Empty
        assert!(AdminUrl::new("").is_err());

        // Cannot be a base
        assert!(AdminUrl::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_admin_url_error_carries_trimmed_value() {
        let result = AdminUrl::new("  not a url  ");
        assert!(matches!(result, Err(ConfigError::InvalidAdminUrl { url }) if url == "not a url"));
    }
}
