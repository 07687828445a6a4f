//! Error types for adapter configuration.
//!
//! This module contains error types used for configuration and settings
//! validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and
//! actionable.
//!
//! # Example
//!
//! ```rust
//! use medusa_storefront::{ConfigError, PublishableApiKey};
//!
//! let result = PublishableApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPublishableApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during adapter configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Publishable API key cannot be empty.
    #[error("Publishable API key cannot be empty. Get your key from the Medusa Admin Panel.")]
    EmptyPublishableApiKey,

    /// Admin URL is invalid.
    #[error("Invalid admin URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://store.example.com').")]
    InvalidAdminUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required setting is missing.
    #[error("Missing required setting: '{setting}'. This setting must be provided before the adapter can be built.")]
    MissingRequiredSetting {
        /// The name of the missing setting.
        setting: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_publishable_api_key_error_message() {
        let error = ConfigError::EmptyPublishableApiKey;
        let message = error.to_string();
        assert!(message.contains("Publishable API key cannot be empty"));
        assert!(message.contains("Medusa Admin Panel"));
    }

    #[test]
    fn test_invalid_admin_url_error_message() {
        let error = ConfigError::InvalidAdminUrl {
            url: "not a url!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url!"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_setting_error_message() {
        let error = ConfigError::MissingRequiredSetting {
            setting: "adminURL",
        };
        let message = error.to_string();
        assert!(message.contains("adminURL"));
        assert!(message.contains("must be provided"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPublishableApiKey;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
