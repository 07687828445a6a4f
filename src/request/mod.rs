//! Request descriptors for caller-performed fetches.
//!
//! A [`RequestDescriptor`] is a declarative, side-effect-free description of
//! how to fetch a resource directly over HTTP, for callers that want to
//! perform or cache the fetch themselves instead of going through
//! [`ResourceClient`](crate::ResourceClient). Building one performs no I/O.
//!
//! The descriptor's contract is "fetch this and you get the same thing":
//! its URL is resolved through the same helper the client uses for
//! `find_by_id`, so the two are identical for the same `(kind, id)` pair.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::PUBLISHABLE_API_KEY_HEADER;
use crate::config::MedusaConfig;
use crate::resources::ResourceKind;

/// The `@type` tag identifying a request descriptor to the plugin host.
pub const REQUEST_TYPE_TAG: &str = "@builder.io/core:Request";

/// The HTTP target of a descriptor: a URL plus the headers the fetch needs.
///
/// The method is implied GET. When no headers are required the `headers`
/// key is omitted from the serialized form entirely.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestTarget {
    /// The fully resolved URL to fetch.
    pub url: String,
    /// Headers required for the fetch.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

/// A declarative description of an HTTP fetch equivalent to `find_by_id`.
///
/// Serializes to the wire shape the plugin host consumes:
///
/// ```json
/// {
///   "@type": "@builder.io/core:Request",
///   "request": { "url": "...", "headers": { "x-publishable-api-key": "..." } },
///   "options": { "product": "prod_1" }
/// }
/// ```
///
/// # Example
///
/// ```rust
/// use medusa_storefront::{AdminUrl, MedusaConfig, PublishableApiKey, RequestDescriptor, ResourceKind};
///
/// let config = MedusaConfig::builder()
///     .publishable_api_key(PublishableApiKey::new("pk_test_123").unwrap())
///     .admin_url(AdminUrl::new("https://store.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let descriptor = RequestDescriptor::new(ResourceKind::Product, "prod_1", &config).unwrap();
/// assert_eq!(descriptor.request.url, "https://store.example.com/store/products/prod_1");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// The descriptor type tag, always [`REQUEST_TYPE_TAG`].
    #[serde(rename = "@type")]
    pub type_tag: &'static str,
    /// The HTTP target of the fetch.
    pub request: RequestTarget,
    /// Options bag identifying which resource kind and id this targets.
    pub options: HashMap<String, String>,
}

impl RequestDescriptor {
    /// Builds a descriptor for the given resource kind and id.
    ///
    /// Deterministic and pure: the same inputs always yield the same
    /// descriptor, and no network activity happens here.
    ///
    /// Product descriptors carry the `x-publishable-api-key` header.
    /// Category descriptors do not; the upstream integration omits it
    /// there, and that asymmetry is kept as observed rather than fixed.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the item URL cannot be resolved
    /// against the admin base URL.
    pub fn new(
        kind: ResourceKind,
        id: &str,
        config: &MedusaConfig,
    ) -> Result<Self, url::ParseError> {
        let url = kind.item_url(config.admin_url().url(), id)?;

        let mut headers = HashMap::new();
        if kind == ResourceKind::Product {
            headers.insert(
                PUBLISHABLE_API_KEY_HEADER.to_string(),
                config.publishable_api_key().as_ref().to_string(),
            );
        }

        let mut options = HashMap::new();
        options.insert(kind.option_key().to_string(), id.to_string());

        Ok(Self {
            type_tag: REQUEST_TYPE_TAG,
            request: RequestTarget {
                url: url.into(),
                headers,
            },
            options,
        })
    }
}
