//! Resource client for Medusa store endpoints.
//!
//! This module provides the [`ResourceClient`] type, which translates each
//! lookup into exactly one HTTP GET against the Medusa store API and
//! normalizes the JSON response.

use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::ClientError;
use crate::config::MedusaConfig;
use crate::resources::{RawResource, Resource, ResourceKind};

/// Fixed upper bound on every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the publishable API key on every request.
pub const PUBLISHABLE_API_KEY_HEADER: &str = "x-publishable-api-key";

/// HTTP client for Medusa store resource lookups.
///
/// The client handles:
/// - URL resolution against the configured admin base URL
/// - The fixed `x-publishable-api-key` header on every request
/// - The fixed 5-second request timeout
/// - Reshaping raw backend JSON into the normalized [`Resource`] shape
///
/// Each operation performs exactly one outbound request. There are no
/// retries and no caching; concurrent calls are fully independent.
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use medusa_storefront::{MedusaConfig, ResourceClient, ResourceKind};
///
/// let client = ResourceClient::new(&config);
///
/// let product = client.find_by_id(ResourceKind::Product, "prod_1").await?;
/// let by_handle = client.find_by_handle(ResourceKind::Product, "shirt").await?;
/// let results = client.search(ResourceKind::Category, "apparel").await?;
/// ```
#[derive(Debug)]
pub struct ResourceClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The immutable endpoint configuration.
    config: MedusaConfig,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a new resource client for the given configuration.
    ///
    /// The underlying HTTP client is built once with the fixed
    /// [`REQUEST_TIMEOUT`]; the configuration is never mutated afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &MedusaConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &MedusaConfig {
        &self.config
    }

    /// Fetches a single resource by its backend id.
    ///
    /// Issues GET `{collection_path}/{id}` resolved against the admin base
    /// URL, then normalizes the returned object.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if:
    /// - The backend returns a not-found status (`NotFound`)
    /// - No response arrives within the 5-second bound (`Timeout`)
    /// - Any other non-2xx status is returned (`Upstream`)
    /// - The response body cannot be decoded (`MalformedResponse`)
    /// - The transport fails (`Network`)
    pub async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Resource, ClientError> {
        let url = kind.item_url(self.config.admin_url().url(), id)?;
        let body = self.get(url, &[]).await?;
        Ok(Resource::from(decode_resource(body)?))
    }

    /// Fetches the first resource matching a handle.
    ///
    /// Issues GET against the collection root with a `handle` query
    /// parameter, set only when `handle` is non-empty. Returns the first
    /// element of the response list normalized, or `None` when the list is
    /// empty.
    ///
    /// An empty `handle` still issues the request without the parameter and
    /// returns the first element of the unfiltered collection. This mirrors
    /// the behavior existing callers rely on and is kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport, timeout, and status failures,
    /// and `MalformedResponse` when the response lacks the collection list
    /// field.
    pub async fn find_by_handle(
        &self,
        kind: ResourceKind,
        handle: &str,
    ) -> Result<Option<Resource>, ClientError> {
        let url = kind.collection_url(self.config.admin_url().url())?;
        let query = optional_param("handle", handle);
        let body = self.get(url, &query).await?;

        take_list(body, kind.list_field())?
            .into_iter()
            .next()
            .map(|item| decode_resource(item).map(Resource::from))
            .transpose()
    }

    /// Searches a collection, returning every matching resource normalized.
    ///
    /// Issues GET against the collection root with a `q` query parameter,
    /// set only when `term` is non-empty; an empty term returns the full,
    /// unfiltered collection. Order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for transport, timeout, and status failures,
    /// and `MalformedResponse` when the response lacks the collection list
    /// field.
    pub async fn search(
        &self,
        kind: ResourceKind,
        term: &str,
    ) -> Result<Vec<Resource>, ClientError> {
        let url = kind.collection_url(self.config.admin_url().url())?;
        let query = optional_param("q", term);
        let body = self.get(url, &query).await?;

        take_list(body, kind.list_field())?
            .into_iter()
            .map(|item| decode_resource(item).map(Resource::from))
            .collect()
    }

    /// Issues one GET and returns the decoded JSON body.
    async fn get(
        &self,
        url: url::Url,
        query: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        tracing::debug!("GET {url}");

        let mut request = self.client.get(url.clone()).header(
            PUBLISHABLE_API_KEY_HEADER,
            self.config.publishable_api_key().as_ref(),
        );
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                path: url.path().to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Returns a single-entry query when `value` is non-empty, nothing otherwise.
fn optional_param<'a>(key: &'a str, value: &'a str) -> Vec<(&'a str, &'a str)> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![(key, value)]
    }
}

/// Extracts the list field from a collection response body.
fn take_list(mut body: Value, field: &'static str) -> Result<Vec<Value>, ClientError> {
    match body.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ClientError::MalformedResponse {
            reason: format!("expected `{field}` list in collection response"),
        }),
    }
}

/// Decodes one raw resource object, tolerating unknown and missing fields.
fn decode_resource(value: Value) -> Result<RawResource, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::MalformedResponse {
        reason: e.to_string(),
    })
}
