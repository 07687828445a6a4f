//! Error types for resource client operations.
//!
//! Every client operation performs exactly one outbound request, so each
//! call resolves to one value or one of these errors. Nothing is retried
//! or recovered internally; all errors propagate to the immediate caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use medusa_storefront::{ClientError, ResourceKind};
//!
//! match client.find_by_id(ResourceKind::Product, "prod_1").await {
//!     Ok(resource) => println!("Found: {:?}", resource.title),
//!     Err(ClientError::NotFound { .. }) => println!("No such product"),
//!     Err(ClientError::Timeout) => println!("Backend too slow"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Errors returned by resource client operations.
///
/// The taxonomy distinguishes the backend being slow ([`Timeout`](Self::Timeout)),
/// the backend saying no ([`NotFound`](Self::NotFound),
/// [`Upstream`](Self::Upstream)), the backend answering nonsense
/// ([`MalformedResponse`](Self::MalformedResponse)), and the transport
/// failing outright ([`Network`](Self::Network)).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request did not complete within the fixed 5-second bound.
    ///
    /// The message is the fixed human-readable string surfaced to callers.
    #[error("Please Try After Sometime")]
    Timeout,

    /// The backend returned a not-found status for the requested resource.
    #[error("resource not found at {path}")]
    NotFound {
        /// The endpoint path that was requested.
        path: String,
    },

    /// The backend returned a non-2xx status other than not-found.
    #[error("unexpected status {status} from Medusa backend")]
    Upstream {
        /// The HTTP status code of the response.
        status: u16,
    },

    /// An otherwise successful response was missing an expected field or
    /// could not be decoded.
    #[error("malformed response from Medusa backend: {reason}")]
    MalformedResponse {
        /// What was wrong with the response.
        reason: String,
    },

    /// A network or connection error.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A request URL could not be resolved against the admin base URL.
    #[error("failed to resolve request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::MalformedResponse {
                reason: error.to_string(),
            }
        } else {
            Self::Network(error)
        }
    }
}
