//! HTTP client types for Medusa store API communication.
//!
//! This module provides the client layer that turns resource lookups into
//! HTTP GETs against a Medusa backend.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ResourceClient`]: The async client for resource lookups
//! - [`ClientError`]: The error taxonomy for client operations
//!
//! # Example
//!
//! ```rust,ignore
//! use medusa_storefront::{MedusaConfig, ResourceClient, ResourceKind};
//!
//! let client = ResourceClient::new(&config);
//! let product = client.find_by_id(ResourceKind::Product, "prod_1").await?;
//! ```
//!
//! # Request Behavior
//!
//! Every operation issues exactly one outbound GET with the fixed
//! `x-publishable-api-key` header and a fixed 5-second timeout. There are
//! no retries and no caching; errors propagate directly to the caller.

mod errors;
mod resource_client;

pub use errors::ClientError;
pub use resource_client::{ResourceClient, PUBLISHABLE_API_KEY_HEADER, REQUEST_TIMEOUT};
