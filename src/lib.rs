//! # Medusa Storefront Adapter
//!
//! A Rust adapter for the Medusa storefront API, providing type-safe
//! configuration, resource lookups over HTTP, and normalization of backend
//! resources into a fixed minimal shape.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MedusaConfig`] and [`MedusaConfigBuilder`]
//! - Validated newtypes for the publishable API key and admin URL
//! - An async [`ResourceClient`] for product and category lookups
//! - A pure normalizer from the backend's loose JSON into [`Resource`]
//! - I/O-free [`RequestDescriptor`] values describing equivalent direct fetches
//!
//! ## Quick Start
//!
//! ```rust
//! use medusa_storefront::{AdminUrl, MedusaConfig, PublishableApiKey, ResourceClient};
//!
//! let config = MedusaConfig::builder()
//!     .publishable_api_key(PublishableApiKey::new("pk_test_123").unwrap())
//!     .admin_url(AdminUrl::new("https://store.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ResourceClient::new(&config);
//! ```
//!
//! ## Looking Up Resources
//!
//! ```rust,ignore
//! use medusa_storefront::ResourceKind;
//!
//! // Fetch one product by id
//! let product = client.find_by_id(ResourceKind::Product, "prod_1").await?;
//!
//! // First match for a handle, or None
//! let shirt = client.find_by_handle(ResourceKind::Product, "shirt").await?;
//!
//! // Full-text search over categories
//! let results = client.search(ResourceKind::Category, "apparel").await?;
//! ```
//!
//! ## Request Descriptors
//!
//! Callers that want to perform or cache the fetch themselves can build a
//! declarative descriptor instead of calling through the client:
//!
//! ```rust,ignore
//! use medusa_storefront::{RequestDescriptor, ResourceKind};
//!
//! let descriptor = RequestDescriptor::new(ResourceKind::Product, "prod_1", &config)?;
//! // descriptor.request.url is exactly the URL find_by_id would fetch
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Both settings validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: No retries, no caching, no background work
//! - **Tolerant normalization**: Every backend field is treated as optional

pub mod clients;
pub mod config;
pub mod error;
pub mod request;
pub mod resources;

// Re-export public types at crate root for convenience
pub use clients::{ClientError, ResourceClient, PUBLISHABLE_API_KEY_HEADER, REQUEST_TIMEOUT};
pub use config::{
    AdminUrl, MedusaConfig, MedusaConfigBuilder, PublishableApiKey, ADMIN_URL_SETTING,
    PUBLISHABLE_API_KEY_SETTING,
};
pub use error::ConfigError;
pub use request::{RequestDescriptor, RequestTarget, REQUEST_TYPE_TAG};
pub use resources::{RawImage, RawResource, Resource, ResourceImage, ResourceKind};
