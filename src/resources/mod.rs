//! Resource types for the Medusa storefront adapter.
//!
//! This module provides the resource model shared by the client and the
//! request descriptor builder:
//!
//! - [`ResourceKind`]: the endpoint family a lookup targets
//! - [`RawResource`]: the backend's partially-known shape
//! - [`Resource`]: the fixed, minimal normalized output shape
//!
//! Normalization is `Resource::from(raw)`: copy `id` and `handle` verbatim,
//! prefer `title` over `name`, and surface the first image's `url` as
//! `image.src` when the raw `images` sequence is non-empty.

mod kind;
mod raw;
mod resource;

pub use kind::ResourceKind;
pub use raw::{RawImage, RawResource};
pub use resource::{Resource, ResourceImage};
