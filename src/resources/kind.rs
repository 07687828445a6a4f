//! Resource kinds and endpoint path mapping.
//!
//! This module maps the two resource families the adapter knows about to
//! their Medusa store endpoints and response list fields.

use std::fmt;

use url::Url;

/// The kind of resource a lookup targets.
///
/// Medusa exposes products and product categories through parallel endpoint
/// families that differ only in path and in the name of the list field
/// wrapping collection responses.
///
/// # Example
///
/// ```rust
/// use medusa_storefront::ResourceKind;
///
/// assert_eq!(ResourceKind::Product.collection_path(), "/store/products");
/// assert_eq!(ResourceKind::Category.list_field(), "product_categories");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A product in the store catalog.
    Product,
    /// A product category.
    Category,
}

impl ResourceKind {
    /// Returns the collection endpoint path for this kind.
    #[must_use]
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Product => "/store/products",
            Self::Category => "/store/product-categories",
        }
    }

    /// Returns the name of the list field wrapping collection responses.
    #[must_use]
    pub const fn list_field(self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Category => "product_categories",
        }
    }

    /// Returns the key used in request descriptor options bags.
    #[must_use]
    pub const fn option_key(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Category => "category",
        }
    }

    /// Resolves the single-item URL for this kind and id against a base URL.
    ///
    /// Uses standard URL-resolution rules rather than string concatenation,
    /// so any path on the base URL is replaced by the absolute endpoint
    /// path. The resource client and the request descriptor builder both
    /// resolve through this method, which keeps their URLs identical for
    /// the same `(kind, id)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the joined value does not parse as a
    /// URL. With a validated [`AdminUrl`](crate::AdminUrl) base this does
    /// not happen in practice.
    pub fn item_url(self, base: &Url, id: &str) -> Result<Url, url::ParseError> {
        base.join(&format!("{}/{id}", self.collection_path()))
    }

    /// Resolves the collection root URL for this kind against a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the joined value does not parse as a
    /// URL.
    pub fn collection_url(self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(self.collection_path())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_key())
    }
}
