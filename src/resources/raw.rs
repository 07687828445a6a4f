//! Raw backend resource shapes.
//!
//! The Medusa backend owns these shapes; the adapter only partially knows
//! them. Every field is optional so that normalization stays total over
//! whatever object the backend returns, and unknown fields are ignored.

use serde::Deserialize;

/// An image entry as returned by the backend.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawImage {
    /// The source URL of the image.
    pub url: Option<String>,
}

/// A resource as returned by the backend, shape only partially known.
///
/// Products carry a `title` while categories carry a `name`; both may carry
/// a `handle` and an ordered `images` sequence. Absent fields deserialize
/// to `None` rather than failing.
///
/// # Example
///
/// ```rust
/// use medusa_storefront::RawResource;
///
/// let raw: RawResource = serde_json::from_str(
///     r#"{"id": "p1", "name": "Shirt", "unknown_field": 42}"#,
/// ).unwrap();
///
/// assert_eq!(raw.id.as_deref(), Some("p1"));
/// assert_eq!(raw.name.as_deref(), Some("Shirt"));
/// assert!(raw.title.is_none());
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawResource {
    /// The opaque backend identifier.
    pub id: Option<String>,
    /// The product title, if any.
    pub title: Option<String>,
    /// The category name, if any.
    pub name: Option<String>,
    /// The human-readable slug.
    pub handle: Option<String>,
    /// Ordered image sequence.
    pub images: Option<Vec<RawImage>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_shape() {
        let raw: RawResource = serde_json::from_str(
            r#"{
                "id": "prod_1",
                "title": "Shirt",
                "handle": "shirt",
                "images": [{"url": "http://img/1.png"}, {"url": "http://img/2.png"}]
            }"#,
        )
        .unwrap();

        assert_eq!(raw.id.as_deref(), Some("prod_1"));
        assert_eq!(raw.title.as_deref(), Some("Shirt"));
        assert_eq!(raw.handle.as_deref(), Some("shirt"));
        assert_eq!(raw.images.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_tolerates_missing_fields() {
        let raw: RawResource = serde_json::from_str("{}").unwrap();
        assert!(raw.id.is_none());
        assert!(raw.title.is_none());
        assert!(raw.name.is_none());
        assert!(raw.handle.is_none());
        assert!(raw.images.is_none());
    }

    #[test]
    fn test_tolerates_null_fields() {
        let raw: RawResource =
            serde_json::from_str(r#"{"id": null, "title": null, "images": null}"#).unwrap();
        assert!(raw.id.is_none());
        assert!(raw.title.is_none());
        assert!(raw.images.is_none());
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let raw: RawResource = serde_json::from_str(
            r#"{"id": "cat_1", "name": "Apparel", "metadata": {"rank": 3}, "parent_category_id": null}"#,
        )
        .unwrap();
        assert_eq!(raw.id.as_deref(), Some("cat_1"));
        assert_eq!(raw.name.as_deref(), Some("Apparel"));
    }

    #[test]
    fn test_image_without_url() {
        let raw: RawResource =
            serde_json::from_str(r#"{"images": [{"id": "img_1"}]}"#).unwrap();
        let images = raw.images.unwrap();
        assert_eq!(images.len(), 1);
        assert!(images[0].url.is_none());
    }
}
