//! The normalized public resource shape.
//!
//! Normalization reshapes whatever the backend returned into a fixed,
//! minimal denormalized object. It is a total function over any
//! object-shaped input: absent backend fields simply propagate as absent
//! output fields, never errors.

use serde::{Deserialize, Serialize};

use crate::resources::raw::RawResource;

/// The image slot of a normalized resource.
///
/// Present only when the raw resource carried a non-empty `images`
/// sequence; `src` reflects the first image's `url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceImage {
    /// The source URL of the first image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

/// A normalized resource, the adapter's public output shape.
///
/// All fields are optional; callers that only need a subset discard the
/// rest. When serialized, absent fields are omitted entirely (no `null`
/// placeholders), so the `image` key only appears when an image exists.
///
/// # Example
///
/// ```rust
/// use medusa_storefront::{RawResource, Resource};
///
/// let raw: RawResource = serde_json::from_str(
///     r#"{"id":"p1","name":"Shirt","handle":"shirt","images":[{"url":"http://img/1.png"}]}"#,
/// ).unwrap();
///
/// let resource = Resource::from(raw);
/// assert_eq!(resource.title.as_deref(), Some("Shirt"));
/// assert_eq!(resource.image.unwrap().src.as_deref(), Some("http://img/1.png"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    /// The opaque backend identifier, copied verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The display title: the raw `title` when present and non-empty,
    /// otherwise the raw `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The human-readable slug, copied verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// The first image, when the raw resource had any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ResourceImage>,
}

impl From<RawResource> for Resource {
    fn from(raw: RawResource) -> Self {
        // `title` wins over `name` unless it is absent or empty.
        let title = raw.title.filter(|t| !t.is_empty()).or(raw.name);

        // Only a non-empty images sequence produces an image slot.
        let image = raw
            .images
            .and_then(|images| images.into_iter().next())
            .map(|first| ResourceImage { src: first.url });

        Self {
            id: raw.id,
            title,
            handle: raw.handle,
            image,
        }
    }
}
