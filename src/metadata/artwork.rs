//! Trakt image fields and the one function that reads them.
//!
//! Depending on API version and endpoint, a Trakt image field is a bare URL,
//! a list of URLs, or an object keyed by size (`thumb`, `medium`, `full`).
//! The shape is captured once at deserialization time and resolved by
//! [`ImageField::pick`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Size keys from largest to smallest; used when none of the preferred keys
/// are present.
const SIZES_LARGEST_FIRST: [&str; 5] = ["original", "full", "large", "medium", "thumb"];

/// One image field as Trakt sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    /// `"poster": "media.trakt.tv/images/..."`
    Url(String),
    /// `"poster": ["media.trakt.tv/images/..."]`
    List(Vec<String>),
    /// `"poster": {"medium": "...", "full": "..."}`
    Sized(BTreeMap<String, Option<String>>),
    /// `null` or anything else; kept so the raw bag round-trips.
    Other(serde_json::Value),
}

/// The raw `images` object of a Trakt item, keyed by image type
/// (`poster`, `fanart`, `logo`, ...).
pub type ImageBag = BTreeMap<String, ImageField>;

impl ImageField {
    /// Resolve the field to a single URL.
    ///
    /// Lists yield their first entry. Sized objects yield the first of
    /// `preferred` that is present, falling back to the largest size
    /// available.
    pub fn pick(&self, preferred: &[&str]) -> Option<String> {
        match self {
            Self::Url(url) => non_empty(url),
            Self::List(urls) => urls.first().and_then(|url| non_empty(url)),
            Self::Sized(sizes) => {
                let lookup = |key: &str| {
                    sizes
                        .get(key)
                        .and_then(|url| url.as_deref())
                        .and_then(non_empty)
                };
                preferred
                    .iter()
                    .chain(SIZES_LARGEST_FIRST.iter())
                    .find_map(|key| lookup(key))
            }
            Self::Other(_) => None,
        }
    }
}

/// Resolve the image of `image_type` from an optional bag.
pub(crate) fn pick_image(
    bag: Option<&ImageBag>,
    image_type: &str,
    preferred: &[&str],
) -> Option<String> {
    bag?.get(image_type)?.pick(preferred)
}

fn non_empty(url: &str) -> Option<String> {
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}
