//! Serialization boundary for host search-result payloads.
//!
//! The wire contract is "omit the key", not "emit null": when the inclusion
//! gate excludes a post, the `image_search_data` key must be entirely absent
//! from the serialized result.

use serde_json::{Map, Value};

use crate::enrich;
use crate::gate::SearchContext;
use crate::options::Options;

/// The payload key under which image data is attached to a serialized
/// search-result post.
pub const IMAGE_SEARCH_DATA_KEY: &str = "image_search_data";

/// Attaches `image_search_data` to a serialized post when the inclusion gate
/// passes; leaves the map untouched otherwise.
///
/// Returns true when the key was attached.
///
/// # Example
///
/// ```rust
/// use search_thumbnails::{attach_image_search_data, Options, SearchContext};
/// use serde_json::Map;
///
/// let mut post = Map::new();
/// let context = SearchContext {
///     term: "with:images".to_string(),
///     ..SearchContext::default()
/// };
/// let attached = attach_image_search_data(
///     &mut post,
///     r#"<img src="/a.jpg">"#,
///     Some(42),
///     &context,
///     &Options::default(),
/// );
/// assert!(attached);
/// assert!(post.contains_key("image_search_data"));
/// ```
pub fn attach_image_search_data(
    post: &mut Map<String, Value>,
    cooked: &str,
    image_upload_id: Option<u64>,
    context: &SearchContext,
    options: &Options,
) -> bool {
    let Some(data) = enrich(cooked, image_upload_id, context, options) else {
        return false;
    };

    match serde_json::to_value(&data) {
        Ok(value) => {
            post.insert(IMAGE_SEARCH_DATA_KEY.to_string(), value);
            true
        }
        // Vec<String> + usize cannot fail to serialize; keep the contract of
        // never attaching a partial payload if that ever changes.
        Err(_) => false,
    }
}
