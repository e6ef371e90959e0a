//! Result type for thumbnail extraction output.

use serde::{Deserialize, Serialize};

/// Image URLs extracted from one post's cooked HTML, plus the untruncated
/// count.
///
/// `urls` is always a document-order prefix of the full filtered URL
/// sequence, so `urls.len() <= total` holds for every input.
///
/// Field names match the wire payload attached to serialized search results
/// under the `image_search_data` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSearchData {
    /// Extracted image URLs in document order, truncated to the configured
    /// maximum count.
    pub urls: Vec<String>,

    /// Number of surviving URLs before truncation.
    pub total: usize,
}
