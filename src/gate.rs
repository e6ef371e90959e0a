//! The inclusion gate: should this post be enriched with image data at all?

use crate::patterns::IMAGES_FILTER;

/// The search filter marker users type to restrict results to image-bearing
/// posts. Matched case-insensitively as a substring of the search term.
pub const IMAGES_FILTER_MARKER: &str = "with:images";

/// Per-request search context read by the inclusion gate.
///
/// # Example
///
/// ```rust
/// use search_thumbnails::SearchContext;
///
/// let context = SearchContext {
///     term: "cats with:images".to_string(),
///     ..SearchContext::default()
/// };
/// assert!(context.only_with_images_filter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    /// The raw search query term.
    ///
    /// Default: empty
    pub term: String,

    /// When true, posts are only enriched if the term contains the
    /// [`IMAGES_FILTER_MARKER`].
    ///
    /// Default: `true`
    pub only_with_images_filter: bool,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self {
            term: String::new(),
            only_with_images_filter: true,
        }
    }
}

/// Decides whether a post's search result should carry image data.
///
/// Rules, first match wins:
/// 1. no associated image upload: exclude;
/// 2. filter-only policy disabled: include;
/// 3. otherwise include only when the term contains the filter marker.
///
/// The decision is exposed as a plain boolean; encoding "excluded" as an
/// absent payload key belongs to the serialization boundary.
#[must_use]
pub fn should_include(image_upload_id: Option<u64>, context: &SearchContext) -> bool {
    if image_upload_id.is_none() {
        return false;
    }
    if !context.only_with_images_filter {
        return true;
    }
    IMAGES_FILTER.is_match(&context.term)
}
