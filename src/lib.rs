//! # search-thumbnails
//!
//! Image URL extraction for thumbnail previews in search results.
//!
//! Given a post's rendered ("cooked") HTML body, this library extracts a
//! bounded, filtered list of image URLs in document order, and decides per
//! post whether the enrichment should be attached at all. The host platform
//! invokes it once per matched post while serializing search results.
//!
//! ## Quick Start
//!
//! ```rust
//! use search_thumbnails::extract;
//!
//! let cooked = r#"<p><img src="/uploads/1X/photo.jpg"></p>
//! <p><img src="/images/smiley.png" class="emoji"></p>"#;
//!
//! let data = extract(cooked);
//! assert_eq!(data.urls, ["/uploads/1X/photo.jpg"]);
//! assert_eq!(data.total, 1);
//! ```
//!
//! ## Design
//!
//! - **No DOM**: `<img>` tags are isolated by substring scanning. Cooked
//!   content is a constrained, already-sanitized rendering dialect, so
//!   pattern matching is sufficient and malformed fragments are skipped
//!   rather than raised as errors.
//! - **Pure and stateless**: every call reads only its arguments. There is no
//!   I/O, no caching, and no shared state, so calls are safe to run
//!   concurrently across posts.
//! - **Total**: extraction never fails for any input string, including the
//!   empty string.

mod error;
mod extract;
mod gate;
mod options;
mod patterns;
mod result;
mod serialize;

/// Tag and attribute scanning primitives over raw cooked HTML.
pub mod scan;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_image_urls, extract_with_options};
pub use gate::{should_include, SearchContext, IMAGES_FILTER_MARKER};
pub use options::{Options, DEFAULT_MAX_COUNT, DEFAULT_REJECTED_CLASSES};
pub use result::ImageSearchData;
pub use serialize::{attach_image_search_data, IMAGE_SEARCH_DATA_KEY};

/// Extracts image URLs from cooked HTML using default options.
///
/// Equivalent to [`extract_with_options`] with [`Options::default()`].
///
/// # Example
///
/// ```rust
/// use search_thumbnails::extract;
///
/// let data = extract(r#"<img src="/a.jpg">"#);
/// assert_eq!(data.urls, ["/a.jpg"]);
/// assert_eq!(data.total, 1);
/// ```
#[must_use]
pub fn extract(cooked: &str) -> ImageSearchData {
    extract_with_options(cooked, &Options::default())
}

/// Runs the inclusion gate and, when it passes, the extraction pipeline.
///
/// Returns `None` when the post should not be enriched; the serialization
/// boundary maps `None` to an absent payload key.
///
/// # Example
///
/// ```rust
/// use search_thumbnails::{enrich, Options, SearchContext};
///
/// let context = SearchContext {
///     term: "cats with:images".to_string(),
///     ..SearchContext::default()
/// };
///
/// let data = enrich(r#"<img src="/a.jpg">"#, Some(42), &context, &Options::default());
/// assert!(data.is_some());
///
/// let excluded = enrich(r#"<img src="/a.jpg">"#, None, &context, &Options::default());
/// assert!(excluded.is_none());
/// ```
#[must_use]
pub fn enrich(
    cooked: &str,
    image_upload_id: Option<u64>,
    context: &SearchContext,
    options: &Options,
) -> Option<ImageSearchData> {
    if !should_include(image_upload_id, context) {
        return None;
    }
    Some(extract_with_options(cooked, options))
}
