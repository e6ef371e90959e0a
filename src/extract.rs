//! The extraction pipeline: scan, filter by class, pull `src` values, limit.

use crate::options::Options;
use crate::result::ImageSearchData;
use crate::scan::{class_tokens, img_tags, src_value};

/// Returns true when any class token on the tag is an exact match for a
/// rejected class. Tags without a `class` attribute are never rejected.
fn has_rejected_class(tag: &str, rejected_classes: &[String]) -> bool {
    class_tokens(tag).any(|token| rejected_classes.iter().any(|rejected| rejected == token))
}

/// Extracts the full filtered image URL sequence from cooked HTML, in
/// document order, without applying the count limit.
///
/// Tags carrying a rejected class token contribute nothing; tags without a
/// non-empty `src` attribute are dropped silently.
#[must_use]
pub fn extract_image_urls(cooked: &str, options: &Options) -> Vec<String> {
    img_tags(cooked)
        .filter(|tag| !has_rejected_class(tag, &options.rejected_classes))
        .filter_map(src_value)
        .map(ToString::to_string)
        .collect()
}

/// Runs the full pipeline and applies the count limit.
///
/// `total` is counted before truncation; when `options.max_count` is `0` the
/// full sequence is returned unchanged.
#[must_use]
pub fn extract_with_options(cooked: &str, options: &Options) -> ImageSearchData {
    let mut urls = extract_image_urls(cooked, options);
    let total = urls.len();

    if options.max_count > 0 {
        urls.truncate(options.max_count);
    }

    ImageSearchData { urls, total }
}
