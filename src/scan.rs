//! Tag and attribute scanning over raw cooked HTML.
//!
//! These helpers never build a DOM. Each `<img ...>` tag is isolated as an
//! opaque substring and its attributes are read by pattern match, so
//! unterminated tags, missing attributes, and other malformed fragments
//! degrade to "no match" instead of an error.

use crate::patterns::{CLASS_ATTR, IMG_TAG, SRC_ATTR};

/// Yields each `<img ...>` tag in `cooked` as a substring, in document order.
///
/// The iterator is lazy and borrows from the input; zero matches yields an
/// empty sequence.
pub fn img_tags(cooked: &str) -> impl Iterator<Item = &str> {
    IMG_TAG.find_iter(cooked).map(|m| m.as_str())
}

/// Returns the whitespace-split tokens of the tag's `class` attribute.
///
/// A missing `class` attribute yields an empty iterator, as does
/// `class=""` or an all-whitespace value. Splitting follows
/// `str::split_whitespace`, so tabs and repeated spaces delimit tokens the
/// same as single spaces.
pub fn class_tokens(tag: &str) -> impl Iterator<Item = &str> {
    CLASS_ATTR
        .captures(tag)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
        .unwrap_or_default()
        .split_whitespace()
}

/// Returns the tag's non-empty `src` attribute value verbatim, if present.
///
/// No decoding, normalization, or validation is applied. `src=""` counts as
/// absent.
#[must_use]
pub fn src_value(tag: &str) -> Option<&str> {
    SRC_ATTR
        .captures(tag)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn img_tags_finds_tags_in_document_order() {
        let cooked = r#"<p><img src="/a.jpg"></p><div><img src="/b.jpg" class="x"></div>"#;
        let tags: Vec<&str> = img_tags(cooked).collect();
        assert_eq!(
            tags,
            [r#"<img src="/a.jpg">"#, r#"<img src="/b.jpg" class="x">"#]
        );
    }

    #[test]
    fn img_tags_empty_input_yields_nothing() {
        assert_eq!(img_tags("").count(), 0);
        assert_eq!(img_tags("<p>no images here</p>").count(), 0);
    }

    #[test]
    fn img_tags_tolerates_self_closing_and_attribute_order() {
        let cooked = r#"<img class="a" src="/x.png" /><img alt="y" src="/y.png">"#;
        assert_eq!(img_tags(cooked).count(), 2);
    }

    #[test]
    fn class_tokens_splits_on_any_whitespace() {
        let tag = "<img class=\"emoji  only-emoji\tlarge\" src=\"/e.png\">";
        let tokens: Vec<&str> = class_tokens(tag).collect();
        assert_eq!(tokens, ["emoji", "only-emoji", "large"]);
    }

    #[test]
    fn class_tokens_missing_or_empty_attribute_yields_nothing() {
        assert_eq!(class_tokens(r#"<img src="/a.jpg">"#).count(), 0);
        assert_eq!(class_tokens(r#"<img src="/a.jpg" class="">"#).count(), 0);
        assert_eq!(class_tokens(r#"<img src="/a.jpg" class="   ">"#).count(), 0);
    }

    #[test]
    fn src_value_returns_attribute_verbatim() {
        let tag = r#"<img src="/uploads/1X/photo.jpg?v=1&w=200">"#;
        assert_eq!(src_value(tag), Some("/uploads/1X/photo.jpg?v=1&w=200"));
    }

    #[test]
    fn src_value_missing_or_empty_is_none() {
        assert_eq!(src_value(r#"<img class="emoji">"#), None);
        assert_eq!(src_value(r#"<img src="">"#), None);
    }
}
