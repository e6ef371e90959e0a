//! Compiled regex patterns for tag and attribute scanning.
//!
//! All patterns are compiled once at startup using `LazyLock`. Scanning stays
//! deliberately regex-based: cooked post HTML is a constrained, sanitized
//! rendering dialect, so isolating `<img>` tags by substring match is
//! sufficient and keeps malformed fragments non-fatal.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches one opening `<img ...>` tag, shortest match through the next `>`.
///
/// Attribute order, quoting style, and a self-closing slash are all
/// irrelevant here; this only isolates tag boundaries.
pub static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img[^>]*>").expect("IMG_TAG regex"));

/// Captures the value of a double-quoted `class` attribute (may be empty).
pub static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="([^"]*)""#).expect("CLASS_ATTR regex"));

/// Captures the value of a double-quoted, non-empty `src` attribute.
///
/// `[^"]+` means `src=""` never matches; an empty source is treated the same
/// as a missing one.
pub static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="([^"]+)""#).expect("SRC_ATTR regex"));

/// Matches the `with:images` search filter marker, case-insensitive,
/// anywhere in the search term.
pub static IMAGES_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)with:images").expect("IMAGES_FILTER regex"));
