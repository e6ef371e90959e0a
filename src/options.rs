//! Configuration options for thumbnail extraction.
//!
//! The `Options` struct is passed explicitly into every extraction call.
//! Nothing here is process-wide state; the host resolves its settings store
//! once per request and hands the result in, which keeps extraction
//! deterministic and safe to run in parallel.

use crate::error::{Error, Result};

/// Default class tokens that disqualify an `<img>` tag from thumbnails.
///
/// These mark decorative or derived images (emoji, favicons, avatars,
/// pre-generated thumbnails) that would make poor search previews.
pub const DEFAULT_REJECTED_CLASSES: [&str; 4] = ["emoji", "site-icon", "thumbnail", "avatar"];

/// Default maximum number of URLs returned per post.
pub const DEFAULT_MAX_COUNT: usize = 5;

/// Configuration options for thumbnail extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use search_thumbnails::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_count: 0, // unlimited
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Class tokens that disqualify an `<img>` tag.
    ///
    /// A tag is rejected when any single token of its `class` attribute is an
    /// exact, case-sensitive match for an entry here. An empty list rejects
    /// nothing.
    ///
    /// Default: [`DEFAULT_REJECTED_CLASSES`]
    pub rejected_classes: Vec<String>,

    /// Maximum number of URLs to return per post. `0` means unlimited.
    ///
    /// Default: [`DEFAULT_MAX_COUNT`]
    pub max_count: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rejected_classes: DEFAULT_REJECTED_CLASSES
                .iter()
                .map(ToString::to_string)
                .collect(),
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

impl Options {
    /// Builds options from raw host site-setting values.
    ///
    /// List settings arrive as pipe-delimited strings (`"emoji|avatar"`);
    /// empty segments are dropped, so `""` yields an empty reject list.
    /// Integer settings arrive as host-side signed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeMaxCount`] when `max_count` is negative.
    pub fn from_site_settings(rejected_classes: &str, max_count: i64) -> Result<Self> {
        let max_count =
            usize::try_from(max_count).map_err(|_| Error::NegativeMaxCount(max_count))?;

        let rejected_classes = rejected_classes
            .split('|')
            .map(str::trim)
            .filter(|class| !class.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(Self {
            rejected_classes,
            max_count,
        })
    }
}
