//! Image size selector for binary fetches.

use std::fmt;

/// The image size requested from a picture connection.
///
/// Serialized as the lowercase variant name in the `type` query
/// parameter of a binary fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageVariant {
    Small,
    Normal,
    Large,
    Square,
}

impl ImageVariant {
    /// The wire value for the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageVariant::Small => "small",
            ImageVariant::Normal => "normal",
            ImageVariant::Large => "large",
            ImageVariant::Square => "square",
        }
    }
}

impl fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
