//! Opaque Graph object identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identifier naming a remote Graph object.
///
/// Identifiers are used verbatim in path construction and are never
/// parsed or validated for structure: numeric ids, aliases, and the
/// special `"me"` alias are all plain strings to this library.
///
/// # Example
///
/// ```
/// use fbgraph::types::ObjectId;
///
/// let id = ObjectId::from("123456789");
/// assert_eq!(id.as_str(), "123456789");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Create an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `"me"` alias for the authenticated user.
    pub fn me() -> Self {
        Self::new("me")
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
