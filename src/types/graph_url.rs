//! Graph API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::Error;
use crate::types::ObjectId;

/// The versioned Graph API base the library defaults to.
pub const DEFAULT_GRAPH_API_BASE: &str = "https://graph.facebook.com/v2.2/";

/// A validated Graph API base URL.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for
/// localhost, which tests rely on), and is normalized so that object and
/// connection paths can be appended directly.
///
/// # Example
///
/// ```
/// use fbgraph::types::{GraphApiUrl, ObjectId};
///
/// let base = GraphApiUrl::new("https://graph.facebook.com/v2.2").unwrap();
/// let id = ObjectId::from("123456789");
/// assert_eq!(base.object_url(&id),
///            "https://graph.facebook.com/v2.2/123456789");
/// assert_eq!(base.connection_url(&id, "likes"),
///            "https://graph.facebook.com/v2.2/123456789/likes");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GraphApiUrl(Url);

impl GraphApiUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, has no host, or uses
    /// a scheme other than HTTPS (HTTP is allowed only for localhost).
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| Error::InvalidBaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// The default versioned base, `https://graph.facebook.com/v2.2/`.
    pub fn default_base() -> Self {
        Self::new(DEFAULT_GRAPH_API_BASE).expect("default base URL is valid")
    }

    /// Returns the URL for a single object, `{base}/{id}`.
    ///
    /// The identifier is opaque and appended verbatim.
    pub fn object_url(&self, id: &ObjectId) -> String {
        format!("{}/{}", self.trimmed(), id.as_str())
    }

    /// Returns the URL for an object's connection, `{base}/{id}/{connection}`.
    ///
    /// An empty connection name means the object's own listing and yields
    /// the same URL as [`object_url`](Self::object_url).
    pub fn connection_url(&self, id: &ObjectId, connection: &str) -> String {
        if connection.is_empty() {
            self.object_url(id)
        } else {
            format!("{}/{}/{}", self.trimmed(), id.as_str(), connection)
        }
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    // The url crate keeps a trailing slash on root paths.
    fn trimmed(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            });
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if url.scheme() != "https" && !(url.scheme() == "http" && is_localhost) {
            return Err(Error::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            });
        }

        if url.host_str().is_none() {
            return Err(Error::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for GraphApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GraphApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for GraphApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for GraphApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        GraphApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}
