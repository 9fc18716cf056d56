//! Cursor-based pagination over connection envelopes.
//!
//! Connection listings arrive wrapped in
//! `{ data: [...], paging?: { previous?, next? }, summary?: { total_count? } }`.
//! The `previous`/`next` values are full URLs; only the recognized
//! pagination query keys are kept, and the engine rebuilds the request
//! URI itself so the configured base and authorization stay under its
//! control.

use serde_json::Value;
use url::Url;

use crate::error::{DecodeError, Error};

/// Query keys the codec reconstructs from a `previous`/`next` URL.
///
/// Anything else in those URLs is discarded. Widen this set if the API
/// grows a new cursor scheme.
pub const RECOGNIZED_KEYS: [&str; 4] = ["limit", "offset", "before", "after"];

/// The minimal query parameters needed to request an adjacent page.
///
/// Remote endpoints vary in which subset they populate: offset-based
/// connections carry `limit`/`offset`, cursor-based ones carry
/// `before`/`after` tokens. Cursors are only ever extracted from a
/// response's paging envelope, never guessed from request parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PagingCursor {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl PagingCursor {
    /// Whether no field is populated.
    pub fn is_empty(&self) -> bool {
        self.limit.is_none()
            && self.offset.is_none()
            && self.before.is_none()
            && self.after.is_none()
    }

    /// Build outbound query parameters from this cursor.
    ///
    /// Emits only the populated fields, so contradictory limit/offset
    /// and token parameters are never sent together unless the remote
    /// API itself returned them together.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(ref before) = self.before {
            params.push(("before".to_string(), before.clone()));
        }
        if let Some(ref after) = self.after {
            params.push(("after".to_string(), after.clone()));
        }
        params
    }

    // Extract the recognized pagination keys from a paging URL.
    // An unparseable URL or one carrying none of the keys yields no
    // cursor; that direction is then treated as terminal.
    fn from_page_url(page_url: &str) -> Option<Self> {
        let url = Url::parse(page_url).ok()?;
        let mut cursor = PagingCursor::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "limit" => cursor.limit = value.parse().ok(),
                "offset" => cursor.offset = value.parse().ok(),
                "before" => cursor.before = Some(value.into_owned()),
                "after" => cursor.after = Some(value.into_owned()),
                _ => {}
            }
        }
        (!cursor.is_empty()).then_some(cursor)
    }
}

/// One fetched page of a connection listing.
///
/// The sequence preserves remote ordering and is a per-call snapshot;
/// fetching an adjacent page means re-issuing the request with a
/// cursor's query parameters. `total_count`, when present, is the full
/// remote collection size, not the page length.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub previous: Option<PagingCursor>,
    pub next: Option<PagingCursor>,
    pub total_count: Option<u64>,
}

impl<T> PagedList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A connection envelope split into its parts, entity data still raw.
#[derive(Debug)]
pub(crate) struct Envelope<'a> {
    pub data: &'a Value,
    pub previous: Option<PagingCursor>,
    pub next: Option<PagingCursor>,
    pub total_count: Option<u64>,
}

/// Split a connection response body into raw data and paging metadata.
///
/// Absence of `paging` yields both cursors absent; that is a valid
/// terminal state, not an error.
pub(crate) fn parse_envelope(body: &Value) -> Result<Envelope<'_>, Error> {
    let data = body.get("data").ok_or(DecodeError::Protocol {
        message: "connection response has no 'data' field".to_string(),
    })?;
    if !data.is_array() {
        return Err(DecodeError::Protocol {
            message: "connection 'data' field is not an array".to_string(),
        }
        .into());
    }

    let total_count = body
        .get("summary")
        .and_then(|s| s.get("total_count"))
        .and_then(Value::as_u64);

    let (previous, next) = match body.get("paging") {
        Some(paging) => (
            page_cursor(paging, "previous"),
            page_cursor(paging, "next"),
        ),
        None => (None, None),
    };

    Ok(Envelope {
        data,
        previous,
        next,
        total_count,
    })
}

fn page_cursor(paging: &Value, direction: &str) -> Option<PagingCursor> {
    paging
        .get(direction)
        .and_then(Value::as_str)
        .and_then(PagingCursor::from_page_url)
}
