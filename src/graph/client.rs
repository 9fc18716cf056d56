//! Graph API HTTP client implementation.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::auth::AccessToken;
use crate::decode::{GraphObject, decode_list, decode_object};
use crate::error::{DecodeError, Error, classify_response};
use crate::ops::{LikeOps, PageOps};
use crate::paging::{PagedList, parse_envelope};
use crate::types::{GraphApiUrl, ImageVariant, ObjectId};

/// HTTP client for Graph API requests.
///
/// A `GraphClient` is an immutable configuration: base URL, optional
/// access token, and the underlying HTTP client. All operations take
/// `&self` and hold no cross-call state, so one instance may be shared
/// across concurrent callers. No operation retries, backs off, or
/// streams; each call is a single HTTP round trip.
///
/// The default HTTP client does not follow redirects; pass a
/// caller-configured client via [`GraphClient::with_http_client`] to
/// change that (relevant only to [`fetch_binary`](Self::fetch_binary)).
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    base: GraphApiUrl,
    token: Option<AccessToken>,
}

impl GraphClient {
    /// Create a client that authorizes every request with the given
    /// access token.
    pub fn new(base: GraphApiUrl, token: AccessToken) -> Self {
        Self {
            http: default_http_client(),
            base,
            token: Some(token),
        }
    }

    /// Create a client with no access token.
    ///
    /// Reads against public objects still work; any operation that
    /// requires authorization fails with [`Error::Unauthorized`] before
    /// touching the network.
    pub fn unauthenticated(base: GraphApiUrl) -> Self {
        Self {
            http: default_http_client(),
            base,
            token: None,
        }
    }

    /// Create a client around a caller-configured `reqwest` client.
    pub fn with_http_client(
        http: reqwest::Client,
        base: GraphApiUrl,
        token: Option<AccessToken>,
    ) -> Self {
        Self { http, base, token }
    }

    /// Returns the Graph API base this client is configured for.
    pub fn base(&self) -> &GraphApiUrl {
        &self.base
    }

    /// Whether this client holds an access token.
    pub fn is_authorized(&self) -> bool {
        self.token.is_some()
    }

    /// Fail with [`Error::Unauthorized`] unless a token is held.
    ///
    /// Operation surfaces call this before authenticated reads; engine
    /// writes call it themselves.
    pub fn require_auth(&self) -> Result<(), Error> {
        if self.token.is_some() {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }

    /// Page operations.
    pub fn pages(&self) -> PageOps<'_> {
        PageOps::new(self)
    }

    /// Like operations.
    pub fn likes(&self) -> LikeOps<'_> {
        LikeOps::new(self)
    }

    // ========================================================================
    // Low-level Graph operations
    // ========================================================================

    /// Fetch a single object, `GET {base}/{id}`.
    ///
    /// A non-empty `fields` selection is sent comma-joined in the
    /// `fields` parameter; an empty one leaves the remote default set.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn fetch_object<T: GraphObject>(
        &self,
        id: &ObjectId,
        fields: &[&str],
    ) -> Result<T, Error> {
        let url = self.base.object_url(id);
        let query = merge_fields(Vec::new(), fields);
        debug!(%id, "fetching object");

        let body = self.get_json(&url, &query).await?;
        decode_object(&body)
    }

    /// Fetch a connection listing, `GET {base}/{id}/{connection}`.
    ///
    /// An empty connection name means the object's own listing. A
    /// non-empty `fields` selection is merged into `params` under the
    /// `fields` key (comma-joined, never duplicated).
    #[instrument(skip(self, params), fields(base = %self.base))]
    pub async fn fetch_connection<T: GraphObject>(
        &self,
        id: &ObjectId,
        connection: &str,
        params: Vec<(String, String)>,
        fields: &[&str],
    ) -> Result<PagedList<T>, Error> {
        let url = self.base.connection_url(id, connection);
        let query = merge_fields(params, fields);
        debug!(%id, connection, "fetching connection");
        trace!(?query, "query parameters");

        let body = self.get_json(&url, &query).await?;
        let envelope = parse_envelope(&body)?;
        let items = decode_list(envelope.data)?;

        Ok(PagedList {
            items,
            previous: envelope.previous,
            next: envelope.next,
            total_count: envelope.total_count,
        })
    }

    /// Create an object on a connection, `POST {base}/{id}/{connection}`
    /// with a form-encoded body.
    ///
    /// The response must be a JSON object carrying the new object's
    /// `id`; any other shape is a protocol violation surfaced as a
    /// [`DecodeError`], never retried.
    #[instrument(skip(self, form), fields(base = %self.base))]
    pub async fn publish(
        &self,
        id: &ObjectId,
        connection: &str,
        form: &[(&str, &str)],
    ) -> Result<ObjectId, Error> {
        self.require_auth()?;
        let url = self.base.connection_url(id, connection);
        debug!(%id, connection, "publishing");

        let response = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .form(form)
            .send()
            .await?;
        let body = self.handle_response(response).await?;

        match body.get("id") {
            Some(Value::String(s)) => Ok(ObjectId::new(s.clone())),
            Some(Value::Number(n)) => Ok(ObjectId::new(n.to_string())),
            _ => Err(DecodeError::Protocol {
                message: format!("publish to {}/{} returned no 'id' field", id, connection),
            }
            .into()),
        }
    }

    /// POST to a connection, ignoring the response body beyond the
    /// status check.
    #[instrument(skip(self, form), fields(base = %self.base))]
    pub async fn post(
        &self,
        id: &ObjectId,
        connection: &str,
        form: &[(&str, &str)],
    ) -> Result<(), Error> {
        self.require_auth()?;
        let url = self.base.connection_url(id, connection);
        debug!(%id, connection, "posting");

        let response = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .form(form)
            .send()
            .await?;
        self.handle_status(response).await
    }

    /// Delete an object or connection edge.
    ///
    /// The Graph API has no native DELETE verb on this surface; a
    /// delete is a POST whose form body carries `method=delete`. Any
    /// caller-supplied `method` field is overridden.
    #[instrument(skip(self, extra), fields(base = %self.base))]
    pub async fn remove(
        &self,
        id: &ObjectId,
        connection: Option<&str>,
        extra: &[(&str, &str)],
    ) -> Result<(), Error> {
        self.require_auth()?;
        let url = self.base.connection_url(id, connection.unwrap_or(""));
        debug!(%id, ?connection, "deleting via POST");

        let mut form: Vec<(&str, &str)> = extra
            .iter()
            .filter(|(key, _)| *key != "method")
            .copied()
            .collect();
        form.push(("method", "delete"));

        let response = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .form(&form)
            .send()
            .await?;
        self.handle_status(response).await
    }

    /// Fetch binary content (an image) from a connection, `GET` with a
    /// `type` query parameter selecting the size.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedRedirect`] if the transport
    /// returned a redirect status it was not configured to follow.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn fetch_binary(
        &self,
        id: &ObjectId,
        connection: &str,
        variant: ImageVariant,
    ) -> Result<Vec<u8>, Error> {
        self.require_auth()?;
        let url = self.base.connection_url(id, connection);
        debug!(%id, connection, %variant, "fetching binary");

        let response = self
            .http
            .get(&url)
            .query(&[("type", variant.as_str())])
            .headers(self.auth_headers())
            .send()
            .await?;

        let status = response.status();
        if status.is_redirection() {
            return Err(Error::UnsupportedRedirect {
                status: status.as_u16(),
            });
        }
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(self.error_from(status, response).await)
        }
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    async fn get_json(&self, url: &str, query: &[(String, String)]) -> Result<Value, Error> {
        let response = self
            .http
            .get(url)
            .query(query)
            .headers(self.auth_headers())
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Authorization headers: `Authorization: OAuth <token>` whenever a
    /// token is held.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.token {
            let value = format!("OAuth {}", token.as_str());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value).expect("invalid token characters"),
            );
        }
        headers
    }

    /// Handle a Graph response, parsing the body or classifying the
    /// failure.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, Error> {
        let status = response.status();
        trace!(status = %status, "Graph response");

        if status.is_success() {
            let body = response.json::<Value>().await?;
            Ok(body)
        } else {
            Err(self.error_from(status, response).await)
        }
    }

    /// Handle a response whose body carries nothing the caller needs.
    ///
    /// The Graph API answers some writes with an empty body or a bare
    /// `true`; only the status matters here.
    async fn handle_status(&self, response: reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        trace!(status = %status, "Graph response");

        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from(status, response).await)
        }
    }

    async fn error_from(&self, status: StatusCode, response: reqwest::Response) -> Error {
        let body = response.text().await.unwrap_or_default();
        classify_response(status.as_u16(), &body)
    }
}

fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("fbgraph/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build HTTP client")
}

// Field selection overrides any `fields` already present in the
// parameters, so the key appears at most once.
fn merge_fields(mut params: Vec<(String, String)>, fields: &[&str]) -> Vec<(String, String)> {
    if !fields.is_empty() {
        params.retain(|(key, _)| key != "fields");
        params.push(("fields".to_string(), fields.join(",")));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_selection_joins_in_caller_order() {
        let params = merge_fields(Vec::new(), &["id", "name", "category"]);
        assert_eq!(
            params,
            vec![("fields".to_string(), "id,name,category".to_string())]
        );
    }

    #[test]
    fn field_selection_never_duplicates_the_key() {
        let existing = vec![
            ("limit".to_string(), "25".to_string()),
            ("fields".to_string(), "id".to_string()),
        ];
        let params = merge_fields(existing, &["id", "name"]);
        assert_eq!(params.iter().filter(|(k, _)| k == "fields").count(), 1);
        assert!(params.contains(&("fields".to_string(), "id,name".to_string())));
        assert!(params.contains(&("limit".to_string(), "25".to_string())));
    }

    #[test]
    fn empty_selection_leaves_params_untouched() {
        let existing = vec![("limit".to_string(), "25".to_string())];
        assert_eq!(merge_fields(existing.clone(), &[]), existing);
    }

    #[test]
    fn unauthenticated_client_fails_require_auth() {
        let client = GraphClient::unauthenticated(GraphApiUrl::default_base());
        assert!(!client.is_authorized());
        assert!(matches!(client.require_auth(), Err(Error::Unauthorized)));
    }
}
