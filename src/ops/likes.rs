//! Like operations.

use tracing::instrument;

use crate::error::Error;
use crate::graph::GraphClient;
use crate::objects::{Page, Reference};
use crate::paging::PagedList;
use crate::types::ObjectId;

/// Operations on likes, obtained via
/// [`GraphClient::likes`](crate::graph::GraphClient::likes).
///
/// All of these require an access token.
pub struct LikeOps<'a> {
    client: &'a GraphClient,
}

impl<'a> LikeOps<'a> {
    pub(crate) fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }

    /// Like an object on behalf of the authenticated user.
    #[instrument(skip(self))]
    pub async fn like(&self, id: &ObjectId) -> Result<(), Error> {
        self.client.post(id, "likes", &[]).await
    }

    /// Remove the authenticated user's like from an object.
    #[instrument(skip(self))]
    pub async fn unlike(&self, id: &ObjectId) -> Result<(), Error> {
        self.client.remove(id, Some("likes"), &[]).await
    }

    /// List the references that like an object.
    #[instrument(skip(self))]
    pub async fn get_likes(&self, id: &ObjectId) -> Result<PagedList<Reference>, Error> {
        self.client.require_auth()?;
        self.client
            .fetch_connection(id, "likes", Vec::new(), &[])
            .await
    }

    /// The total number of likes on an object, if the API reports one.
    ///
    /// Asks for a single-entry page with a summary so the count comes
    /// from `summary.total_count`, not the page length.
    #[instrument(skip(self))]
    pub async fn like_count(&self, id: &ObjectId) -> Result<Option<u64>, Error> {
        self.client.require_auth()?;
        let params = vec![
            ("limit".to_string(), "1".to_string()),
            ("summary".to_string(), "true".to_string()),
        ];
        let page: PagedList<Reference> =
            self.client.fetch_connection(id, "likes", params, &[]).await?;
        Ok(page.total_count)
    }

    /// The pages the authenticated user likes, with the page mapping's
    /// full wire-field selection.
    #[instrument(skip(self))]
    pub async fn pages_liked(&self) -> Result<PagedList<Page>, Error> {
        self.client.require_auth()?;
        let fields = crate::objects::PAGE_MAPPING.wire_names();
        self.client
            .fetch_connection(&ObjectId::me(), "likes", Vec::new(), &fields)
            .await
    }
}
