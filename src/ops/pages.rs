//! Page operations.

use tracing::instrument;

use crate::error::Error;
use crate::graph::GraphClient;
use crate::objects::{Account, Page};
use crate::paging::PagedList;
use crate::types::ObjectId;

/// A link attachment for a feed post.
///
/// Only the target URL is required; the remaining fields override what
/// the API would otherwise scrape from the linked page.
#[derive(Debug, Clone, Default)]
pub struct FeedLink {
    pub link: String,
    pub name: Option<String>,
    pub caption: Option<String>,
    pub description: Option<String>,
}

impl FeedLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }
}

/// Operations on pages, obtained via
/// [`GraphClient::pages`](crate::graph::GraphClient::pages).
pub struct PageOps<'a> {
    client: &'a GraphClient,
}

impl<'a> PageOps<'a> {
    pub(crate) fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }

    /// Fetch a page with the remote default field set.
    ///
    /// Public pages work without a token.
    #[instrument(skip(self))]
    pub async fn get_page(&self, page_id: &ObjectId) -> Result<Page, Error> {
        self.client.fetch_object(page_id, &[]).await
    }

    /// The pages the authenticated user administers.
    ///
    /// Requires the `manage_pages` permission.
    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> Result<PagedList<Account>, Error> {
        self.client.require_auth()?;
        self.client
            .fetch_connection(&ObjectId::me(), "accounts", Vec::new(), &[])
            .await
    }

    /// Whether the authenticated user administers the given page.
    #[instrument(skip(self))]
    pub async fn is_page_admin(&self, page_id: &ObjectId) -> Result<bool, Error> {
        let accounts = self.get_accounts().await?;
        Ok(accounts.iter().any(|a| a.id == page_id.as_str()))
    }

    /// Post a message to a page's feed as the page administrator,
    /// returning the new feed entry's id.
    #[instrument(skip(self, message))]
    pub async fn post_message(
        &self,
        page_id: &ObjectId,
        message: &str,
    ) -> Result<ObjectId, Error> {
        self.client
            .publish(page_id, "feed", &[("message", message)])
            .await
    }

    /// Post a message with a link attachment to a page's feed,
    /// returning the new feed entry's id.
    #[instrument(skip(self, message, link))]
    pub async fn post_link(
        &self,
        page_id: &ObjectId,
        message: &str,
        link: &FeedLink,
    ) -> Result<ObjectId, Error> {
        let mut form = vec![("link", link.link.as_str())];
        if let Some(ref name) = link.name {
            form.push(("name", name));
        }
        if let Some(ref caption) = link.caption {
            form.push(("caption", caption));
        }
        if let Some(ref description) = link.description {
            form.push(("description", description));
        }
        form.push(("message", message));
        self.client.publish(page_id, "feed", &form).await
    }

    /// Search public pages by keyword.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<PagedList<Page>, Error> {
        self.client.require_auth()?;
        let params = vec![
            ("q".to_string(), query.to_string()),
            ("type".to_string(), "page".to_string()),
        ];
        self.client
            .fetch_connection(&ObjectId::from("search"), "", params, &[])
            .await
    }

    /// Search places by keyword near a coordinate, within the given
    /// distance in meters.
    #[instrument(skip(self))]
    pub async fn search_places(
        &self,
        query: &str,
        latitude: f64,
        longitude: f64,
        distance: u32,
    ) -> Result<PagedList<Page>, Error> {
        self.client.require_auth()?;
        let params = vec![
            ("q".to_string(), query.to_string()),
            ("type".to_string(), "place".to_string()),
            ("center".to_string(), format!("{},{}", latitude, longitude)),
            ("distance".to_string(), distance.to_string()),
        ];
        self.client
            .fetch_connection(&ObjectId::from("search"), "", params, &[])
            .await
    }
}
