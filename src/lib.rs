//! fbgraph - Typed client bindings for the Facebook Graph API
//!
//! This library provides the generic request/response engine for the
//! Graph API: object and connection URI construction, authorized HTTP
//! calls, declarative field-mapped decoding of JSON payloads into typed
//! records, and cursor-based pagination reconstructed from response
//! envelopes. Per-feature operation surfaces are thin callers of the
//! engine.
//!
//! # Example
//!
//! ```no_run
//! use fbgraph::{AccessToken, GraphClient, ObjectId};
//! use fbgraph::types::GraphApiUrl;
//!
//! # async fn example() -> Result<(), fbgraph::Error> {
//! let client = GraphClient::new(
//!     GraphApiUrl::default_base(),
//!     AccessToken::new("some-access-token"),
//! );
//!
//! let page = client.pages().get_page(&ObjectId::from("140804655931206")).await?;
//! println!("{}: {} likes", page.name, page.likes);
//!
//! let likes = client.likes().get_likes(&ObjectId::from("140804655931206")).await?;
//! for reference in &likes {
//!     println!("liked by {}", reference.name);
//! }
//! if let Some(next) = likes.next {
//!     // Re-issue the request with the cursor's query parameters to
//!     // fetch the adjacent page.
//!     let _params = next.to_query_params();
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod decode;
pub mod error;
pub mod fields;
pub mod graph;
pub mod objects;
pub mod ops;
pub mod paging;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::AccessToken;
pub use decode::GraphObject;
pub use error::{ApiErrorKind, Error};
pub use graph::GraphClient;
pub use paging::{PagedList, PagingCursor};
pub use types::{GraphApiUrl, ImageVariant, ObjectId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
