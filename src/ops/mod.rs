//! Per-feature operation surfaces.
//!
//! Borrowed views over a [`GraphClient`](crate::graph::GraphClient),
//! obtained via `client.pages()` / `client.likes()`. Each is a thin
//! caller of the engine's four operations; none builds URIs or parses
//! envelopes itself. The full remote API has many more of these
//! surfaces following the same pattern.

mod likes;
mod pages;

pub use likes::LikeOps;
pub use pages::{FeedLink, PageOps};
