//! Core identifier and URL types.

mod graph_url;
mod image_variant;
mod object_id;

pub use graph_url::{DEFAULT_GRAPH_API_BASE, GraphApiUrl};
pub use image_variant::ImageVariant;
pub use object_id::ObjectId;
