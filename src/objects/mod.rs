//! Typed Graph records and their field mappings.
//!
//! Each record type lives next to its static [`FieldMapping`] table;
//! [`ALL_MAPPINGS`] feeds the process-wide registry. This is a
//! representative subset of the remote object graph — the engine is
//! generic over any type implementing
//! [`GraphObject`](crate::decode::GraphObject).

mod account;
mod event;
mod page;
mod reference;
mod video;

pub use account::{ACCOUNT_MAPPING, Account};
pub use event::{EVENT_MAPPING, Event};
pub use page::{
    COVER_PHOTO_MAPPING, CoverPhoto, LOCATION_MAPPING, Location, PAGE_MAPPING, Page, PriceRange,
};
pub use reference::{REFERENCE_MAPPING, Reference};
pub use video::{VIDEO_FORMAT_MAPPING, VIDEO_MAPPING, Video, VideoFormat};

use crate::fields::FieldMapping;

/// Every mapping table the registry loads at startup.
pub static ALL_MAPPINGS: &[&FieldMapping] = &[
    &PAGE_MAPPING,
    &LOCATION_MAPPING,
    &COVER_PHOTO_MAPPING,
    &REFERENCE_MAPPING,
    &ACCOUNT_MAPPING,
    &EVENT_MAPPING,
    &VIDEO_MAPPING,
    &VIDEO_FORMAT_MAPPING,
];
