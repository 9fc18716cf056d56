//! Pages and the types nested inside them.

use serde_json::{Map, Value};

use crate::decode::{FieldView, GraphObject};
use crate::error::Error;
use crate::fields::{FieldKind, FieldMapping, FieldSpec};

use super::Reference;

/// A Facebook page: a business, organization, place, brand, or similar.
///
/// The data populated varies with the page's category and what the
/// administrator entered; anything the response omits takes its
/// declared default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_list: Vec<Reference>,
    pub about: String,
    pub description: String,
    pub link: String,
    pub website: String,
    pub phone: String,
    pub picture: String,
    pub cover: Option<CoverPhoto>,
    pub location: Option<Location>,
    /// Free-form operating-hours table, passed through as the API sent it.
    pub hours: Map<String, Value>,
    pub price_range: PriceRange,
    pub affiliation: String,
    pub company_overview: String,
    pub founded: String,
    pub general_info: String,
    pub hometown: String,
    pub mission: String,
    pub products: String,
    pub likes: i64,
    pub checkins: i64,
    pub talking_about_count: i64,
    pub were_here_count: i64,
    pub can_post: bool,
    pub is_published: bool,
    pub is_community_page: bool,
    pub is_permanently_closed: bool,
    pub is_unclaimed: bool,
    pub has_added_app: bool,
}

pub static PAGE_MAPPING: FieldMapping = FieldMapping {
    object_type: "page",
    fields: &[
        FieldSpec { wire: "id", attr: "id", kind: FieldKind::Text },
        FieldSpec { wire: "name", attr: "name", kind: FieldKind::Text },
        FieldSpec { wire: "category", attr: "category", kind: FieldKind::Text },
        FieldSpec { wire: "category_list", attr: "category_list", kind: FieldKind::NestedList("reference") },
        FieldSpec { wire: "about", attr: "about", kind: FieldKind::Text },
        FieldSpec { wire: "description", attr: "description", kind: FieldKind::Text },
        FieldSpec { wire: "link", attr: "link", kind: FieldKind::Text },
        FieldSpec { wire: "website", attr: "website", kind: FieldKind::Text },
        FieldSpec { wire: "phone", attr: "phone", kind: FieldKind::Text },
        FieldSpec { wire: "picture", attr: "picture", kind: FieldKind::Text },
        FieldSpec { wire: "cover", attr: "cover", kind: FieldKind::Nested("cover_photo") },
        FieldSpec { wire: "location", attr: "location", kind: FieldKind::Nested("location") },
        FieldSpec { wire: "hours", attr: "hours", kind: FieldKind::Raw },
        FieldSpec { wire: "price_range", attr: "price_range", kind: FieldKind::Price },
        FieldSpec { wire: "affiliation", attr: "affiliation", kind: FieldKind::Text },
        FieldSpec { wire: "company_overview", attr: "company_overview", kind: FieldKind::Text },
        FieldSpec { wire: "founded", attr: "founded", kind: FieldKind::Text },
        FieldSpec { wire: "general_info", attr: "general_info", kind: FieldKind::Text },
        FieldSpec { wire: "hometown", attr: "hometown", kind: FieldKind::Text },
        FieldSpec { wire: "mission", attr: "mission", kind: FieldKind::Text },
        FieldSpec { wire: "products", attr: "products", kind: FieldKind::Text },
        FieldSpec { wire: "likes", attr: "likes", kind: FieldKind::Integer },
        FieldSpec { wire: "checkins", attr: "checkins", kind: FieldKind::Integer },
        FieldSpec { wire: "talking_about_count", attr: "talking_about_count", kind: FieldKind::Integer },
        FieldSpec { wire: "were_here_count", attr: "were_here_count", kind: FieldKind::Integer },
        FieldSpec { wire: "can_post", attr: "can_post", kind: FieldKind::Flag },
        FieldSpec { wire: "is_published", attr: "is_published", kind: FieldKind::Flag },
        FieldSpec { wire: "is_community_page", attr: "is_community_page", kind: FieldKind::Flag },
        FieldSpec { wire: "is_permanently_closed", attr: "is_permanently_closed", kind: FieldKind::Flag },
        FieldSpec { wire: "is_unclaimed", attr: "is_unclaimed", kind: FieldKind::Flag },
        FieldSpec { wire: "has_added_app", attr: "has_added_app", kind: FieldKind::Flag },
    ],
};

impl GraphObject for Page {
    fn mapping() -> &'static FieldMapping {
        &PAGE_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(Page {
            id: f.text("id")?,
            name: f.text("name")?,
            category: f.text("category")?,
            category_list: f.nested_list("category_list")?,
            about: f.text("about")?,
            description: f.text("description")?,
            link: f.text("link")?,
            website: f.text("website")?,
            phone: f.text("phone")?,
            picture: f.text("picture")?,
            cover: f.nested("cover")?,
            location: f.nested("location")?,
            hours: f.raw("hours")?,
            price_range: f.price("price_range")?,
            affiliation: f.text("affiliation")?,
            company_overview: f.text("company_overview")?,
            founded: f.text("founded")?,
            general_info: f.text("general_info")?,
            hometown: f.text("hometown")?,
            mission: f.text("mission")?,
            products: f.text("products")?,
            likes: f.integer("likes")?,
            checkins: f.integer("checkins")?,
            talking_about_count: f.integer("talking_about_count")?,
            were_here_count: f.integer("were_here_count")?,
            can_post: f.flag("can_post")?,
            is_published: f.flag("is_published")?,
            is_community_page: f.flag("is_community_page")?,
            is_permanently_closed: f.flag("is_permanently_closed")?,
            is_unclaimed: f.flag("is_unclaimed")?,
            has_added_app: f.flag("has_added_app")?,
        })
    }
}

/// A street address with optional coordinates, embedded in pages,
/// events, and venues.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
}

pub static LOCATION_MAPPING: FieldMapping = FieldMapping {
    object_type: "location",
    fields: &[
        FieldSpec { wire: "street", attr: "street", kind: FieldKind::Text },
        FieldSpec { wire: "city", attr: "city", kind: FieldKind::Text },
        FieldSpec { wire: "state", attr: "state", kind: FieldKind::Text },
        FieldSpec { wire: "country", attr: "country", kind: FieldKind::Text },
        FieldSpec { wire: "zip", attr: "zip", kind: FieldKind::Text },
        FieldSpec { wire: "latitude", attr: "latitude", kind: FieldKind::Float },
        FieldSpec { wire: "longitude", attr: "longitude", kind: FieldKind::Float },
    ],
};

impl GraphObject for Location {
    fn mapping() -> &'static FieldMapping {
        &LOCATION_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(Location {
            street: f.text("street")?,
            city: f.text("city")?,
            state: f.text("state")?,
            country: f.text("country")?,
            zip: f.text("zip")?,
            latitude: f.float("latitude")?,
            longitude: f.float("longitude")?,
        })
    }
}

/// A page or event cover photo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverPhoto {
    pub id: String,
    pub source: String,
    pub offset_x: i64,
    pub offset_y: i64,
}

pub static COVER_PHOTO_MAPPING: FieldMapping = FieldMapping {
    object_type: "cover_photo",
    fields: &[
        FieldSpec { wire: "id", attr: "id", kind: FieldKind::Text },
        FieldSpec { wire: "source", attr: "source", kind: FieldKind::Text },
        FieldSpec { wire: "offset_x", attr: "offset_x", kind: FieldKind::Integer },
        FieldSpec { wire: "offset_y", attr: "offset_y", kind: FieldKind::Integer },
    ],
};

impl GraphObject for CoverPhoto {
    fn mapping() -> &'static FieldMapping {
        &COVER_PHOTO_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(CoverPhoto {
            id: f.text("id")?,
            source: f.text("source")?,
            offset_x: f.integer("offset_x")?,
            offset_y: f.integer("offset_y")?,
        })
    }
}

/// A page's price range.
///
/// The wire values are currency-symbol runs (`"$"` through `"$$$$"`),
/// which are not valid identifier tokens; unknown values decode as
/// [`PriceRange::Unspecified`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceRange {
    #[default]
    Unspecified,
    Cheap,
    Moderate,
    Expensive,
    Luxury,
}

impl PriceRange {
    /// Decode a wire value.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "$" => PriceRange::Cheap,
            "$$" => PriceRange::Moderate,
            "$$$" => PriceRange::Expensive,
            "$$$$" => PriceRange::Luxury,
            _ => PriceRange::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_object;
    use serde_json::json;

    #[test]
    fn price_range_wire_values() {
        assert_eq!(PriceRange::from_wire("$"), PriceRange::Cheap);
        assert_eq!(PriceRange::from_wire("$$$$"), PriceRange::Luxury);
        assert_eq!(PriceRange::from_wire("free?"), PriceRange::Unspecified);
    }

    #[test]
    fn full_page_decodes() {
        let raw = json!({
            "id": "140804655931206",
            "name": "Espresso Hut",
            "category": "Coffee shop",
            "category_list": [{"id": "1", "name": "Restaurant/Cafe"}],
            "price_range": "$$",
            "likes": 15_291,
            "checkins": 891,
            "can_post": true,
            "cover": {"id": "9", "source": "https://cdn.example/cover.jpg", "offset_y": 12},
            "location": {"street": "100 Main St", "city": "Scranton", "state": "PA",
                         "zip": "18503", "latitude": 41.408, "longitude": -75.662}
        });
        let page: Page = decode_object(&raw).unwrap();
        assert_eq!(page.name, "Espresso Hut");
        assert_eq!(page.price_range, PriceRange::Moderate);
        assert_eq!(page.likes, 15_291);
        assert!(page.can_post);
        assert_eq!(page.category_list.len(), 1);
        assert_eq!(page.cover.unwrap().offset_y, 12);
        assert_eq!(page.location.unwrap().zip, "18503");
    }
}
