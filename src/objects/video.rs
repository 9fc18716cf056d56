//! Videos and their per-size formats.

use chrono::{DateTime, FixedOffset};

use crate::decode::{FieldView, GraphObject};
use crate::error::Error;
use crate::fields::{FieldKind, FieldMapping, FieldSpec};

use super::Reference;

/// An uploaded video.
///
/// The wire shape nests a `format` array whose elements carry their own
/// mapping ([`VideoFormat`]) rather than reusing the video's.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Video {
    pub id: String,
    pub description: String,
    pub picture: String,
    pub embed_html: String,
    pub source: String,
    pub from: Option<Reference>,
    pub created_time: Option<DateTime<FixedOffset>>,
    pub updated_time: Option<DateTime<FixedOffset>>,
    pub format: Vec<VideoFormat>,
}

pub static VIDEO_MAPPING: FieldMapping = FieldMapping {
    object_type: "video",
    fields: &[
        FieldSpec { wire: "id", attr: "id", kind: FieldKind::Text },
        FieldSpec { wire: "description", attr: "description", kind: FieldKind::Text },
        FieldSpec { wire: "picture", attr: "picture", kind: FieldKind::Text },
        FieldSpec { wire: "embed_html", attr: "embed_html", kind: FieldKind::Text },
        FieldSpec { wire: "source", attr: "source", kind: FieldKind::Text },
        FieldSpec { wire: "from", attr: "from", kind: FieldKind::Nested("reference") },
        FieldSpec { wire: "created_time", attr: "created_time", kind: FieldKind::Timestamp },
        FieldSpec { wire: "updated_time", attr: "updated_time", kind: FieldKind::Timestamp },
        FieldSpec { wire: "format", attr: "format", kind: FieldKind::NestedList("video_format") },
    ],
};

impl GraphObject for Video {
    fn mapping() -> &'static FieldMapping {
        &VIDEO_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(Video {
            id: f.text("id")?,
            description: f.text("description")?,
            picture: f.text("picture")?,
            embed_html: f.text("embed_html")?,
            source: f.text("source")?,
            from: f.nested("from")?,
            created_time: f.timestamp("created_time")?,
            updated_time: f.timestamp("updated_time")?,
            format: f.nested_list("format")?,
        })
    }
}

/// One rendition of a video at a particular size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoFormat {
    pub embed_html: String,
    pub filter: String,
    pub picture: String,
    pub width: i64,
    pub height: i64,
}

pub static VIDEO_FORMAT_MAPPING: FieldMapping = FieldMapping {
    object_type: "video_format",
    fields: &[
        FieldSpec { wire: "embed_html", attr: "embed_html", kind: FieldKind::Text },
        FieldSpec { wire: "filter", attr: "filter", kind: FieldKind::Text },
        FieldSpec { wire: "picture", attr: "picture", kind: FieldKind::Text },
        FieldSpec { wire: "width", attr: "width", kind: FieldKind::Integer },
        FieldSpec { wire: "height", attr: "height", kind: FieldKind::Integer },
    ],
};

impl GraphObject for VideoFormat {
    fn mapping() -> &'static FieldMapping {
        &VIDEO_FORMAT_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(VideoFormat {
            embed_html: f.text("embed_html")?,
            filter: f.text("filter")?,
            picture: f.text("picture")?,
            width: f.integer("width")?,
            height: f.integer("height")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_object;
    use serde_json::json;

    #[test]
    fn inner_format_objects_use_their_own_mapping() {
        let raw = json!({
            "id": "456",
            "source": "https://video.example/456.mp4",
            "format": [
                {"filter": "130x130", "width": 130, "height": 73},
                {"filter": "480x480", "width": 480, "height": 270}
            ]
        });
        let video: Video = decode_object(&raw).unwrap();
        assert_eq!(video.format.len(), 2);
        assert_eq!(video.format[1].width, 480);
        assert_eq!(video.format[0].filter, "130x130");
    }
}
