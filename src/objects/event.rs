//! Events.

use chrono::{DateTime, FixedOffset};

use crate::decode::{FieldView, GraphObject};
use crate::error::Error;
use crate::fields::{FieldKind, FieldMapping, FieldSpec};

use super::{Location, Reference};

/// An event on the graph, with its owner and optional venue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: Option<Reference>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub updated_time: Option<DateTime<FixedOffset>>,
    /// Display location, a free-text label distinct from the structured
    /// venue.
    pub location: String,
    pub venue: Option<Location>,
    pub ticket_uri: String,
}

pub static EVENT_MAPPING: FieldMapping = FieldMapping {
    object_type: "event",
    fields: &[
        FieldSpec { wire: "id", attr: "id", kind: FieldKind::Text },
        FieldSpec { wire: "name", attr: "name", kind: FieldKind::Text },
        FieldSpec { wire: "description", attr: "description", kind: FieldKind::Text },
        FieldSpec { wire: "owner", attr: "owner", kind: FieldKind::Nested("reference") },
        FieldSpec { wire: "start_time", attr: "start_time", kind: FieldKind::Timestamp },
        FieldSpec { wire: "end_time", attr: "end_time", kind: FieldKind::Timestamp },
        FieldSpec { wire: "updated_time", attr: "updated_time", kind: FieldKind::Timestamp },
        FieldSpec { wire: "location", attr: "location", kind: FieldKind::Text },
        FieldSpec { wire: "venue", attr: "venue", kind: FieldKind::Nested("location") },
        FieldSpec { wire: "ticket_uri", attr: "ticket_uri", kind: FieldKind::Text },
    ],
};

impl GraphObject for Event {
    fn mapping() -> &'static FieldMapping {
        &EVENT_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(Event {
            id: f.text("id")?,
            name: f.text("name")?,
            description: f.text("description")?,
            owner: f.nested("owner")?,
            start_time: f.timestamp("start_time")?,
            end_time: f.timestamp("end_time")?,
            updated_time: f.timestamp("updated_time")?,
            location: f.text("location")?,
            venue: f.nested("venue")?,
            ticket_uri: f.text("ticket_uri")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_object;
    use serde_json::json;

    #[test]
    fn event_with_graph_timestamps_decodes() {
        let raw = json!({
            "id": "193482154020832",
            "name": "Launch party",
            "owner": {"id": "738140579", "name": "Craig Walls"},
            "start_time": "2014-03-30T14:30:00+0000",
            "location": "The office",
            "venue": {"city": "Scranton", "state": "PA"}
        });
        let event: Event = decode_object(&raw).unwrap();
        assert_eq!(event.owner.unwrap().name, "Craig Walls");
        let start = event.start_time.unwrap();
        assert_eq!(start.to_rfc3339(), "2014-03-30T14:30:00+00:00");
        assert!(event.end_time.is_none());
        assert_eq!(event.venue.unwrap().city, "Scranton");
    }
}
