//! Minimal id/name references to other objects.

use crate::decode::{FieldView, GraphObject};
use crate::error::Error;
use crate::fields::{FieldKind, FieldMapping, FieldSpec};

/// A minimal reference to another Graph object: its id and display
/// name. Connection listings such as likes return these.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reference {
    pub id: String,
    pub name: String,
}

pub static REFERENCE_MAPPING: FieldMapping = FieldMapping {
    object_type: "reference",
    fields: &[
        FieldSpec { wire: "id", attr: "id", kind: FieldKind::Text },
        FieldSpec { wire: "name", attr: "name", kind: FieldKind::Text },
    ],
};

impl GraphObject for Reference {
    fn mapping() -> &'static FieldMapping {
        &REFERENCE_MAPPING
    }

    fn from_fields(f: &FieldView<'_>) -> Result<Self, Error> {
        Ok(Reference {
            id: f.text("id")?,
            name: f.text("name")?,
        })
    }
}
