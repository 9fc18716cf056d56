//! Declarative field-mapping layer.
//!
//! Each entity type declares a static [`FieldMapping`]: a table of
//! wire-name → attribute-name pairs, each with a [`FieldKind`] selecting
//! the coercion the decoder applies. The tables live next to their typed
//! records in [`crate::objects`] and are collected into the process-wide
//! [`MappingRegistry`].

mod registry;

pub use registry::{MappingRegistry, registry};

/// The coercion applied to a wire field when decoding it into an
/// attribute.
///
/// Every kind has a declared default used when the wire field is absent;
/// a missing optional field is never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A text attribute. Default: empty string.
    ///
    /// Tolerates a numeric wire value (older API levels returned some
    /// ids as JSON numbers), rendering it to its decimal string.
    Text,
    /// A numeric counter. Default: zero.
    Integer,
    /// A floating-point value (coordinates). Default: zero.
    Float,
    /// A boolean flag. Default: false.
    Flag,
    /// A timestamp in the Graph wire format `%Y-%m-%dT%H:%M:%S%z`,
    /// with RFC 3339 and bare-date fallbacks. Default: absent.
    Timestamp,
    /// A list of text values. Default: empty list.
    TextList,
    /// A free-form JSON object passed through without transformation
    /// (e.g. operating-hours tables). Default: empty object.
    Raw,
    /// A price-range enumeration whose wire values are currency-symbol
    /// runs (`$` … `$$$$`). Default: unspecified.
    Price,
    /// A nested entity decoded with the named type's own mapping.
    /// Default: absent.
    Nested(&'static str),
    /// A list of nested entities of the named type. Default: empty list.
    NestedList(&'static str),
}

impl FieldKind {
    /// Name used in mapping-mismatch diagnostics.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Integer => "Integer",
            FieldKind::Float => "Float",
            FieldKind::Flag => "Flag",
            FieldKind::Timestamp => "Timestamp",
            FieldKind::TextList => "TextList",
            FieldKind::Raw => "Raw",
            FieldKind::Price => "Price",
            FieldKind::Nested(_) => "Nested",
            FieldKind::NestedList(_) => "NestedList",
        }
    }
}

/// One wire-field → attribute declaration.
#[derive(Debug)]
pub struct FieldSpec {
    /// The field name on the wire (e.g. `company_overview`).
    pub wire: &'static str,
    /// The attribute name on the typed record (e.g. `company_overview`).
    pub attr: &'static str,
    /// The coercion applied when the field is present.
    pub kind: FieldKind,
}

/// The declarative mapping for one entity type.
///
/// Mappings are immutable static data; the registry holds one per
/// entity-type key.
#[derive(Debug)]
pub struct FieldMapping {
    /// Registry key for this entity type (e.g. `"page"`).
    pub object_type: &'static str,
    /// The declared fields, in wire order.
    pub fields: &'static [FieldSpec],
}

impl FieldMapping {
    /// Look up the declaration for an attribute name.
    pub fn spec(&self, attr: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.attr == attr)
    }

    /// The full wire-name list, in declaration order.
    ///
    /// Operation surfaces use this as their default field selection when
    /// the remote default field set is too narrow.
    pub fn wire_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.wire).collect()
    }
}
