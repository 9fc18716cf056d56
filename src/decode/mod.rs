//! Entity decoding driven by the field-mapping layer.
//!
//! [`decode_object`] turns a raw JSON object into a typed record using
//! the type's declared [`FieldMapping`]. Unknown wire fields are ignored
//! for forward compatibility; absent wire fields take the attribute's
//! declared default. Decoding is a pure function of the input and the
//! registry.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::{Map, Value};

use crate::error::{DecodeError, Error};
use crate::fields::{FieldKind, FieldMapping, FieldSpec, registry};
use crate::objects::PriceRange;

/// A typed record decodable from a Graph API JSON object.
///
/// Implementors declare their wire mapping and build themselves from a
/// [`FieldView`] over the raw object. The mapping is the single source
/// of wire-name and coercion knowledge; `from_fields` addresses fields
/// by attribute name only.
pub trait GraphObject: Sized {
    /// The declarative wire mapping for this type.
    fn mapping() -> &'static FieldMapping;

    /// Build the record from a decoded field view.
    fn from_fields(fields: &FieldView<'_>) -> Result<Self, Error>;
}

/// Decode a single entity from a raw JSON value.
///
/// # Errors
///
/// Fails with a [`DecodeError`] if the value is not a JSON object or a
/// present field has a type the declared coercion cannot handle.
pub fn decode_object<T: GraphObject>(raw: &Value) -> Result<T, Error> {
    let mapping = T::mapping();
    let obj = raw.as_object().ok_or(DecodeError::NotAnObject {
        object_type: mapping.object_type,
        found: json_type_name(raw),
    })?;
    T::from_fields(&FieldView { mapping, obj })
}

/// Decode an ordered list of entities from a raw JSON array.
///
/// Fails atomically: if any element fails to decode, no partial list is
/// surfaced.
pub fn decode_list<T: GraphObject>(raw: &Value) -> Result<Vec<T>, Error> {
    let items = raw.as_array().ok_or(DecodeError::NotAnArray {
        context: T::mapping().object_type,
        found: json_type_name(raw),
    })?;
    items.iter().map(decode_object).collect()
}

/// A view over one raw JSON object, interpreted through a mapping.
///
/// Accessors take attribute names, resolve them to wire fields through
/// the mapping, and apply the declared coercion with its default.
pub struct FieldView<'a> {
    mapping: &'static FieldMapping,
    obj: &'a Map<String, Value>,
}

impl<'a> FieldView<'a> {
    /// Text attribute; empty string when absent.
    pub fn text(&self, attr: &str) -> Result<String, Error> {
        let (spec, value) = self.field(attr, FieldKind::Text)?;
        match value {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            // Older API levels return some ids as JSON numbers.
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(other) => Err(self.field_type(spec, "a string", other)),
        }
    }

    /// Numeric counter; zero when absent.
    pub fn integer(&self, attr: &str) -> Result<i64, Error> {
        let (spec, value) = self.field(attr, FieldKind::Integer)?;
        match value {
            None | Some(Value::Null) => Ok(0),
            Some(v @ Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| self.field_type(spec, "an integer", v)),
            Some(other) => Err(self.field_type(spec, "an integer", other)),
        }
    }

    /// Floating-point value; zero when absent.
    pub fn float(&self, attr: &str) -> Result<f64, Error> {
        let (spec, value) = self.field(attr, FieldKind::Float)?;
        match value {
            None | Some(Value::Null) => Ok(0.0),
            Some(v @ Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| self.field_type(spec, "a number", v)),
            Some(other) => Err(self.field_type(spec, "a number", other)),
        }
    }

    /// Boolean flag; false when absent.
    pub fn flag(&self, attr: &str) -> Result<bool, Error> {
        let (spec, value) = self.field(attr, FieldKind::Flag)?;
        match value {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(self.field_type(spec, "a boolean", other)),
        }
    }

    /// Timestamp attribute; absent when missing.
    pub fn timestamp(&self, attr: &str) -> Result<Option<DateTime<FixedOffset>>, Error> {
        let (spec, value) = self.field(attr, FieldKind::Timestamp)?;
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(v @ Value::String(s)) => parse_timestamp(s)
                .map(Some)
                .ok_or_else(|| self.field_type(spec, "a Graph timestamp", v)),
            Some(other) => Err(self.field_type(spec, "a Graph timestamp", other)),
        }
    }

    /// List of text values; empty when absent.
    pub fn text_list(&self, attr: &str) -> Result<Vec<String>, Error> {
        let (spec, value) = self.field(attr, FieldKind::TextList)?;
        let items = match value {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(self.field_type(spec, "an array of strings", other)),
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(self.field_type(spec, "an array of strings", other)),
            })
            .collect()
    }

    /// Free-form JSON object passed through as-is; empty when absent.
    ///
    /// Used for fields with no declared shape, such as operating-hours
    /// tables.
    pub fn raw(&self, attr: &str) -> Result<Map<String, Value>, Error> {
        let (spec, value) = self.field(attr, FieldKind::Raw)?;
        match value {
            None | Some(Value::Null) => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(other) => Err(self.field_type(spec, "an object", other)),
        }
    }

    /// Price-range enumeration; unspecified when absent.
    pub fn price(&self, attr: &str) -> Result<PriceRange, Error> {
        let (spec, value) = self.field(attr, FieldKind::Price)?;
        match value {
            None | Some(Value::Null) => Ok(PriceRange::Unspecified),
            Some(Value::String(s)) => Ok(PriceRange::from_wire(s)),
            Some(other) => Err(self.field_type(spec, "a price-range string", other)),
        }
    }

    /// Nested entity decoded with its own mapping; absent when missing.
    pub fn nested<T: GraphObject>(&self, attr: &str) -> Result<Option<T>, Error> {
        let spec = self.spec(attr, "Nested")?;
        let FieldKind::Nested(nested_type) = spec.kind else {
            return Err(self.mismatch(attr, "Nested"));
        };
        self.check_nested_type::<T>(attr, nested_type)?;
        match self.obj.get(spec.wire) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode_object(value).map(Some),
        }
    }

    /// List of nested entities; empty when absent.
    pub fn nested_list<T: GraphObject>(&self, attr: &str) -> Result<Vec<T>, Error> {
        let spec = self.spec(attr, "NestedList")?;
        let FieldKind::NestedList(nested_type) = spec.kind else {
            return Err(self.mismatch(attr, "NestedList"));
        };
        self.check_nested_type::<T>(attr, nested_type)?;
        match self.obj.get(spec.wire) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => decode_list(value),
        }
    }

    fn spec(&self, attr: &str, requested: &'static str) -> Result<&'static FieldSpec, Error> {
        self.mapping
            .spec(attr)
            .ok_or_else(|| self.mismatch(attr, requested))
    }

    fn field(
        &self,
        attr: &str,
        kind: FieldKind,
    ) -> Result<(&'static FieldSpec, Option<&'a Value>), Error> {
        let spec = self.spec(attr, kind.name())?;
        if spec.kind != kind {
            return Err(self.mismatch(attr, kind.name()));
        }
        Ok((spec, self.obj.get(spec.wire)))
    }

    fn check_nested_type<T: GraphObject>(
        &self,
        attr: &str,
        nested_type: &'static str,
    ) -> Result<(), Error> {
        if !registry().contains(nested_type) {
            return Err(DecodeError::UnknownEntityType {
                object_type: self.mapping.object_type,
                nested: nested_type,
            }
            .into());
        }
        if T::mapping().object_type != nested_type {
            return Err(self.mismatch(attr, "the declared nested type"));
        }
        Ok(())
    }

    fn mismatch(&self, attr: &str, requested: &'static str) -> Error {
        DecodeError::MappingMismatch {
            object_type: self.mapping.object_type,
            attr: attr.to_string(),
            requested,
        }
        .into()
    }

    fn field_type(&self, spec: &'static FieldSpec, expected: &'static str, found: &Value) -> Error {
        DecodeError::FieldType {
            object_type: self.mapping.object_type,
            wire: spec.wire,
            expected,
            found: json_type_name(found),
        }
        .into()
    }
}

// Facebook's wire format first; RFC 3339 and bare dates as fallbacks.
fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().fixed_offset())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Page, Reference};
    use serde_json::json;

    #[test]
    fn decoding_is_deterministic() {
        let raw = json!({"id": "123", "name": "Espresso Hut", "category": "Coffee shop"});
        let a: Page = decode_object(&raw).unwrap();
        let b: Page = decode_object(&raw).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_fields_take_declared_defaults() {
        let raw = json!({"id": "123"});
        let page: Page = decode_object(&raw).unwrap();
        assert_eq!(page.id, "123");
        assert_eq!(page.name, "");
        assert_eq!(page.likes, 0);
        assert!(!page.can_post);
        assert!(page.category_list.is_empty());
        assert!(page.location.is_none());
        assert!(page.hours.is_empty());
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        let raw = json!({"id": "123", "name": "A page", "brand_new_field": {"x": 1}});
        let page: Page = decode_object(&raw).unwrap();
        assert_eq!(page.name, "A page");
    }

    #[test]
    fn numeric_id_renders_to_text() {
        let raw = json!({"id": 123456789, "name": "Michael Scott"});
        let reference: Reference = decode_object(&raw).unwrap();
        assert_eq!(reference.id, "123456789");
    }

    #[test]
    fn scalar_input_is_a_decode_error() {
        for raw in [json!("not an object"), json!(42), json!([1, 2, 3])] {
            let result: Result<Page, _> = decode_object(&raw);
            assert!(matches!(
                result,
                Err(Error::Decode(DecodeError::NotAnObject { .. }))
            ));
        }
    }

    #[test]
    fn type_mismatch_on_present_field_fails() {
        let raw = json!({"id": "123", "likes": "lots"});
        let result: Result<Page, _> = decode_object(&raw);
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::FieldType { wire: "likes", .. }))
        ));
    }

    #[test]
    fn nested_object_decodes_recursively() {
        let raw = json!({
            "id": "123",
            "name": "Espresso Hut",
            "location": {"city": "Scranton", "state": "PA", "latitude": 41.4, "longitude": -75.6}
        });
        let page: Page = decode_object(&raw).unwrap();
        let location = page.location.unwrap();
        assert_eq!(location.city, "Scranton");
        assert_eq!(location.state, "PA");
    }

    #[test]
    fn nested_mismatch_names_the_attribute() {
        let raw = json!({"cover": {"id": "9", "source": "http://img.example/cover.jpg"}});
        let view = FieldView {
            mapping: Page::mapping(),
            obj: raw.as_object().unwrap(),
        };
        // `cover` declares a cover photo, not a reference.
        let result: Result<Option<Reference>, _> = view.nested("cover");
        match result {
            Err(Error::Decode(DecodeError::MappingMismatch { attr, .. })) => {
                assert_eq!(attr, "cover");
            }
            other => panic!("expected a mapping mismatch, got {:?}", other),
        }
    }

    #[test]
    fn raw_field_passes_through_untransformed() {
        let raw = json!({
            "id": "123",
            "hours": {"mon_1_open": "09:00", "mon_1_close": "17:00"}
        });
        let page: Page = decode_object(&raw).unwrap();
        assert_eq!(page.hours["mon_1_open"], json!("09:00"));
    }

    #[test]
    fn list_decode_is_atomic() {
        let raw = json!([
            {"id": "1", "name": "ok"},
            "not an object",
            {"id": "3", "name": "also ok"}
        ]);
        let result: Result<Vec<Reference>, _> = decode_list(&raw);
        assert!(result.is_err());
    }

    #[test]
    fn graph_timestamp_formats_parse() {
        assert!(parse_timestamp("2014-03-30T14:30:00+0000").is_some());
        assert!(parse_timestamp("2014-03-30T14:30:00+00:00").is_some());
        assert!(parse_timestamp("2014-03-30").is_some());
        assert!(parse_timestamp("half past three").is_none());
    }
}
