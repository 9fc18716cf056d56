//! Process-wide mapping registry.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::FieldMapping;
use crate::objects::ALL_MAPPINGS;

/// Immutable registry of every entity type's field mapping.
///
/// Populated once on first use from the static tables in
/// [`crate::objects`] and read-only thereafter; lookups are safe from
/// any thread.
#[derive(Debug)]
pub struct MappingRegistry {
    by_type: HashMap<&'static str, &'static FieldMapping>,
}

impl MappingRegistry {
    fn build(mappings: &[&'static FieldMapping]) -> Self {
        let mut by_type = HashMap::with_capacity(mappings.len());
        for mapping in mappings {
            let previous = by_type.insert(mapping.object_type, *mapping);
            debug_assert!(
                previous.is_none(),
                "duplicate mapping for entity type '{}'",
                mapping.object_type
            );
        }
        Self { by_type }
    }

    /// Look up the mapping for an entity-type key.
    pub fn mapping(&self, object_type: &str) -> Option<&'static FieldMapping> {
        self.by_type.get(object_type).copied()
    }

    /// Whether the registry knows the entity type.
    pub fn contains(&self, object_type: &str) -> bool {
        self.by_type.contains_key(object_type)
    }

    /// The registered entity-type keys.
    pub fn object_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_type.keys().copied()
    }
}

static REGISTRY: LazyLock<MappingRegistry> =
    LazyLock::new(|| MappingRegistry::build(ALL_MAPPINGS));

/// The process-wide mapping registry.
pub fn registry() -> &'static MappingRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldKind;

    #[test]
    fn registry_contains_all_declared_types() {
        for mapping in ALL_MAPPINGS {
            assert!(
                registry().contains(mapping.object_type),
                "missing '{}'",
                mapping.object_type
            );
        }
    }

    #[test]
    fn nested_references_resolve() {
        for mapping in ALL_MAPPINGS {
            for spec in mapping.fields {
                if let FieldKind::Nested(nested) | FieldKind::NestedList(nested) = spec.kind {
                    assert!(
                        registry().contains(nested),
                        "'{}' references unregistered type '{}'",
                        mapping.object_type,
                        nested
                    );
                }
            }
        }
    }

    #[test]
    fn lookup_by_key() {
        let page = registry().mapping("page").unwrap();
        assert_eq!(page.object_type, "page");
        assert!(registry().mapping("no-such-type").is_none());
    }
}
