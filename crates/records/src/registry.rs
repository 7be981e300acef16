//! Tagged schema registry.

use indexmap::IndexMap;
use thiserror::Error;

use crate::schema::{RecordSchema, TypeTag};

/// Error type for schema registration and startup validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate type tag {tag}: {existing} and {incoming}")]
    DuplicateTag {
        tag: TypeTag,
        existing: &'static str,
        incoming: &'static str,
    },
    #[error("schema {schema} field `{field}` references unregistered type tag {tag}")]
    UnresolvedTag {
        schema: &'static str,
        field: &'static str,
        tag: TypeTag,
    },
}

/// Resolves type tags to schemas.
///
/// Nested and listed record fields name their shape by tag, so encoding and
/// decoding never inspect a live value's runtime type. The registry is
/// populated once at startup and validated before any decode traffic; an
/// unresolved tag is a configuration error, not a runtime condition.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<TypeTag, &'static RecordSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every schema, then validates cross-references.
    pub fn build(schemas: &[&'static RecordSchema]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for schema in schemas {
            registry.register(schema)?;
        }
        registry.validate()?;
        Ok(registry)
    }

    pub fn register(&mut self, schema: &'static RecordSchema) -> Result<(), RegistryError> {
        if let Some(existing) = self.schemas.get(&schema.tag) {
            return Err(RegistryError::DuplicateTag {
                tag: schema.tag,
                existing: existing.name,
                incoming: schema.name,
            });
        }
        self.schemas.insert(schema.tag, schema);
        Ok(())
    }

    pub fn resolve(&self, tag: TypeTag) -> Option<&'static RecordSchema> {
        self.schemas.get(&tag).copied()
    }

    /// Checks that every nested shape tag of every registered schema
    /// resolves within this registry.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for schema in self.schemas.values() {
            for field in schema.fields {
                if let Some(tag) = field.ty.nested_tag() {
                    if !self.schemas.contains_key(&tag) {
                        return Err(RegistryError::UnresolvedTag {
                            schema: schema.name,
                            field: field.name,
                            tag,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldType, OrderKey};

    static LEAF: RecordSchema = RecordSchema {
        tag: 910,
        name: "Leaf",
        fields: &[FieldDef::new("id", "id", FieldType::I64)],
        order_key: OrderKey::None,
    };

    static BRANCH: RecordSchema = RecordSchema {
        tag: 911,
        name: "Branch",
        fields: &[FieldDef::new("leaves", "leaves", FieldType::List(910))],
        order_key: OrderKey::None,
    };

    static DANGLING: RecordSchema = RecordSchema {
        tag: 912,
        name: "Dangling",
        fields: &[FieldDef::new("leaf", "leaf", FieldType::Record(999))],
        order_key: OrderKey::None,
    };

    #[test]
    fn test_build_and_resolve() {
        let registry = SchemaRegistry::build(&[&LEAF, &BRANCH]).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(910).unwrap().name, "Leaf");
        assert!(registry.resolve(999).is_none());
    }

    #[test]
    fn test_duplicate_tag() {
        let err = SchemaRegistry::build(&[&LEAF, &LEAF]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTag { tag: 910, .. }));
    }

    #[test]
    fn test_unresolved_nested_tag() {
        let err = SchemaRegistry::build(&[&DANGLING]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnresolvedTag {
                schema: "Dangling",
                field: "leaf",
                tag: 999,
            }
        );
    }
}
