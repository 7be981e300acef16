//! Declarative record schemas.
//!
//! A [`RecordSchema`] is the single source of truth for one record shape:
//! the ordered field list doubles as the binary wire order, and each field
//! carries the external JSON key it is decoded from. Schemas are declared
//! as `static` data and shared; nothing about a schema changes at runtime.

/// Identifies one record shape. Travels on the wire in front of nested
/// record bodies so the decoder can dispatch without runtime type
/// discovery.
pub type TypeTag = u16;

/// Semantic type of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 64-bit signed integer.
    I64,
    /// 32-bit signed integer.
    I32,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Str,
    /// Date/time, transported as a string and parsed on demand.
    DateTime,
    /// Nested record of the tagged shape; nullable.
    Record(TypeTag),
    /// Ordered sequence of records of the tagged shape.
    List(TypeTag),
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::DateTime => "datetime",
            Self::Record(_) => "record",
            Self::List(_) => "list",
        }
    }

    /// The nested shape tag, for `Record` and `List` fields.
    pub fn nested_tag(self) -> Option<TypeTag> {
        match self {
            Self::Record(tag) | Self::List(tag) => Some(tag),
            _ => None,
        }
    }
}

/// Default policy applied when a field is absent from the payload or the
/// payload value is type-incompatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// The type's zero value: 0, false, empty string, absent nested record,
    /// empty sequence.
    TypeZero,
    /// A fixed integer default (for `I64`/`I32` fields).
    Int(i64),
    /// A fixed boolean default.
    Bool(bool),
    /// A fixed string default.
    Str(&'static str),
}

/// One declared field: in-memory name, external JSON key, semantic type,
/// and default policy. Position within [`RecordSchema::fields`] is the
/// binary wire order.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub key: &'static str,
    pub ty: FieldType,
    pub default: FieldDefault,
}

impl FieldDef {
    pub const fn new(name: &'static str, key: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            key,
            ty,
            default: FieldDefault::TypeZero,
        }
    }

    pub const fn with_default(
        name: &'static str,
        key: &'static str,
        ty: FieldType,
        default: FieldDefault,
    ) -> Self {
        Self {
            name,
            key,
            ty,
            default,
        }
    }
}

/// Optional intrinsic ordering for a record shape.
///
/// `None` means the shape has no intrinsic order and containers keep
/// insertion/arrival order; the other variants name the field that supplies
/// the derived sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    None,
    /// Order by a `DateTime` field, parsed on demand.
    Date(&'static str),
    /// Order by a `Str` field.
    Str(&'static str),
}

/// The declarative description of one record shape.
#[derive(Debug)]
pub struct RecordSchema {
    pub tag: TypeTag,
    pub name: &'static str,
    /// Declared fields; slice order is the wire order.
    pub fields: &'static [FieldDef],
    pub order_key: OrderKey,
}

impl RecordSchema {
    /// Index of the named field within the wire order.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
