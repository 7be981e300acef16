//! Navigation placement record.

use campus_records::{FieldDef, FieldDefault, FieldType, OrderKey, RecordSchema};

use crate::tags;

/// Where a tool or tab surfaces in course navigation.
pub static PLACEMENT: RecordSchema = RecordSchema {
    tag: tags::PLACEMENT,
    name: "Placement",
    fields: &[
        FieldDef::new("id", "id", FieldType::Str),
        FieldDef::new("label", "label", FieldType::Str),
        FieldDef::with_default(
            "visibility",
            "visibility",
            FieldType::Str,
            FieldDefault::Str("public"),
        ),
        FieldDef::new("position", "position", FieldType::I32),
        FieldDef::new("hidden", "hidden", FieldType::Bool),
    ],
    order_key: OrderKey::None,
};
