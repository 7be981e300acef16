//! Module progression records.

use campus_records::{FieldDef, FieldType, OrderKey, Record, RecordSchema};

use crate::tags;

/// A course module.
pub static MODULE_OBJECT: RecordSchema = RecordSchema {
    tag: tags::MODULE_OBJECT,
    name: "ModuleObject",
    fields: &[
        FieldDef::new("id", "id", FieldType::I64),
        FieldDef::new("name", "name", FieldType::Str),
        FieldDef::new("position", "position", FieldType::I32),
    ],
    order_key: OrderKey::None,
};

/// One item within a module.
pub static MODULE_ITEM: RecordSchema = RecordSchema {
    tag: tags::MODULE_ITEM,
    name: "ModuleItem",
    fields: &[
        FieldDef::new("id", "id", FieldType::I64),
        FieldDef::new("module_id", "module_id", FieldType::I64),
        FieldDef::new("title", "title", FieldType::Str),
        FieldDef::new("type", "type", FieldType::Str),
        FieldDef::new("position", "position", FieldType::I32),
    ],
    order_key: OrderKey::None,
};

/// Neighborhood of one module item: the previous, current, and next items,
/// each absent at the ends of the sequence.
pub static MODULE_ITEM_WRAPPER: RecordSchema = RecordSchema {
    tag: tags::MODULE_ITEM_WRAPPER,
    name: "ModuleItemWrapper",
    fields: &[
        FieldDef::new("prev", "prev", FieldType::Record(tags::MODULE_ITEM)),
        FieldDef::new("current", "current", FieldType::Record(tags::MODULE_ITEM)),
        FieldDef::new("next", "next", FieldType::Record(tags::MODULE_ITEM)),
    ],
    order_key: OrderKey::None,
};

/// Response to an item-sequence lookup: the matched item neighborhoods and
/// the modules they belong to.
pub static MODULE_ITEM_SEQUENCE: RecordSchema = RecordSchema {
    tag: tags::MODULE_ITEM_SEQUENCE,
    name: "ModuleItemSequence",
    fields: &[
        FieldDef::new("items", "items", FieldType::List(tags::MODULE_ITEM_WRAPPER)),
        FieldDef::new("modules", "modules", FieldType::List(tags::MODULE_OBJECT)),
    ],
    order_key: OrderKey::None,
};

pub fn items(sequence: &Record) -> &[Record] {
    sequence.list("items").unwrap_or(&[])
}

pub fn modules(sequence: &Record) -> &[Record] {
    sequence.list("modules").unwrap_or(&[])
}

pub fn prev(wrapper: &Record) -> Option<&Record> {
    wrapper.record("prev")
}

pub fn current(wrapper: &Record) -> Option<&Record> {
    wrapper.record("current")
}

pub fn next(wrapper: &Record) -> Option<&Record> {
    wrapper.record("next")
}
