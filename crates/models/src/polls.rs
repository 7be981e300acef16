//! Poll choice records.

use campus_records::{FieldDef, FieldType, OrderKey, Record, RecordSchema};

use crate::tags;

/// One answer option of a poll question.
pub static POLL_CHOICE: RecordSchema = RecordSchema {
    tag: tags::POLL_CHOICE,
    name: "PollChoice",
    fields: &[
        FieldDef::new("id", "id", FieldType::I64),
        FieldDef::new("is_correct", "is_correct", FieldType::Bool),
        FieldDef::new("text", "text", FieldType::Str),
        FieldDef::new("position", "position", FieldType::I32),
    ],
    order_key: OrderKey::None,
};

/// Paged poll-choice response wrapper.
pub static POLL_CHOICE_PAGE: RecordSchema = RecordSchema {
    tag: tags::POLL_CHOICE_PAGE,
    name: "PollChoicePage",
    fields: &[FieldDef::new(
        "poll_choices",
        "poll_choices",
        FieldType::List(tags::POLL_CHOICE),
    )],
    order_key: OrderKey::None,
};

/// The choices of a page, in arrival order.
pub fn choices(page: &Record) -> &[Record] {
    page.list("poll_choices").unwrap_or(&[])
}
