//! Unread counter record.

use campus_records::{FieldDef, FieldType, OrderKey, Record, RecordSchema};

use crate::format::{format_count, parse_count};
use crate::tags;

/// Unread-count badge source. The server transmits the count as a string.
pub static UNREAD_COUNT: RecordSchema = RecordSchema {
    tag: tags::UNREAD_COUNT,
    name: "UnreadCount",
    fields: &[FieldDef::new("unread_count", "unread_count", FieldType::Str)],
    order_key: OrderKey::None,
};

/// The badge text for an unread counter.
///
/// The raw field may be negative or not a number at all; either way the
/// badge shows zero. Recomputed on every call.
pub fn display_count(counter: &Record) -> String {
    format_count(parse_count(counter.str("unread_count").unwrap_or("")))
}
