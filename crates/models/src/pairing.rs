//! Parent/student linkage records.

use campus_records::{FieldDef, FieldType, OrderKey, Record, RecordSchema};
use chrono::{DateTime, FixedOffset};

use crate::dates::parse_date;
use crate::tags;

/// A one-time code a student generates for an observer to pair with.
pub static PAIRING_CODE: RecordSchema = RecordSchema {
    tag: tags::PAIRING_CODE,
    name: "PairingCode",
    fields: &[
        FieldDef::new("code", "code", FieldType::Str),
        FieldDef::new("expires_at", "expires_at", FieldType::DateTime),
    ],
    order_key: OrderKey::None,
};

/// An established observer/student link.
pub static STUDENT_LINK: RecordSchema = RecordSchema {
    tag: tags::STUDENT_LINK,
    name: "StudentLink",
    fields: &[
        FieldDef::new("parent_id", "parent_id", FieldType::Str),
        FieldDef::new("student_id", "student_id", FieldType::I64),
        FieldDef::new("student_name", "student_name", FieldType::Str),
    ],
    order_key: OrderKey::None,
};

/// When the pairing code stops being redeemable; `None` if the server sent
/// no usable date.
pub fn expires_at(code: &Record) -> Option<DateTime<FixedOffset>> {
    parse_date(code.date_raw("expires_at")?)
}
