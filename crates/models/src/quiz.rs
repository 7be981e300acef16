//! Quiz submission clock record.

use campus_records::{FieldDef, FieldType, OrderKey, Record, RecordSchema};
use chrono::{DateTime, FixedOffset};

use crate::dates::parse_date;
use crate::tags;

/// Server clock for an in-progress timed quiz submission.
pub static SUBMISSION_TIME: RecordSchema = RecordSchema {
    tag: tags::SUBMISSION_TIME,
    name: "SubmissionTime",
    fields: &[
        FieldDef::new("end_at", "end_at", FieldType::DateTime),
        FieldDef::new("time_left", "time_left", FieldType::I32),
    ],
    order_key: OrderKey::None,
};

/// When the submission window closes; `None` if the server sent no usable
/// date.
pub fn end_date(time: &Record) -> Option<DateTime<FixedOffset>> {
    parse_date(time.date_raw("end_at")?)
}

/// Seconds remaining on the submission, never negative.
pub fn seconds_left(time: &Record) -> u32 {
    time.i32("time_left").unwrap_or(0).max(0) as u32
}
