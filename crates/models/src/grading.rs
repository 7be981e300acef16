//! Grading period records.

use campus_records::{FieldDef, FieldType, OrderKey, Record, RecordSchema};
use chrono::{DateTime, FixedOffset};

use crate::dates::parse_date;
use crate::tags;

/// One grading period of a course or term.
///
/// Period pickers render chronologically, so the shape orders by its start
/// date.
pub static GRADING_PERIOD: RecordSchema = RecordSchema {
    tag: tags::GRADING_PERIOD,
    name: "GradingPeriod",
    fields: &[
        FieldDef::new("id", "id", FieldType::I64),
        FieldDef::new("title", "title", FieldType::Str),
        FieldDef::new("start_date", "start_date", FieldType::DateTime),
        FieldDef::new("end_date", "end_date", FieldType::DateTime),
    ],
    order_key: OrderKey::Date("start_date"),
};

/// Grading-period response wrapper.
pub static GRADING_PERIOD_PAGE: RecordSchema = RecordSchema {
    tag: tags::GRADING_PERIOD_PAGE,
    name: "GradingPeriodPage",
    fields: &[FieldDef::new(
        "grading_periods",
        "grading_periods",
        FieldType::List(tags::GRADING_PERIOD),
    )],
    order_key: OrderKey::None,
};

pub fn periods(page: &Record) -> &[Record] {
    page.list("grading_periods").unwrap_or(&[])
}

pub fn start_date(period: &Record) -> Option<DateTime<FixedOffset>> {
    parse_date(period.date_raw("start_date")?)
}

pub fn end_date(period: &Record) -> Option<DateTime<FixedOffset>> {
    parse_date(period.date_raw("end_date")?)
}
