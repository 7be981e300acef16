//! Course nickname record.

use campus_records::{FieldDef, FieldType, OrderKey, RecordSchema};

use crate::tags;

/// A user-assigned nickname for a course.
///
/// Nickname lists render alphabetically by course name, so the shape
/// declares a string sort key.
pub static COURSE_NICKNAME: RecordSchema = RecordSchema {
    tag: tags::COURSE_NICKNAME,
    name: "CourseNickname",
    fields: &[
        FieldDef::new("course_id", "course_id", FieldType::I64),
        FieldDef::new("name", "name", FieldType::Str),
        FieldDef::new("nickname", "nickname", FieldType::Str),
    ],
    order_key: OrderKey::Str("name"),
};
