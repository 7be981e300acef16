//! Type tags for every record shape.
//!
//! Tags are part of the transfer format (they prefix nested record bodies),
//! so values are fixed; add new shapes with new tags, never renumber.

use campus_records::TypeTag;

pub const COURSE_NICKNAME: TypeTag = 1;

pub const POLL_CHOICE: TypeTag = 10;
pub const POLL_CHOICE_PAGE: TypeTag = 11;

pub const MODULE_OBJECT: TypeTag = 20;
pub const MODULE_ITEM: TypeTag = 21;
pub const MODULE_ITEM_WRAPPER: TypeTag = 22;
pub const MODULE_ITEM_SEQUENCE: TypeTag = 23;

pub const PAIRING_CODE: TypeTag = 30;
pub const STUDENT_LINK: TypeTag = 31;

pub const GRADING_PERIOD: TypeTag = 40;
pub const GRADING_PERIOD_PAGE: TypeTag = 41;

pub const PLACEMENT: TypeTag = 50;

pub const UNREAD_COUNT: TypeTag = 60;

pub const SUBMISSION_TIME: TypeTag = 70;
