//! Startup registry of every record shape.

use campus_records::{RegistryError, SchemaRegistry};

use crate::{course, grading, modules, navigation, pairing, polls, quiz, unread};

/// Builds the validated registry of all campus record shapes.
///
/// Call once at startup. An error here means a schema declaration
/// references a shape that was never registered; it is a deployment
/// defect, not a runtime condition.
pub fn registry() -> Result<SchemaRegistry, RegistryError> {
    SchemaRegistry::build(&[
        &course::COURSE_NICKNAME,
        &polls::POLL_CHOICE,
        &polls::POLL_CHOICE_PAGE,
        &modules::MODULE_OBJECT,
        &modules::MODULE_ITEM,
        &modules::MODULE_ITEM_WRAPPER,
        &modules::MODULE_ITEM_SEQUENCE,
        &pairing::PAIRING_CODE,
        &pairing::STUDENT_LINK,
        &grading::GRADING_PERIOD,
        &grading::GRADING_PERIOD_PAGE,
        &navigation::PLACEMENT,
        &unread::UNREAD_COUNT,
        &quiz::SUBMISSION_TIME,
    ])
}
