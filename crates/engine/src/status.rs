//! Status extraction: turns a homework record into the chat message text.

use homework_common::error::ExtractionError;
use homework_common::types::{HomeworkRecord, HomeworkStatus};

/// Compose the notification text for a homework record.
///
/// Fails if `homework_name` or `status` is absent, or if the status is not one
/// of the known review states.
pub fn parse_status(record: &HomeworkRecord) -> Result<String, ExtractionError> {
    let homework_name = record
        .homework_name
        .as_deref()
        .ok_or(ExtractionError::MissingField("homework_name"))?;

    let raw_status = record
        .status
        .as_deref()
        .ok_or(ExtractionError::MissingField("status"))?;

    let status = HomeworkStatus::from_api(raw_status)
        .ok_or_else(|| ExtractionError::UnknownStatus(raw_status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}
