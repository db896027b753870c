//! Response validation, done once at the boundary.
//!
//! Only the shape of the response is enforced: a mapping holding a `homeworks`
//! list. Elements are read leniently into `HomeworkRecord`s, so an odd value in
//! a field nobody needs, or in an entry that is never reported, cannot fail
//! the cycle.

use serde_json::Value;

use homework_common::error::ValidationError;
use homework_common::types::HomeworkRecord;

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// Validate a decoded API response and return its homework list in server order.
///
/// An empty list is valid and means there is nothing new since the cursor.
pub fn validate(payload: &Value) -> Result<Vec<HomeworkRecord>, ValidationError> {
    let map = payload.as_object().ok_or(ValidationError::NotAMapping)?;

    let homeworks = map
        .get(HOMEWORKS_KEY)
        .ok_or(ValidationError::MissingKey(HOMEWORKS_KEY))?
        .as_array()
        .ok_or(ValidationError::WrongType(HOMEWORKS_KEY))?;

    Ok(homeworks.iter().map(read_record).collect())
}

/// Server-side timestamp of the response, if present and a non-negative integer.
pub fn current_date(payload: &Value) -> Option<u64> {
    payload.get(CURRENT_DATE_KEY).and_then(Value::as_u64)
}

// Absent and wrongly typed fields both read as `None`; a non-object entry
// yields an empty record.
fn read_record(raw: &Value) -> HomeworkRecord {
    let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);

    HomeworkRecord {
        homework_name: text("homework_name"),
        status: text("status"),
        id: raw.get("id").and_then(Value::as_u64),
        lesson_name: text("lesson_name"),
        reviewer_comment: text("reviewer_comment"),
        date_updated: text("date_updated"),
    }
}
