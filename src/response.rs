//! Shape validation for the homework statuses payload

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("homework statuses payload is not a mapping")]
    NotAMapping,
    #[error("homework statuses payload is missing `homeworks`")]
    MissingHomeworks,
    #[error("`homeworks` is not a sequence")]
    HomeworksNotASequence,
}

/// Check the decoded payload and extract the homework entries.
///
/// Elements are returned unchanged; per-record validation happens when a
/// record is parsed.
pub fn check_response(payload: &Value) -> Result<&[Value], ShapeError> {
    let mapping = payload.as_object().ok_or(ShapeError::NotAMapping)?;
    let homeworks = mapping
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworks)?;
    let homeworks = homeworks
        .as_array()
        .ok_or(ShapeError::HomeworksNotASequence)?;
    Ok(homeworks.as_slice())
}
