//! Domain types for homework review statuses

use compact_str::{CompactString, ToCompactString, format_compact};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Candidate message for a cycle that found nothing under review.
pub const NO_ACTIVE_WORK: &str = "Нет активных работ.";

/// Review outcome for a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// Fixed localized sentence for this verdict
    pub fn text(self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// A single entry of the `homeworks` sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: CompactString,
    pub status: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("homework record is missing field `{0}`")]
    MissingField(&'static str),
    #[error("unknown review verdict `{0}`")]
    UnknownVerdict(CompactString),
}

impl HomeworkRecord {
    /// Parse a single element of the `homeworks` sequence.
    ///
    /// An absent or non-string `status` is reported the same way as a value
    /// outside the known verdict set.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let homework_name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingField("homework_name"))?;

        let status = value
            .get("status")
            .ok_or_else(|| RecordError::UnknownVerdict("<absent>".into()))?;
        let status: Verdict = serde_json::from_value(status.clone())
            .map_err(|_| RecordError::UnknownVerdict(raw_verdict(status)))?;

        Ok(Self {
            homework_name: homework_name.into(),
            status,
        })
    }

    /// Full human-readable sentence including the homework name.
    ///
    /// The poll loop sends the bare verdict text instead; both renderings
    /// are kept as separate operations because behavior differs by call
    /// site.
    pub fn full_message(&self) -> CompactString {
        format_compact!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.text()
        )
    }
}

fn raw_verdict(value: &Value) -> CompactString {
    match value.as_str() {
        Some(s) => s.into(),
        None => value.to_compact_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_known_verdicts() {
        for (code, verdict) in [
            ("approved", Verdict::Approved),
            ("reviewing", Verdict::Reviewing),
            ("rejected", Verdict::Rejected),
        ] {
            let record =
                HomeworkRecord::from_value(&json!({"homework_name": "hw1", "status": code}))
                    .unwrap();
            assert_eq!(record.status, verdict);
            assert_eq!(record.homework_name, "hw1");
        }
    }

    #[test]
    fn verdict_texts_are_fixed() {
        assert_eq!(
            Verdict::Approved.text(),
            "Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(Verdict::Reviewing.text(), "Работа взята на проверку ревьюером.");
        assert_eq!(
            Verdict::Rejected.text(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = HomeworkRecord::from_value(&json!({"status": "approved"})).unwrap_err();
        assert_eq!(err, RecordError::MissingField("homework_name"));
    }

    #[test]
    fn unknown_verdict_is_an_error() {
        let err =
            HomeworkRecord::from_value(&json!({"homework_name": "hw1", "status": "in_progress"}))
                .unwrap_err();
        assert_eq!(err, RecordError::UnknownVerdict("in_progress".into()));
    }

    #[test]
    fn absent_status_is_an_unknown_verdict() {
        let err = HomeworkRecord::from_value(&json!({"homework_name": "hw1"})).unwrap_err();
        assert!(matches!(err, RecordError::UnknownVerdict(_)));
    }

    #[test]
    fn non_string_status_is_an_unknown_verdict() {
        let err = HomeworkRecord::from_value(&json!({"homework_name": "hw1", "status": 7}))
            .unwrap_err();
        assert_eq!(err, RecordError::UnknownVerdict("7".into()));
    }

    #[test]
    fn full_message_includes_name_and_verdict_text() {
        let record = HomeworkRecord {
            homework_name: "hw1".into(),
            status: Verdict::Reviewing,
        };
        assert_eq!(
            record.full_message(),
            "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером."
        );
    }
}
