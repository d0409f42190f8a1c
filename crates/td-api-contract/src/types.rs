//! Wire types for the TaskDeck REST service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::ApiContractError;

/// A unit of work with assignee, deadline, and completion flag
///
/// Identity is `id`, assigned by the remote store. `comment`, `time`, and
/// `status` default so rows written before those columns existed still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text_task: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub worker_id: i64,
    /// Deadline as submitted by a `datetime-local` input, e.g. `2025-05-01T12:30`
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub status: bool,
}

/// An assignable person; read-only on the client side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
}

/// Task creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, message = "Task text cannot be empty"))]
    pub text_task: String,
    #[serde(default)]
    pub comment: String,
    pub worker_id: i64,
    #[serde(default)]
    pub time: String,
}

/// Full-field task update request
///
/// Also serves as the scratch copy held by an edit session until commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, message = "Task text cannot be empty"))]
    pub text_task: String,
    #[serde(default)]
    pub comment: String,
    pub worker_id: i64,
    #[serde(default)]
    pub time: String,
}

/// Status-only task update request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: bool,
}

/// Languages the translation service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Kk,
    Ru,
}

impl Language {
    /// Every language the service knows, in menu order
    pub const ALL: [Language; 4] = [Language::En, Language::De, Language::Kk, Language::Ru];

    /// Two-letter wire code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Kk => "kk",
            Language::Ru => "ru",
        }
    }

    /// Display label shown in the language selector
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
            Language::Kk => "Қазақша",
            Language::Ru => "Русский",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ApiContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "kk" => Ok(Language::Kk),
            "ru" => Ok(Language::Ru),
            other => Err(ApiContractError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Bulk translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateTasksRequest {
    #[serde(rename = "sourceLanguage")]
    pub source_language: Language,
    #[serde(rename = "targetLanguage")]
    pub target_language: Language,
}

/// Acknowledgement payload for delete and translate endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

/// Payload returned when clearing the whole task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedCount {
    pub deleted: u64,
}

/// Error body the service attaches to failed requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_with_missing_optional_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id": 3, "text_task": "Ship release"}"#).unwrap();
        assert_eq!(task.id, 3);
        assert_eq!(task.comment, "");
        assert_eq!(task.time, "");
        assert!(!task.status);
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
            let back: Language = serde_json::from_str(&json).unwrap();
            assert_eq!(back, lang);
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn translate_request_uses_camel_case_keys() {
        let request = TranslateTasksRequest {
            source_language: Language::De,
            target_language: Language::Ru,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sourceLanguage"], "de");
        assert_eq!(json["targetLanguage"], "ru");
    }

    #[test]
    fn error_response_parses_service_payload() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(body.error, "boom");
    }
}
