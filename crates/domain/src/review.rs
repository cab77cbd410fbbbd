//! Automated review logs for weekly-challenge tasks.
//!
//! A log is produced by the backend's verification pipeline (screenshot OCR
//! followed by an AI assessment). Administrators can only change its review
//! outcome; everything else is read-only here.

use crate::errors::ValidationError;
use crate::nullable::or_default;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ReviewStatus {
    /// Awaiting a decision
    #[default]
    Pending,
    /// Points may be granted
    Approved,
    /// Attempt rejected
    Rejected,
}

impl ReviewStatus {
    /// All statuses in wire order
    pub fn all() -> &'static [ReviewStatus] {
        &[Self::Pending, Self::Approved, Self::Rejected]
    }

    /// Wire code
    pub fn code(&self) -> i64 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }

    /// Label used in tables
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl TryFrom<i64> for ReviewStatus {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            other => Err(ValidationError::UnknownReviewStatus(other)),
        }
    }
}

impl From<ReviewStatus> for i64 {
    fn from(status: ReviewStatus) -> Self {
        status.code()
    }
}

impl FromStr for ReviewStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "pending" => Ok(Self::Pending),
            "1" | "approved" => Ok(Self::Approved),
            "2" | "rejected" => Ok(Self::Rejected),
            other => Err(ValidationError::field(
                "reviewStatus",
                format!("expected pending, approved or rejected, got {:?}", other),
            )),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Weekly-challenge task family. Each family has its own review endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Social posting tasks (retweet/like/comment checks)
    Communication,
    /// Community participation tasks
    Community,
}

impl TaskType {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::Community => "community",
        }
    }
}

impl FromStr for TaskType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "communication" => Ok(Self::Communication),
            "community" => Ok(Self::Community),
            other => Err(ValidationError::UnknownTaskType(other.to_string())),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One automated verification attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoReviewLog {
    pub id: i64,
    pub task_type: TaskType,
    pub task_id: i64,
    pub user_id: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub username: String,

    // Task context
    #[serde(default, deserialize_with = "or_default")]
    pub week_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_link: Option<String>,

    // OCR evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub ocr_success: bool,
    /// Milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_duration: Option<u64>,

    // AI assessment
    #[serde(default, deserialize_with = "or_default")]
    pub ai_verified: bool,
    /// Percentage, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_retweet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_like: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_comment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_match: Option<bool>,
    /// Milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_duration: Option<u64>,

    // Outcome
    #[serde(default, deserialize_with = "or_default")]
    pub review_status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_message: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub points_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_value: Option<i64>,

    #[serde(default, deserialize_with = "or_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AutoReviewLog {
    /// Whether the pipeline recorded an error for this attempt
    pub fn has_error(&self) -> bool {
        self.error_message
            .as_deref()
            .map(|m| !m.trim().is_empty())
            .unwrap_or(false)
    }

    /// Review message or an empty string
    pub fn review_message_or_empty(&self) -> &str {
        self.review_message.as_deref().unwrap_or("")
    }
}

/// Body of a "modify review" request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub task_id: i64,
    pub review_status: ReviewStatus,
    pub review_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_status_wire_format() {
        assert_eq!(serde_json::to_string(&ReviewStatus::Approved).unwrap(), "1");
        let status: ReviewStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, ReviewStatus::Rejected);
        assert!(serde_json::from_str::<ReviewStatus>("7").is_err());
    }

    #[test]
    fn test_review_status_from_str() {
        assert_eq!("approved".parse::<ReviewStatus>().unwrap(), ReviewStatus::Approved);
        assert_eq!("0".parse::<ReviewStatus>().unwrap(), ReviewStatus::Pending);
        assert!("maybe".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_task_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaskType::Communication).unwrap(),
            "\"communication\""
        );
        assert_eq!("Community".parse::<TaskType>().unwrap(), TaskType::Community);
    }

    #[test]
    fn test_log_tolerates_null_columns() {
        let body = r#"{
            "records": [
                {"id": 1, "taskType": "community", "taskId": 10, "userId": 5,
                 "username": "alice", "weekCount": 2, "ocrSuccess": true,
                 "aiVerified": true, "reviewStatus": 1, "pointsAdded": true,
                 "createdAt": "2024-05-01 10:00:00"},
                {"id": 2, "taskType": "communication", "taskId": 11, "userId": 6,
                 "username": null, "weekCount": null, "ocrSuccess": null,
                 "aiVerified": null, "reviewStatus": null, "pointsAdded": null,
                 "createdAt": null, "aiScore": null}
            ],
            "total": 2, "current": 1, "size": 20
        }"#;

        let page: crate::PageData<AutoReviewLog> = serde_json::from_str(body).unwrap();
        assert_eq!(page.records.len(), 2);

        let sparse = &page.records[1];
        assert_eq!(sparse.username, "");
        assert_eq!(sparse.week_count, 0);
        assert!(!sparse.ocr_success);
        assert!(!sparse.ai_verified);
        assert_eq!(sparse.review_status, ReviewStatus::Pending);
        assert!(!sparse.points_added);
        assert!(sparse.created_at.is_empty());
        assert!(sparse.ai_score.is_none());
    }

    #[test]
    fn test_review_update_camel_case() {
        let update = ReviewUpdate {
            task_id: 9,
            review_status: ReviewStatus::Rejected,
            review_message: "blurry screenshot".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["taskId"], 9);
        assert_eq!(json["reviewStatus"], 2);
        assert_eq!(json["reviewMessage"], "blurry screenshot");
    }
}
