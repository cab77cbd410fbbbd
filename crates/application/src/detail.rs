//! Detail dialog for a single review log.

use crate::{ApplicationResult, SharedBackend};
use footprint_domain::AutoReviewLog;
use tracing::{instrument, warn};

/// Shows one log. Every open re-fetches; nothing is cached.
pub struct DetailDialog {
    backend: SharedBackend,
    record: Option<AutoReviewLog>,
}

impl DetailDialog {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            backend,
            record: None,
        }
    }

    /// Load the record and open. On failure the dialog stays closed.
    #[instrument(skip(self))]
    pub async fn open(&mut self, id: i64) -> ApplicationResult<&AutoReviewLog> {
        self.record = None;
        match self.backend.get_log(id).await {
            Ok(log) => Ok(self.record.insert(log)),
            Err(err) => {
                warn!(error = %err, "Failed to load review log");
                Err(err.into())
            }
        }
    }

    pub fn close(&mut self) {
        self.record = None;
    }

    pub fn is_open(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&AutoReviewLog> {
        self.record.as_ref()
    }
}

fn yes_no(flag: Option<bool>) -> String {
    match flag {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "-".to_string(),
    }
}

fn millis(ms: Option<u64>) -> String {
    ms.map(|ms| format!("{:.2}s", ms as f64 / 1000.0))
        .unwrap_or_else(|| "-".to_string())
}

fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Labelled fields of a log, in display order
pub fn detail_rows(log: &AutoReviewLog) -> Vec<(&'static str, String)> {
    vec![
        ("ID", log.id.to_string()),
        ("Task type", log.task_type.to_string()),
        ("Task ID", log.task_id.to_string()),
        ("User", format!("{} (#{})", log.username, log.user_id)),
        ("Week", log.week_count.to_string()),
        ("Date range", text(log.date_range.as_deref())),
        ("Content link", text(log.content_link.as_deref())),
        ("Screenshot", text(log.screenshot_url.as_deref())),
        ("OCR success", yes_no(Some(log.ocr_success))),
        ("OCR duration", millis(log.ocr_duration)),
        ("OCR text", text(log.ocr_text.as_deref())),
        ("AI verified", yes_no(Some(log.ai_verified))),
        (
            "AI confidence",
            log.ai_confidence
                .map(|c| format!("{:.1}%", c))
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "AI score",
            log.ai_score
                .map(|s| format!("{:.1}", s))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("AI comment", text(log.ai_comment.as_deref())),
        ("Retweet", yes_no(log.has_retweet)),
        ("Like", yes_no(log.has_like)),
        ("Comment", yes_no(log.has_comment)),
        ("Username match", yes_no(log.username_match)),
        ("AI duration", millis(log.ai_duration)),
        ("Review status", log.review_status.to_string()),
        ("Review message", text(log.review_message.as_deref())),
        ("Points added", yes_no(Some(log.points_added))),
        (
            "Points",
            log.points_value
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Created", log.created_at.clone()),
        ("Updated", text(log.updated_at.as_deref())),
        ("Error", text(log.error_message.as_deref())),
    ]
}
