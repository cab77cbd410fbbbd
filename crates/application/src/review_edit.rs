//! Review-edit dialog.
//!
//! Seeded from a list row, the dialog keeps an `original` and a `current`
//! draft of the review outcome. Submission is refused while nothing changed,
//! while a request is in flight, or while the success state is showing.
//! After a successful submit the dialog waits out the success window,
//! closes and reloads the list at a page that still exists.

use crate::config::ControllerConfig;
use crate::log_list::LogListController;
use crate::{ApplicationError, ApplicationResult, SharedBackend};
use footprint_common::pagination::refetch_page_after_edit;
use footprint_domain::{AutoReviewLog, ReviewStatus, ReviewUpdate, TaskType};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Editable part of a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub review_status: ReviewStatus,
    pub review_message: String,
}

impl ReviewDraft {
    fn from_log(log: &AutoReviewLog) -> Self {
        Self {
            review_status: log.review_status,
            review_message: log.review_message_or_empty().to_string(),
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Page the list was reloaded at
    pub refetch_page: u32,
    /// Whether the reload succeeded; a failed reload leaves its error on the list
    pub list_reloaded: bool,
}

pub struct ReviewEditDialog {
    backend: SharedBackend,
    log_id: i64,
    task_id: i64,
    task_type: TaskType,
    original: ReviewDraft,
    current: ReviewDraft,
    submitting: bool,
    success_visible: bool,
    open: bool,
    success_window: Duration,
}

impl ReviewEditDialog {
    pub fn from_log(backend: SharedBackend, log: &AutoReviewLog, config: &ControllerConfig) -> Self {
        let draft = ReviewDraft::from_log(log);
        Self {
            backend,
            log_id: log.id,
            task_id: log.task_id,
            task_type: log.task_type,
            original: draft.clone(),
            current: draft,
            submitting: false,
            success_visible: false,
            open: true,
            success_window: config.success_window,
        }
    }

    pub fn log_id(&self) -> i64 {
        self.log_id
    }

    pub fn original(&self) -> &ReviewDraft {
        &self.original
    }

    pub fn current(&self) -> &ReviewDraft {
        &self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn set_status(&mut self, status: ReviewStatus) {
        self.current.review_status = status;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.current.review_message = message.into();
    }

    /// True when the status differs, or the trimmed message differs
    pub fn has_changes(&self) -> bool {
        self.current.review_status != self.original.review_status
            || self.current.review_message.trim() != self.original.review_message.trim()
    }

    pub fn can_submit(&self) -> bool {
        self.open && self.has_changes() && !self.submitting && !self.success_visible
    }

    /// Request body for the current draft
    pub fn update(&self) -> ReviewUpdate {
        ReviewUpdate {
            task_id: self.task_id,
            review_status: self.current.review_status,
            review_message: self.current.review_message.trim().to_string(),
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.success_visible = false;
    }

    /// Submit the draft and reload `list` afterwards.
    ///
    /// Refused without a request when [`can_submit`](Self::can_submit) is
    /// false. On failure the dialog stays open with the draft intact.
    #[instrument(skip(self, list), fields(log_id = self.log_id, task_type = %self.task_type))]
    pub async fn submit(&mut self, list: &mut LogListController) -> ApplicationResult<SubmitOutcome> {
        if !self.can_submit() {
            return Err(ApplicationError::NotReady(
                "nothing to submit: change the status or message first".to_string(),
            ));
        }

        let update = self.update();
        self.submitting = true;
        let result = self.backend.submit_review(self.task_type, &update).await;
        self.submitting = false;

        if let Err(err) = result {
            warn!(error = %err, "Review update rejected");
            return Err(err.into());
        }

        info!(status = %update.review_status, "Review updated");
        self.success_visible = true;
        if !self.success_window.is_zero() {
            tokio::time::sleep(self.success_window).await;
        }
        self.close();

        let total = self.projected_total(list);
        let refetch_page = refetch_page_after_edit(list.current(), total, list.page_size());
        let list_reloaded = list.fetch_logs(refetch_page).await.is_ok();

        Ok(SubmitOutcome {
            refetch_page,
            list_reloaded,
        })
    }

    /// List total after the edit. A row whose new status no longer matches
    /// the active status filter drops out of the list.
    fn projected_total(&self, list: &LogListController) -> u64 {
        match list.filters().review_status {
            Some(filter)
                if filter == self.original.review_status
                    && filter != self.current.review_status =>
            {
                list.total().saturating_sub(1)
            }
            _ => list.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_testing::{AutoReviewLogBuilder, MockBackend};
    use std::sync::Arc;

    fn dialog(status: ReviewStatus, message: &str) -> ReviewEditDialog {
        let log = AutoReviewLogBuilder::new()
            .with_status(status)
            .with_message(message)
            .build();
        ReviewEditDialog::from_log(Arc::new(MockBackend::new()), &log, &ControllerConfig::default())
    }

    #[test]
    fn test_has_changes_tracks_status_and_trimmed_message() {
        let mut dialog = dialog(ReviewStatus::Approved, "ok");
        assert!(!dialog.has_changes());

        dialog.set_status(ReviewStatus::Rejected);
        assert!(dialog.has_changes());

        dialog.set_status(ReviewStatus::Approved);
        dialog.set_message("  ok ");
        assert!(!dialog.has_changes());

        dialog.set_message("ok, double-checked");
        assert!(dialog.has_changes());
        assert!(dialog.can_submit());
    }

    #[test]
    fn test_update_trims_message() {
        let mut dialog = dialog(ReviewStatus::Pending, "");
        dialog.set_status(ReviewStatus::Rejected);
        dialog.set_message("  wrong account ");
        let update = dialog.update();
        assert_eq!(update.review_message, "wrong account");
        assert_eq!(update.review_status, ReviewStatus::Rejected);
    }
}
