//! Review log list controller.
//!
//! Holds the current page, filters and last result of the review log list.
//! Every fetch takes a ticket; only the response to the newest ticket is
//! applied, so a slow earlier response can never overwrite a newer one.
//!
//! The displayed page always satisfies `1 <= current <= max(1, ceil(total / size))`.
//! When the backend reports fewer pages than the one requested, the
//! controller re-issues the fetch once with the clamped page instead of
//! showing an empty out-of-range page.

use crate::config::ControllerConfig;
use crate::feedback::Phase;
use crate::{ApplicationError, ApplicationResult, SharedBackend};
use footprint_common::pagination::{clamp_page, max_pages, DEFAULT_PAGE};
use footprint_domain::{AutoReviewLog, PageData, ReviewStatus, TaskType};
use footprint_sdk::{LogQuery, SdkError, SdkResult};
use tracing::{debug, instrument, warn};

/// Filters applied to the list. Empty filters are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilters {
    pub task_type: Option<TaskType>,
    pub week_count: Option<u32>,
    pub review_status: Option<ReviewStatus>,
    /// Raw input; normalized when the query is built
    pub username: String,
}

impl LogFilters {
    pub fn to_query(&self, page: u32, size: u32) -> LogQuery {
        LogQuery::new(page, size)
            .task_type(self.task_type)
            .week_count(self.week_count)
            .review_status(self.review_status)
            .username(&self.username)
    }
}

/// Identifies one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub query: LogQuery,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.query.page
    }
}

/// What happened when a response was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Records and total were stored
    Applied,
    /// A newer fetch was issued in the meantime; nothing changed
    Superseded,
    /// The requested page is past the end; fetch this page instead
    Reissue(u32),
    /// The error was stored
    Failed,
}

pub struct LogListController {
    backend: SharedBackend,
    page_size: u32,
    current: u32,
    filters: LogFilters,
    records: Vec<AutoReviewLog>,
    total: u64,
    error: Option<String>,
    phase: Phase,
    issued: u64,
}

impl LogListController {
    pub fn new(backend: SharedBackend, config: &ControllerConfig) -> Self {
        Self {
            backend,
            page_size: config.page_size.max(1),
            current: DEFAULT_PAGE,
            filters: LogFilters::default(),
            records: Vec::new(),
            total: 0,
            error: None,
            phase: Phase::Idle,
            issued: 0,
        }
    }

    /// Start with `filters` already set; nothing is fetched until asked
    pub fn with_filters(mut self, filters: LogFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn backend(&self) -> &SharedBackend {
        &self.backend
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn max_pages(&self) -> u32 {
        max_pages(self.total, self.page_size)
    }

    pub fn records(&self) -> &[AutoReviewLog] {
        &self.records
    }

    pub fn filters(&self) -> &LogFilters {
        &self.filters
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Start a fetch for `page` with the current filters.
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.issued += 1;
        self.phase = Phase::Loading;
        FetchTicket {
            seq: self.issued,
            query: self.filters.to_query(page.max(1), self.page_size),
        }
    }

    /// Apply the response to `ticket`.
    ///
    /// With `allow_reissue` false an out-of-range response is accepted and
    /// the page is clamped locally.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: SdkResult<PageData<AutoReviewLog>>,
        allow_reissue: bool,
    ) -> FetchOutcome {
        match result {
            Ok(page) => self.apply_page(ticket, page, allow_reissue),
            Err(err) => self.apply_error(ticket, &err),
        }
    }

    fn is_latest(&self, ticket: &FetchTicket) -> bool {
        if ticket.seq != self.issued {
            debug!(ticket = ticket.seq, latest = self.issued, "Dropping superseded response");
            return false;
        }
        true
    }

    fn apply_page(
        &mut self,
        ticket: &FetchTicket,
        page: PageData<AutoReviewLog>,
        allow_reissue: bool,
    ) -> FetchOutcome {
        if !self.is_latest(ticket) {
            return FetchOutcome::Superseded;
        }

        let requested = ticket.page();
        let clamped = clamp_page(requested, page.total, self.page_size);

        if clamped != requested && allow_reissue {
            debug!(requested, clamped, total = page.total, "Requested page out of range");
            return FetchOutcome::Reissue(clamped);
        }

        self.records = page.records;
        self.total = page.total;
        self.current = clamped;
        self.error = None;
        self.phase = Phase::Loaded;
        FetchOutcome::Applied
    }

    fn apply_error(&mut self, ticket: &FetchTicket, err: &SdkError) -> FetchOutcome {
        if !self.is_latest(ticket) {
            return FetchOutcome::Superseded;
        }

        warn!(error = %err, page = ticket.page(), "Failed to load review logs");
        self.error = Some(err.to_string());
        self.phase = Phase::Failed;
        FetchOutcome::Failed
    }

    /// Fetch `page`, clamping and re-fetching once if it is out of range.
    ///
    /// On failure the error is stored and returned; records, total and the
    /// current page keep their previous values.
    #[instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn fetch_logs(&mut self, page: u32) -> ApplicationResult<()> {
        let mut page = page;
        let mut allow_reissue = true;

        loop {
            let ticket = self.begin_fetch(page);

            match self.backend.list_logs(&ticket.query).await {
                Ok(data) => match self.apply_page(&ticket, data, allow_reissue) {
                    FetchOutcome::Reissue(clamped) => {
                        page = clamped;
                        allow_reissue = false;
                    }
                    _ => return Ok(()),
                },
                Err(err) => {
                    return match self.apply_error(&ticket, &err) {
                        FetchOutcome::Failed => Err(ApplicationError::Backend(err)),
                        _ => Ok(()),
                    };
                }
            }
        }
    }

    pub async fn refresh(&mut self) -> ApplicationResult<()> {
        self.fetch_logs(self.current).await
    }

    pub async fn go_to_page(&mut self, page: u32) -> ApplicationResult<()> {
        self.fetch_logs(page).await
    }

    pub async fn set_task_type(&mut self, task_type: Option<TaskType>) -> ApplicationResult<()> {
        self.filters.task_type = task_type;
        self.fetch_logs(DEFAULT_PAGE).await
    }

    pub async fn set_week_count(&mut self, week: Option<u32>) -> ApplicationResult<()> {
        self.filters.week_count = week;
        self.fetch_logs(DEFAULT_PAGE).await
    }

    pub async fn set_review_status(
        &mut self,
        status: Option<ReviewStatus>,
    ) -> ApplicationResult<()> {
        self.filters.review_status = status;
        self.fetch_logs(DEFAULT_PAGE).await
    }

    pub async fn set_username(&mut self, raw: impl Into<String>) -> ApplicationResult<()> {
        self.filters.username = raw.into();
        self.fetch_logs(DEFAULT_PAGE).await
    }

    /// Replace every filter at once and go back to page 1
    pub async fn set_filters(&mut self, filters: LogFilters) -> ApplicationResult<()> {
        self.filters = filters;
        self.fetch_logs(DEFAULT_PAGE).await
    }

    pub async fn set_page_size(&mut self, page_size: u32) -> ApplicationResult<()> {
        self.page_size = page_size.max(1);
        self.fetch_logs(DEFAULT_PAGE).await
    }
}
