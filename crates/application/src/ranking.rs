//! Weekly ranking query and CSV export.
//!
//! Week input is validated before any request is made. The ranking is
//! always requested in full (`limit=-1`), so the displayed list and the
//! exported file are the same rows.

use crate::feedback::Phase;
use crate::{ApplicationError, ApplicationResult, SharedBackend};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use footprint_domain::{WeekNumber, WeeklyRankingItem};
use tracing::{info, instrument, warn};

/// CSV column headers, in order
pub const CSV_HEADER: [&str; 6] = [
    "rank",
    "user id",
    "user name",
    "twitter",
    "weekly points",
    "wallet address",
];

/// Parse the week input box. Blank means the latest week.
pub fn parse_week(input: &str) -> ApplicationResult<Option<WeekNumber>> {
    Ok(WeekNumber::parse(input)?)
}

/// `weekly-ranking-week-<week|latest>-all.csv`
pub fn export_file_name(week: Option<WeekNumber>) -> String {
    let week = week
        .map(|w| w.to_string())
        .unwrap_or_else(|| "latest".to_string());
    format!("weekly-ranking-week-{}-all.csv", week)
}

/// Serialize rows as CSV: every field quoted, embedded quotes doubled,
/// `\n` line endings. An empty list is an error.
pub fn export_csv(items: &[WeeklyRankingItem]) -> ApplicationResult<String> {
    if items.is_empty() {
        return Err(ApplicationError::Export(
            "no ranking data to export".to_string(),
        ));
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let export_err = |e: csv::Error| ApplicationError::Export(format!("failed to write CSV: {}", e));

    writer.write_record(CSV_HEADER).map_err(export_err)?;
    for item in items {
        writer
            .write_record([
                item.rank.to_string(),
                item.id.to_string(),
                item.user_name.clone(),
                item.twitter_username.clone().unwrap_or_default(),
                item.weekly_points.to_string(),
                item.wallet_address.clone().unwrap_or_default(),
            ])
            .map_err(export_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApplicationError::Export(format!("failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ApplicationError::Export(e.to_string()))
}

/// A ready-to-save export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingExport {
    pub file_name: String,
    pub contents: String,
    pub rows: usize,
}

pub struct RankingController {
    backend: SharedBackend,
    week: Option<WeekNumber>,
    items: Vec<WeeklyRankingItem>,
    phase: Phase,
    error: Option<String>,
}

impl RankingController {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            backend,
            week: None,
            items: Vec::new(),
            phase: Phase::Idle,
            error: None,
        }
    }

    pub fn week(&self) -> Option<WeekNumber> {
        self.week
    }

    pub fn items(&self) -> &[WeeklyRankingItem] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Validate `week_input` and load the full ranking for that week.
    #[instrument(skip(self))]
    pub async fn fetch_ranking(&mut self, week_input: &str) -> ApplicationResult<&[WeeklyRankingItem]> {
        let week = parse_week(week_input)?;
        self.phase = Phase::Loading;

        match self.backend.weekly_ranking(week).await {
            Ok(items) => {
                self.week = week;
                self.items = items;
                self.error = None;
                self.phase = Phase::Loaded;
                Ok(&self.items)
            }
            Err(err) => {
                warn!(error = %err, "Failed to load ranking");
                self.error = Some(err.to_string());
                self.phase = Phase::Failed;
                Err(err.into())
            }
        }
    }

    /// Fetch the full ranking for `week_input` and render it as CSV.
    #[instrument(skip(self))]
    pub async fn export(&mut self, week_input: &str) -> ApplicationResult<RankingExport> {
        self.fetch_ranking(week_input).await?;
        let contents = export_csv(&self.items)?;
        let export = RankingExport {
            file_name: export_file_name(self.week),
            contents,
            rows: self.items.len(),
        };
        info!(file = %export.file_name, rows = export.rows, "Ranking exported");
        Ok(export)
    }
}
