//! Row layouts for the records the CLI prints.

use super::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};
use anyhow::Result;
use comfy_table::{Cell, Color};
use footprint_domain::{AutoReviewLog, LevelBand, ReviewStatus, WeeklyRankingItem};
use serde::Serialize;

/// A record with a fixed column layout
pub trait Tabular {
    /// Column headers
    fn headers() -> &'static [&'static str];

    /// Plain cell values, in header order
    fn row(&self) -> Vec<String>;

    /// Styled cells; defaults to the plain values
    fn cells(&self) -> Vec<Cell> {
        self.row().into_iter().map(Cell::new).collect()
    }
}

fn dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn status_color(status: ReviewStatus) -> Color {
    match status {
        ReviewStatus::Pending => Color::Yellow,
        ReviewStatus::Approved => Color::Green,
        ReviewStatus::Rejected => Color::Red,
    }
}

impl Tabular for AutoReviewLog {
    fn headers() -> &'static [&'static str] {
        &["ID", "Type", "Task", "User", "Week", "OCR", "AI", "Status", "Message", "Created"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task_type.to_string(),
            self.task_id.to_string(),
            self.username.clone(),
            self.week_count.to_string(),
            if self.ocr_success { "ok" } else { "failed" }.to_string(),
            if self.ai_verified { "verified" } else { "-" }.to_string(),
            self.review_status.to_string(),
            dash(self.review_message.as_deref()),
            self.created_at.clone(),
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        let status = self.review_status;
        self.row()
            .into_iter()
            .enumerate()
            .map(|(i, value)| match i {
                7 => Cell::new(value).fg(status_color(status)),
                5 if !self.ocr_success => Cell::new(value).fg(Color::Red),
                _ => Cell::new(value),
            })
            .collect()
    }
}

impl Tabular for WeeklyRankingItem {
    fn headers() -> &'static [&'static str] {
        &["Rank", "User ID", "User", "Twitter", "Weekly points", "Wallet"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.id.to_string(),
            self.user_name.clone(),
            dash(self.twitter_username.as_deref()),
            self.weekly_points.to_string(),
            dash(self.wallet_address.as_deref()),
        ]
    }
}

impl Tabular for LevelBand {
    fn headers() -> &'static [&'static str] {
        &["Level", "Points"]
    }

    fn row(&self) -> Vec<String> {
        vec![format!("Lv{}", self.level), self.range_label()]
    }
}

/// Render a list of records in `format`
pub fn render_list<T>(items: &[T], format: OutputFormat) -> Result<String>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Json => JsonFormatter::format(items),
        OutputFormat::Table => Ok(TableFormatter::cells(
            T::headers(),
            items.iter().map(Tabular::cells).collect(),
        )),
        OutputFormat::Plain => {
            let rows: Vec<Vec<String>> = items.iter().map(Tabular::row).collect();
            Ok(PlainFormatter::rows(&rows))
        }
    }
}

/// Render one record: labelled fields for humans, `value` for JSON
pub fn render_record<T>(fields: &[(&str, String)], value: &T, format: OutputFormat) -> Result<String>
where
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Json => JsonFormatter::format(value),
        OutputFormat::Table => Ok(TableFormatter::key_value(fields)),
        OutputFormat::Plain => Ok(PlainFormatter::key_value(fields)),
    }
}
