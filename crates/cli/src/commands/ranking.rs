//! `ranking show` and `ranking export`

use anyhow::{Context, Result};
use footprint_application::RankingController;
use serde_json::json;
use std::path::PathBuf;

use crate::commands::CommandContext;
use crate::interactive::spinner;
use crate::output::{colors, render_list, JsonFormatter, OutputFormat};

/// Show the full ranking of a week; blank means the latest week
pub async fn show(ctx: &CommandContext, week: Option<String>) -> Result<String> {
    let week_input = week.unwrap_or_default();
    ctx.require_admin().await?;

    let mut ranking = RankingController::new(ctx.backend.clone());
    let sp = spinner("Fetching ranking...", ctx.interactive);
    let result = ranking.fetch_ranking(&week_input).await;
    sp.finish_and_clear();
    let items = result?;

    if items.is_empty() && ctx.format == OutputFormat::Table {
        return Ok(colors::warning("No ranking data for this week.").to_string());
    }

    render_list(items, ctx.format)
}

/// Write the full ranking of a week to a CSV file.
///
/// Without `output` the file is named after the week and written to the
/// current directory.
pub async fn export(
    ctx: &CommandContext,
    week: Option<String>,
    output: Option<PathBuf>,
) -> Result<String> {
    let week_input = week.unwrap_or_default();
    ctx.require_admin().await?;

    let mut ranking = RankingController::new(ctx.backend.clone());
    let sp = spinner("Exporting ranking...", ctx.interactive);
    let result = ranking.export(&week_input).await;
    sp.finish_and_clear();
    let export = result?;

    let path = output.unwrap_or_else(|| PathBuf::from(&export.file_name));
    std::fs::write(&path, &export.contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = export.rows, "Ranking exported");

    if ctx.format == OutputFormat::Json {
        return JsonFormatter::format(&json!({
            "file": path.display().to_string(),
            "rows": export.rows,
        }));
    }

    Ok(colors::success(&format!("Exported {} rows to {}", export.rows, path.display())).to_string())
}
