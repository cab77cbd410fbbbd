//! `logs list`, `logs show` and `logs review`

use anyhow::Result;
use footprint_application::{
    detail_rows, parse_week, DetailDialog, LogFilters, LogListController, ReviewEditDialog,
};
use footprint_domain::{PageData, ReviewStatus, TaskType};
use serde_json::json;

use crate::commands::CommandContext;
use crate::interactive::{prompt_input_with_default, select, spinner};
use crate::output::{colors, render_list, render_record, JsonFormatter, OutputFormat};

/// Arguments of `logs list`
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub task_type: Option<TaskType>,
    /// Raw week input; validated before any request
    pub week: Option<String>,
    pub status: Option<ReviewStatus>,
    pub username: Option<String>,
    pub page: u32,
    pub page_size: Option<u32>,
}

/// Arguments of `logs review`
#[derive(Debug, Clone)]
pub struct ReviewArgs {
    pub id: i64,
    pub status: Option<ReviewStatus>,
    pub message: Option<String>,
    /// Page of the unfiltered list to reload after saving
    pub page: u32,
}

impl ListArgs {
    fn filters(&self) -> Result<LogFilters> {
        let week = match &self.week {
            Some(input) => parse_week(input)?.map(|w| w.get()),
            None => None,
        };

        Ok(LogFilters {
            task_type: self.task_type,
            week_count: week,
            review_status: self.status,
            username: self.username.clone().unwrap_or_default(),
        })
    }
}

fn list_controller(ctx: &CommandContext, page_size: Option<u32>) -> LogListController {
    let config = ctx
        .controllers
        .clone()
        .with_page_size(page_size.unwrap_or(ctx.config.page_size));
    LogListController::new(ctx.backend.clone(), &config)
}

/// Render the loaded page of `list`
pub fn render_page(list: &LogListController, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => JsonFormatter::format(&PageData::new(
            list.records().to_vec(),
            list.total(),
            list.current(),
            list.page_size(),
        )),
        OutputFormat::Plain => render_list(list.records(), format),
        OutputFormat::Table => {
            if list.records().is_empty() {
                return Ok(colors::warning("No review logs match the current filters.").to_string());
            }
            let table = render_list(list.records(), format)?;
            let footer = format!(
                "Page {} of {} ({} records)",
                list.current(),
                list.max_pages(),
                list.total()
            );
            Ok(format!("{}\n{}", table, colors::dim(&footer)))
        }
    }
}

/// Page through review logs
pub async fn list(ctx: &CommandContext, args: ListArgs) -> Result<String> {
    let filters = args.filters()?;
    ctx.require_admin().await?;

    let mut list = list_controller(ctx, args.page_size).with_filters(filters);

    let sp = spinner("Fetching review logs...", ctx.interactive);
    let result = list.go_to_page(args.page).await;
    sp.finish_and_clear();
    result?;

    render_page(&list, ctx.format)
}

/// Show every field of one log
pub async fn show(ctx: &CommandContext, id: i64) -> Result<String> {
    ctx.require_admin().await?;

    let mut detail = DetailDialog::new(ctx.backend.clone());
    let sp = spinner("Loading log...", ctx.interactive);
    let result = detail.open(id).await;
    sp.finish_and_clear();
    let log = result?;

    render_record(&detail_rows(log), log, ctx.format)
}

/// Change the review outcome of one log and reload the list
pub async fn review(ctx: &CommandContext, args: ReviewArgs) -> Result<String> {
    ctx.require_admin().await?;

    let mut detail = DetailDialog::new(ctx.backend.clone());
    let log = detail.open(args.id).await?.clone();

    let mut list = list_controller(ctx, None);
    list.go_to_page(args.page).await?;

    let mut dialog = ReviewEditDialog::from_log(ctx.backend.clone(), &log, &ctx.controllers);

    let status = match args.status {
        Some(status) => status,
        None if ctx.interactive => {
            let choices = ReviewStatus::all();
            let current = choices
                .iter()
                .position(|s| *s == log.review_status)
                .unwrap_or(0);
            choices[select("Review status", choices, current)?]
        }
        None => log.review_status,
    };
    dialog.set_status(status);

    let message = match args.message {
        Some(message) => message,
        None if ctx.interactive => {
            prompt_input_with_default("Review message", log.review_message_or_empty())?
        }
        None => log.review_message_or_empty().to_string(),
    };
    dialog.set_message(message);

    let update = dialog.update();
    let sp = spinner("Saving review...", ctx.interactive);
    let result = dialog.submit(&mut list).await;
    sp.finish_and_clear();
    let outcome = result?;

    if ctx.format == OutputFormat::Json {
        return JsonFormatter::format(&json!({
            "id": args.id,
            "taskType": log.task_type,
            "reviewStatus": update.review_status,
            "reviewMessage": update.review_message,
            "refetchPage": outcome.refetch_page,
            "listReloaded": outcome.list_reloaded,
        }));
    }

    let mut out = colors::success(&format!(
        "Review for log #{} saved as {}",
        args.id, update.review_status
    ))
    .to_string();

    if outcome.list_reloaded {
        out.push('\n');
        out.push_str(&render_page(&list, ctx.format)?);
    } else {
        out.push('\n');
        out.push_str(&colors::warning("The list could not be reloaded.").to_string());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_week_rejected_before_request() {
        let args = ListArgs {
            week: Some("0".to_string()),
            ..ListArgs::default()
        };
        assert!(args.filters().is_err());
    }

    #[test]
    fn test_filters_from_args() {
        let args = ListArgs {
            task_type: Some(TaskType::Community),
            week: Some("3".to_string()),
            status: Some(ReviewStatus::Pending),
            username: Some("  @alice ".to_string()),
            page: 1,
            page_size: None,
        };
        let filters = args.filters().unwrap();
        assert_eq!(filters.week_count, Some(3));
        assert_eq!(filters.task_type, Some(TaskType::Community));
        assert_eq!(filters.username, "  @alice ");
    }
}
