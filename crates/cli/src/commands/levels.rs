//! `levels thresholds` and `levels recalculate`

use anyhow::Result;
use footprint_application::LevelRecalculation;
use footprint_domain::LEVEL_BANDS;
use serde_json::json;

use crate::commands::CommandContext;
use crate::interactive::{confirm, spinner};
use crate::output::{colors, render_list, JsonFormatter, OutputFormat};

/// The point bands the backend assigns levels from
pub fn thresholds(format: OutputFormat) -> Result<String> {
    render_list(&LEVEL_BANDS, format)
}

/// Recalculate every user's level.
///
/// Requires `--yes`, or an interactive confirmation.
pub async fn recalculate(ctx: &CommandContext, yes: bool) -> Result<String> {
    ctx.require_admin().await?;

    let confirmed = if yes {
        true
    } else if ctx.interactive {
        confirm("Recalculate the level of every user now?")?
    } else {
        anyhow::bail!("Level recalculation needs confirmation; pass --yes to run it non-interactively");
    };

    if !confirmed {
        return Ok("Cancelled.".to_string());
    }

    let mut recalculation = LevelRecalculation::new(ctx.backend.clone(), &ctx.controllers);
    let sp = spinner("Recalculating levels...", ctx.interactive);
    let result = recalculation.trigger(true).await;
    sp.finish_and_clear();
    let banner = result?;

    if banner.is_error() {
        anyhow::bail!("{}", banner.message);
    }

    if ctx.format == OutputFormat::Json {
        return JsonFormatter::format(&json!({ "success": true, "message": banner.message }));
    }

    Ok(colors::success(&banner.message).to_string())
}
