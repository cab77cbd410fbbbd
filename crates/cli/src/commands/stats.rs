//! `stats`

use anyhow::Result;
use footprint_application::Dashboard;

use crate::commands::CommandContext;
use crate::interactive::spinner;
use crate::output::render_record;

/// Dashboard counters
pub async fn show(ctx: &CommandContext) -> Result<String> {
    ctx.require_admin().await?;

    let mut dashboard = Dashboard::new(ctx.backend.clone(), &ctx.controllers);
    let sp = spinner("Loading dashboard...", ctx.interactive);
    let result = dashboard.load_dashboard().await;
    sp.finish_and_clear();
    let stats = result?;

    let fields = [
        ("Total users", stats.total_users.to_string()),
        ("Applications", stats.total_applications.to_string()),
        ("Weekly participants", stats.weekly_participants.to_string()),
        ("Weekly topic views", stats.weekly_topic_views.to_string()),
    ];

    render_record(&fields, stats, ctx.format)
}
