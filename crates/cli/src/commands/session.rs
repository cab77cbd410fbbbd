//! `whoami`

use anyhow::Result;
use footprint_application::SessionGate;
use footprint_domain::UserRole;

use crate::commands::CommandContext;
use crate::interactive::spinner;
use crate::output::render_record;

fn role_label(role: &UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::User => "user",
        UserRole::Other => "other",
    }
}

/// Show the principal the configured token belongs to
pub async fn whoami(ctx: &CommandContext) -> Result<String> {
    let sp = spinner("Loading session...", ctx.interactive);
    let gate = SessionGate::load(&ctx.backend).await;
    sp.finish_and_clear();
    let gate = gate?;

    let session = gate.session();
    let mut fields = vec![
        ("Name", session.user_name.clone()),
        ("Role", role_label(&session.user_role).to_string()),
        ("Admin", if gate.is_admin() { "yes" } else { "no" }.to_string()),
    ];

    let mut extra: Vec<(&str, String)> = session
        .extra
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.as_str(), value)
        })
        .collect();
    extra.sort_by(|a, b| a.0.cmp(b.0));
    fields.extend(extra);

    render_record(&fields, session, ctx.format)
}
