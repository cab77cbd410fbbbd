//! CLI commands
//!
//! Each command returns the text to print, already rendered in the selected
//! output format.

pub mod config;
pub mod levels;
pub mod logs;
pub mod ranking;
pub mod session;
pub mod stats;

use crate::config::Config;
use crate::interactive::is_interactive;
use crate::output::OutputFormat;
use anyhow::Result;
use footprint_application::{ControllerConfig, SessionGate, SharedBackend};
use footprint_domain::UserSession;
use footprint_sdk::Client;
use std::sync::Arc;

/// Context passed to all commands
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub backend: SharedBackend,
    pub controllers: ControllerConfig,
    /// Spinners and prompts are allowed
    pub interactive: bool,
}

impl CommandContext {
    /// Create a context talking to the configured backend
    pub fn new(config: Config, format: OutputFormat) -> Result<Self> {
        let client = Client::new(config.client_config())?;
        tracing::debug!(api_url = %config.api_url, "Using backend");
        let interactive = format != OutputFormat::Json && is_interactive();

        let mut ctx = Self::with_backend(config, format, Arc::new(client));
        if interactive {
            ctx.interactive = true;
            ctx.controllers = ControllerConfig::default().with_page_size(ctx.config.page_size);
        }
        Ok(ctx)
    }

    /// Create a non-interactive context over any backend
    pub fn with_backend(config: Config, format: OutputFormat, backend: SharedBackend) -> Self {
        let controllers = ControllerConfig::immediate().with_page_size(config.page_size);
        Self {
            config,
            format,
            backend,
            controllers,
            interactive: false,
        }
    }

    /// Load the session and fail unless it belongs to an administrator
    pub async fn require_admin(&self) -> Result<UserSession> {
        let gate = SessionGate::load(&self.backend).await?;
        let session = gate.require_admin()?;
        Ok(session.clone())
    }
}
