//! Footprint admin CLI
//!
//! Command-line access to the Footprint contest admin panel: review logs,
//! weekly ranking, dashboard counters and level recalculation.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use footprint_application::ApplicationError;
use footprint_cli::commands::{
    config as config_cmd, levels, logs, ranking, session, stats, CommandContext,
};
use footprint_cli::config::Config;
use footprint_cli::output::{colors, OutputFormat};
use footprint_common::telemetry::init_cli_tracing;
use footprint_domain::{ReviewStatus, TaskType};

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "footprint-admin")]
#[command(author, version, about = "Footprint contest admin CLI")]
#[command(long_about = "Command-line interface for the Footprint contest admin panel.\n\n\
    Review automated task verifications, export weekly rankings, check dashboard counters \
    and trigger level recalculation. Every command except `config`, `completions` and \
    `levels thresholds` requires an administrator token.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (defaults to the configured one)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<CliOutputFormat>,

    /// Backend URL (overrides config)
    #[arg(long, global = true, env = "FOOTPRINT_API_URL")]
    api_url: Option<String>,

    /// Bearer token (overrides config)
    #[arg(long, global = true, env = "FOOTPRINT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the user the token belongs to
    Whoami,

    /// Automated review logs
    #[command(alias = "l")]
    Logs {
        #[command(subcommand)]
        command: LogsCommands,
    },

    /// Weekly ranking
    #[command(alias = "r")]
    Ranking {
        #[command(subcommand)]
        command: RankingCommands,
    },

    /// Dashboard counters
    Stats,

    /// User levels
    Levels {
        #[command(subcommand)]
        command: LevelsCommands,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum LogsCommands {
    /// List review logs, newest first
    List {
        /// Filter by task type (communication, community)
        #[arg(short = 't', long)]
        task_type: Option<TaskType>,

        /// Filter by contest week (positive integer)
        #[arg(short, long)]
        week: Option<String>,

        /// Filter by review status (pending, approved, rejected)
        #[arg(short, long)]
        status: Option<ReviewStatus>,

        /// Filter by username; a leading @ is ignored
        #[arg(short, long)]
        username: Option<String>,

        /// Page to show; clamped to the last page
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Rows per page (defaults to the configured page size)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        page_size: Option<u32>,
    },

    /// Show every field of one log
    Show {
        /// Log ID
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Change the review outcome of one log
    Review {
        /// Log ID
        #[arg(value_name = "ID")]
        id: i64,

        /// New status (pending, approved, rejected); prompted when omitted
        #[arg(short, long)]
        status: Option<ReviewStatus>,

        /// Review message; prompted when omitted
        #[arg(short, long)]
        message: Option<String>,

        /// List page to reload afterwards
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
}

#[derive(Subcommand, Debug)]
enum RankingCommands {
    /// Show the full ranking of a week
    Show {
        /// Contest week; latest when omitted
        #[arg(short, long)]
        week: Option<String>,
    },

    /// Export the full ranking of a week as CSV
    Export {
        /// Contest week; latest when omitted
        #[arg(short, long)]
        week: Option<String>,

        /// Output file (defaults to weekly-ranking-week-<week>-all.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum LevelsCommands {
    /// Show the point bands for each level
    Thresholds,

    /// Recalculate every user's level from accumulated points
    Recalculate {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Reset configuration to defaults
    Reset,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "footprint-admin", &mut std::io::stdout());
}

async fn run(cli: Cli) -> Result<String> {
    let mut config = Config::load()?;

    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(token) = &cli.token {
        config.auth_token = Some(token.clone());
    }
    if cli.no_color || !config.colored {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .unwrap_or(config.output_format);

    match cli.command {
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(String::new())
        }

        Commands::Config { command } => {
            let path = Config::config_file()?;
            match command {
                Some(ConfigCommands::Show) | None => config_cmd::show(&config, format),
                Some(ConfigCommands::Get { key }) => config_cmd::get(&config, &key),
                Some(ConfigCommands::Set { key, value }) => config_cmd::set(&path, &key, &value),
                Some(ConfigCommands::Reset) => config_cmd::reset(&path),
            }
        }

        Commands::Levels {
            command: LevelsCommands::Thresholds,
        } => levels::thresholds(format),

        command => {
            let ctx = CommandContext::new(config, format)?;

            match command {
                Commands::Whoami => session::whoami(&ctx).await,

                Commands::Logs { command } => match command {
                    LogsCommands::List {
                        task_type,
                        week,
                        status,
                        username,
                        page,
                        page_size,
                    } => {
                        logs::list(
                            &ctx,
                            logs::ListArgs {
                                task_type,
                                week,
                                status,
                                username,
                                page,
                                page_size,
                            },
                        )
                        .await
                    }
                    LogsCommands::Show { id } => logs::show(&ctx, id).await,
                    LogsCommands::Review {
                        id,
                        status,
                        message,
                        page,
                    } => {
                        logs::review(
                            &ctx,
                            logs::ReviewArgs {
                                id,
                                status,
                                message,
                                page,
                            },
                        )
                        .await
                    }
                },

                Commands::Ranking { command } => match command {
                    RankingCommands::Show { week } => ranking::show(&ctx, week).await,
                    RankingCommands::Export { week, output } => {
                        ranking::export(&ctx, week, output).await
                    }
                },

                Commands::Stats => stats::show(&ctx).await,

                Commands::Levels {
                    command: LevelsCommands::Recalculate { yes },
                } => levels::recalculate(&ctx, yes).await,

                Commands::Levels {
                    command: LevelsCommands::Thresholds,
                }
                | Commands::Config { .. }
                | Commands::Completions { .. } => Ok(String::new()),
            }
        }
    }
}

/// Extra guidance for errors the user can fix
fn hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<ApplicationError>()? {
        ApplicationError::Backend(e) if e.is_unauthorized() => {
            Some("Set a token with `footprint-admin config set token <TOKEN>` or pass --token.")
        }
        ApplicationError::Backend(e) if e.is_transport() => {
            Some("Check the backend URL with `footprint-admin config get api_url`.")
        }
        ApplicationError::Forbidden(_) => Some("This command requires an administrator account."),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    init_cli_tracing(verbose)?;

    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            let label = match e.downcast_ref::<ApplicationError>() {
                Some(app) => format!("Error [{}]:", app.error_code()),
                None => "Error:".to_string(),
            };
            eprintln!("{} {}", colors::error(&label).bold(), e);
            if let Some(hint) = hint(&e) {
                eprintln!("{}", colors::dim(hint));
            }
            if verbose {
                eprintln!("\n{:?}", e);
            }
            std::process::exit(1);
        }
    }
}
