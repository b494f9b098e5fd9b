use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use icepc_standings::SiteError;
use icepc_standings::screens;
use icepc_standings::services::config_loader::{self, DEFAULT_CONFIG_FILE};
use icepc_standings::services::fetcher::Fetcher;
use icepc_standings::services::{leaderboard, roster, schedule, standings_loader};

#[derive(Parser)]
#[command(name = "icepc", about = "Contest schedule, standings and roster of the club")]
struct Cli {
    /// Path to the TOML config
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists every contest, newest first
    Contests,
    /// Lists contests that have not started yet
    Upcoming,
    /// Shows the standings of a contest (newest contest when no id is given)
    Standings {
        contest_id: Option<String>,
        /// Only show contestants whose name or handle contains this text
        #[arg(long, default_value = "")]
        filter: String,
        /// Print the standings as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Lists club members
    Coders {
        /// Only show coders whose name or student id contains this text
        #[arg(long, default_value = "")]
        filter: String,
    },
}

fn init_tracing() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = fs::create_dir_all("logs");
    let file_appender = tracing_appender::rolling::daily("logs", "icepc.log");
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .with_target(true);

    let init_result = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Err(err) = init_result {
        eprintln!("tracing init failed: {err}");
        return None;
    }

    Some(file_guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_tracing();
    let cli = Cli::parse();

    let config = config_loader::load_site_config(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let fetcher = Fetcher::new(&config.fetch).context("building HTTP client")?;
    let now = Utc::now().with_timezone(&schedule::local_offset(&config.schedule));

    match cli.command {
        Commands::Contests => {
            let contests = standings_loader::load_contests(&fetcher, &config).await?;
            let listed: Vec<_> = contests.iter().collect();
            println!(
                "{}",
                screens::contests::contests_table(&listed, now, &config.schedule)
            );
        }
        Commands::Upcoming => {
            let contests = standings_loader::load_contests(&fetcher, &config).await?;
            let pending = schedule::upcoming(&contests, now, &config.schedule);
            if pending.is_empty() {
                println!("No upcoming contests.");
            } else {
                println!(
                    "{}",
                    screens::contests::contests_table(&pending, now, &config.schedule)
                );
            }
        }
        Commands::Standings {
            contest_id,
            filter,
            json,
        } => {
            let contests = standings_loader::load_contests(&fetcher, &config).await?;
            let Some(contest) = schedule::select_contest(&contests, contest_id.as_deref()) else {
                return Err(SiteError::UnknownContest(contest_id.unwrap_or_default()).into());
            };
            info!("Selected contest {} ({})", contest.id, contest.name);

            match schedule::contest_status(contest, now, &config.schedule) {
                Ok(status) => info!("Contest status: {:?}", status),
                Err(err) => warn!("{}", err),
            }

            let Some(standings) = standings_loader::load_standings(&fetcher, contest).await?
            else {
                println!("No rank sheet published for {} yet.", contest.name);
                return Ok(());
            };

            let shown = leaderboard::filter_entries(&standings.entries, &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                println!("{}", contest.name);
                println!(
                    "{}",
                    screens::standings::standings_table(&standings.columns, &shown)
                );
                if shown.is_empty() {
                    println!("No contestants match '{filter}'.");
                }
            }
        }
        Commands::Coders { filter } => {
            let coders = standings_loader::load_coders(&fetcher, &config).await?;
            let shown = roster::filter_coders(&coders, &filter);
            println!("{}", screens::coders::coders_table(&shown));
        }
    }

    Ok(())
}
