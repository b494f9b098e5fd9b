use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::SiteResult;
use crate::models::{Coder, Contest, Standings};
use crate::services::config_loader::SiteConfig;
use crate::services::fetcher::Fetcher;
use crate::services::leaderboard::build_leaderboard;
use crate::services::{roster, schedule, table_decoder};

pub async fn load_contests(fetcher: &Fetcher, config: &SiteConfig) -> SiteResult<Vec<Contest>> {
    info!("Fetching contest list from {}", config.contests_csv_url);
    let text = fetcher.fetch_text(&config.contests_csv_url).await?;
    let table = table_decoder::decode(&text)?;

    let mut contests = schedule::parse_contests(&table)?;
    schedule::sort_newest_first(&mut contests, &config.schedule);
    info!("Loaded {} contests", contests.len());
    Ok(contests)
}

pub async fn load_coders(fetcher: &Fetcher, config: &SiteConfig) -> SiteResult<Vec<Coder>> {
    info!("Fetching coders from {}", config.coders_csv_url);
    let text = fetcher.fetch_text(&config.coders_csv_url).await?;
    let table = table_decoder::decode(&text)?;

    let coders = roster::parse_coders(&table);
    info!("Loaded {} coders", coders.len());
    Ok(coders)
}

/// Handle to name map for a contest. Failures only cost the pretty names.
pub async fn load_name_map(fetcher: &Fetcher, url: &str) -> HashMap<String, String> {
    if url.trim().is_empty() {
        debug!("No coders sheet linked, names fall back to handles");
        return HashMap::new();
    }

    let text = match fetcher.fetch_text(url).await {
        Ok(text) => text,
        Err(err) => {
            warn!("Failed to fetch coders sheet {}: {}", url, err);
            return HashMap::new();
        }
    };

    match table_decoder::decode(&text) {
        Ok(table) => {
            let names = roster::name_map(&table);
            info!("Resolved {} handles from {}", names.len(), url);
            names
        }
        Err(err) => {
            warn!("Skipping name mapping for {}: {}", url, err);
            HashMap::new()
        }
    }
}

/// Standings of one contest, or `None` when no rank sheet is published.
pub async fn load_standings(fetcher: &Fetcher, contest: &Contest) -> SiteResult<Option<Standings>> {
    if !contest.has_rank_sheet() {
        info!("No rank sheet provided for contest {}", contest.id);
        return Ok(None);
    }

    info!("Fetching rank sheet for {} from {}", contest.id, contest.rank_sheet);
    let (rank_text, names) = tokio::join!(
        fetcher.fetch_text(&contest.rank_sheet),
        load_name_map(fetcher, &contest.coders),
    );
    let table = table_decoder::decode(&rank_text?)?;
    let standings = build_leaderboard(&table, &names)?;

    for warning in &standings.warnings {
        warn!("Unreadable cell treated as untouched: {}", warning);
    }
    for entry in &standings.entries {
        debug!(
            "Rank {:0>3} Solved {} Penalty {} Name: {}",
            entry.rank, entry.solved_count, entry.total_penalty, entry.display_name
        );
    }
    info!(
        "Standings for {}: {} contestants, {} problems",
        contest.id,
        standings.entries.len(),
        standings.columns.len()
    );

    Ok(Some(standings))
}
