//! CLI subcommand implementations.

pub mod boxscore;
pub mod crawl;
pub mod physiology;
pub mod roster;
pub mod schedule;

use std::path::PathBuf;

use anyhow::{bail, Result};
use hoopstats_lib::{seed, GameKey, TeamNames};

/// Builds a game key from `YYYY-MM-DD` and a two-digit 24-hour hour.
pub(crate) fn game_key(date: &str, hour: &str) -> Result<GameKey> {
    let date = hoopstats_lib::game::parse_date(date)?;
    let hour: u32 = hour.trim().parse()?;
    if hour > 23 {
        bail!("hour must be between 0 and 23, got {}", hour);
    }
    Ok(GameKey {
        date: date.format("%Y-%m-%d").to_string(),
        hour: format!("{:02}", hour),
    })
}

/// Opponent name rules from `path` when given, else the embedded map.
pub(crate) fn team_names(path: Option<&PathBuf>) -> Result<TeamNames> {
    let overrides = match path {
        Some(path) => seed::load_opponent_map_from(path)?,
        None => seed::load_opponent_map()?,
    };
    Ok(TeamNames::new(overrides)?)
}
