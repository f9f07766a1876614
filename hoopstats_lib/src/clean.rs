//! Loaders that turn persisted CSVs into analysis-ready rows.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::HoopsError;
use crate::game::GameKey;
use crate::names::TeamNames;
use crate::records::{BoxscoreRow, RosterRow, ScheduleRow};
use crate::store::read_records;

/// Players at or under this many minutes are left out of a cleaned boxscore.
pub const MIN_MINUTES: f64 = 5.0;

/// A roster player with numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub number: i64,
    /// 1 through 4 for FR..SR; unknown classes hold the roster mean.
    pub year: f64,
    pub position: String,
    /// Height in inches.
    pub height: u32,
    pub weight: Option<f64>,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
}

/// A played game from a school's point of view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    pub game: String,
    /// `YYYY-MM-DD-HH`, the same key boxscore files are named by.
    pub date: String,
    pub opponent: String,
    /// 1 for a win, 0 otherwise.
    pub outcome: u8,
    pub team_points: i64,
    pub opponent_points: i64,
}

/// One player's counting stats for a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLine {
    pub name: String,
    pub mp: f64,
    pub fg: i64,
    pub fga: i64,
    pub two_p: i64,
    pub two_pa: i64,
    pub three_p: i64,
    pub three_pa: i64,
    pub ft: i64,
    pub fta: i64,
    pub orb: i64,
    pub drb: i64,
    pub ast: i64,
    pub stl: i64,
    pub blk: i64,
    pub tov: i64,
    pub pf: i64,
    pub pts: i64,
}

fn parse_field<T: FromStr>(field: &str, raw: &str) -> Result<T, HoopsError> {
    raw.trim()
        .parse()
        .map_err(|_| HoopsError::Parse(format!("invalid {} '{}'", field, raw)))
}

/// Converts `feet-inches` text such as `6-10` into inches.
pub fn height_to_inches(raw: &str) -> Result<u32, HoopsError> {
    let (feet, inches) = raw
        .trim()
        .split_once('-')
        .ok_or_else(|| HoopsError::Parse(format!("invalid height '{}'", raw)))?;
    let feet: u32 = parse_field("height", feet)?;
    let inches: u32 = parse_field("height", inches)?;
    Ok(feet * 12 + inches)
}

/// Maps a class label to 1..4; anything else is 0 (unknown).
pub fn class_year(raw: &str) -> f64 {
    if raw.contains("FR") {
        1.0
    } else if raw.contains("SO") {
        2.0
    } else if raw.contains("JR") {
        3.0
    } else if raw.contains("SR") {
        4.0
    } else {
        0.0
    }
}

fn strip_stat<'a>(raw: &'a str, suffix: &str) -> &'a str {
    let raw = raw.trim();
    raw.strip_suffix(suffix).unwrap_or(raw)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Rounds to one decimal on the exact binary value, ties to even.
fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Cleans roster rows already read from disk.
pub fn clean_roster(rows: Vec<RosterRow>) -> Result<Vec<RosterEntry>, HoopsError> {
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let height = height_to_inches(&row.height)?;
        let (Some(ppg), Some(rpg), Some(apg)) =
            (present(&row.ppg), present(&row.rpg), present(&row.apg))
        else {
            continue;
        };
        if row.number.trim().is_empty() {
            continue;
        }
        let weight = match row.weight.trim() {
            "" => None,
            w => Some(parse_field("weight", w)?),
        };
        entries.push(RosterEntry {
            number: parse_field("number", &row.number)?,
            year: class_year(&row.year),
            position: row.position,
            height,
            weight,
            ppg: parse_field("PPG", strip_stat(ppg, " Pts"))?,
            rpg: parse_field("RPG", strip_stat(rpg, " Reb"))?,
            apg: parse_field("APG", strip_stat(apg, " Ast"))?,
            name: row.name,
        });
    }

    let known: Vec<f64> = entries
        .iter()
        .map(|e| e.year)
        .filter(|y| *y > 0.0)
        .collect();
    if known.is_empty() {
        if !entries.is_empty() {
            tracing::warn!("No player has a known class year; leaving years at 0");
        }
        return Ok(entries);
    }
    let mean = round_tenth(known.iter().sum::<f64>() / known.len() as f64);
    for entry in entries.iter_mut().filter(|e| e.year == 0.0) {
        entry.year = mean;
    }
    Ok(entries)
}

/// Reads and cleans a persisted roster.
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>, HoopsError> {
    clean_roster(read_records(path)?)
}

/// Cleans schedule rows already read from disk.
///
/// Every row's date and time must parse, including the unplayed ones that
/// are dropped afterwards for missing scores.
pub fn clean_schedule(
    rows: Vec<ScheduleRow>,
    names: &TeamNames,
) -> Result<Vec<GameResult>, HoopsError> {
    let mut games = Vec::with_capacity(rows.len());
    for row in rows {
        let key = GameKey::from_schedule(&row.date, &row.time)?;
        let opponent = names.clean(&row.opponent);
        let fields = [
            row.game.trim(),
            opponent.as_str(),
            row.outcome.trim(),
            row.team_points.trim(),
            row.opponent_points.trim(),
        ];
        if fields.iter().any(|f| f.is_empty()) {
            continue;
        }
        games.push(GameResult {
            game: row.game.trim().to_string(),
            date: key.to_string(),
            outcome: u8::from(row.outcome.trim() == "W"),
            team_points: parse_field("team points", &row.team_points)?,
            opponent_points: parse_field("opponent points", &row.opponent_points)?,
            opponent,
        });
    }
    Ok(games)
}

/// Reads and cleans a persisted schedule.
pub fn load_schedule(path: &Path, names: &TeamNames) -> Result<Vec<GameResult>, HoopsError> {
    clean_schedule(read_records(path)?, names)
}

/// Cleans boxscore rows already read from disk.
///
/// Rows whose MP is not a number (e.g. "Did Not Play") are dropped along with
/// anyone at or under [`MIN_MINUTES`].
pub fn clean_boxscore(rows: Vec<BoxscoreRow>) -> Result<Vec<PlayerLine>, HoopsError> {
    let mut lines = Vec::new();
    for row in rows {
        let Ok(mp) = row.mp.trim().parse::<f64>() else {
            continue;
        };
        if mp <= MIN_MINUTES {
            continue;
        }
        lines.push(PlayerLine {
            mp,
            fg: parse_field("FG", &row.fg)?,
            fga: parse_field("FGA", &row.fga)?,
            two_p: parse_field("2P", &row.two_p)?,
            two_pa: parse_field("2PA", &row.two_pa)?,
            three_p: parse_field("3P", &row.three_p)?,
            three_pa: parse_field("3PA", &row.three_pa)?,
            ft: parse_field("FT", &row.ft)?,
            fta: parse_field("FTA", &row.fta)?,
            orb: parse_field("ORB", &row.orb)?,
            drb: parse_field("DRB", &row.drb)?,
            ast: parse_field("AST", &row.ast)?,
            stl: parse_field("STL", &row.stl)?,
            blk: parse_field("BLK", &row.blk)?,
            tov: parse_field("TOV", &row.tov)?,
            pf: parse_field("PF", &row.pf)?,
            pts: parse_field("PTS", &row.pts)?,
            name: row.name,
        });
    }
    Ok(lines)
}

/// Reads and cleans a persisted boxscore.
pub fn load_boxscore(path: &Path) -> Result<Vec<PlayerLine>, HoopsError> {
    clean_boxscore(read_records(path)?)
}
