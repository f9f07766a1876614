//! Typed rows for the three persisted artifacts.
//!
//! Field names follow the CSV column headers the files carry, so the same
//! structs serialize on crawl and deserialize on load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::table::SchemaError;

/// A row type with a fixed, ordered column list.
pub trait Record: Serialize + DeserializeOwned {
    const COLUMNS: &'static [&'static str];
}

/// Width of the roster table once the optional RSCI column is gone.
pub const ROSTER_WIDTH: usize = 9;
pub const SCHEDULE_WIDTH: usize = 15;
pub const BOXSCORE_WIDTH: usize = 23;

fn into_array<const N: usize>(cells: Vec<String>) -> Result<[String; N], SchemaError> {
    let found = cells.len();
    cells
        .try_into()
        .map_err(|_| SchemaError::Width { expected: N, found })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// One player of a school's roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Position")]
    pub position: String,
    /// Raw `feet-inches` text, e.g. `6-10`.
    #[serde(rename = "Height")]
    pub height: String,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "Hometown")]
    pub hometown: String,
    #[serde(rename = "High School")]
    pub high_school: String,
    #[serde(rename = "PPG")]
    pub ppg: Option<String>,
    #[serde(rename = "RPG")]
    pub rpg: Option<String>,
    #[serde(rename = "APG")]
    pub apg: Option<String>,
}

impl Record for RosterRow {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Number",
        "Year",
        "Position",
        "Height",
        "Weight",
        "Hometown",
        "High School",
        "PPG",
        "RPG",
        "APG",
    ];
}

impl RosterRow {
    /// Builds a row from the nine conformed roster cells.
    ///
    /// The last cell is the combined stat summary ("12.3 Pts, 5.1 Reb, 2.0 Ast")
    /// and is split on `", "` into points, rebounds and assists.
    pub fn from_cells(cells: Vec<String>) -> Result<Self, SchemaError> {
        let [name, number, year, position, height, weight, hometown, high_school, stats] =
            into_array::<ROSTER_WIDTH>(cells)?;
        let mut parts = stats.split(", ");
        let ppg = non_empty(parts.next());
        let rpg = non_empty(parts.next());
        let apg = non_empty(parts.next());
        Ok(Self {
            name,
            number,
            year,
            position,
            height,
            weight,
            hometown,
            high_school,
            ppg,
            rpg,
            apg,
        })
    }
}

/// One scheduled game of a school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    #[serde(rename = "Game")]
    pub game: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Type")]
    pub game_type: String,
    /// `@` when the school played away, `N` on a neutral court, empty at home.
    #[serde(rename = "Home/Away")]
    pub home_away: String,
    #[serde(rename = "Opponent")]
    pub opponent: String,
    #[serde(rename = "Conference")]
    pub conference: String,
    #[serde(rename = "Outcome")]
    pub outcome: String,
    #[serde(rename = "Team Points")]
    pub team_points: String,
    #[serde(rename = "Opponent Points")]
    pub opponent_points: String,
    #[serde(rename = "OT")]
    pub overtime: String,
    #[serde(rename = "Opponent Wins")]
    pub opponent_wins: String,
    #[serde(rename = "Opponent Losses")]
    pub opponent_losses: String,
    #[serde(rename = "Streak")]
    pub streak: String,
    #[serde(rename = "Arena")]
    pub arena: String,
}

impl Record for ScheduleRow {
    const COLUMNS: &'static [&'static str] = &[
        "Game",
        "Date",
        "Time",
        "Type",
        "Home/Away",
        "Opponent",
        "Conference",
        "Outcome",
        "Team Points",
        "Opponent Points",
        "OT",
        "Opponent Wins",
        "Opponent Losses",
        "Streak",
        "Arena",
    ];
}

impl ScheduleRow {
    pub fn from_cells(cells: Vec<String>) -> Result<Self, SchemaError> {
        let [game, date, time, game_type, home_away, opponent, conference, outcome, team_points, opponent_points, overtime, opponent_wins, opponent_losses, streak, arena] =
            into_array::<SCHEDULE_WIDTH>(cells)?;
        Ok(Self {
            game,
            date,
            time,
            game_type,
            home_away,
            opponent,
            conference,
            outcome,
            team_points,
            opponent_points,
            overtime,
            opponent_wins,
            opponent_losses,
            streak,
            arena,
        })
    }

    /// Whether the school played this game on the opponent's court.
    pub fn is_away(&self) -> bool {
        self.home_away.contains('@')
    }
}

/// One player's line in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxscoreRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MP")]
    pub mp: String,
    #[serde(rename = "FG")]
    pub fg: String,
    #[serde(rename = "FGA")]
    pub fga: String,
    #[serde(rename = "FG%")]
    pub fg_pct: String,
    #[serde(rename = "2P")]
    pub two_p: String,
    #[serde(rename = "2PA")]
    pub two_pa: String,
    #[serde(rename = "2P%")]
    pub two_pct: String,
    #[serde(rename = "3P")]
    pub three_p: String,
    #[serde(rename = "3PA")]
    pub three_pa: String,
    #[serde(rename = "3P%")]
    pub three_pct: String,
    #[serde(rename = "FT")]
    pub ft: String,
    #[serde(rename = "FTA")]
    pub fta: String,
    #[serde(rename = "FT%")]
    pub ft_pct: String,
    #[serde(rename = "ORB")]
    pub orb: String,
    #[serde(rename = "DRB")]
    pub drb: String,
    #[serde(rename = "TRB")]
    pub trb: String,
    #[serde(rename = "AST")]
    pub ast: String,
    #[serde(rename = "STL")]
    pub stl: String,
    #[serde(rename = "BLK")]
    pub blk: String,
    #[serde(rename = "TOV")]
    pub tov: String,
    #[serde(rename = "PF")]
    pub pf: String,
    #[serde(rename = "PTS")]
    pub pts: String,
}

impl Record for BoxscoreRow {
    const COLUMNS: &'static [&'static str] = &[
        "Name", "MP", "FG", "FGA", "FG%", "2P", "2PA", "2P%", "3P", "3PA", "3P%", "FT", "FTA",
        "FT%", "ORB", "DRB", "TRB", "AST", "STL", "BLK", "TOV", "PF", "PTS",
    ];
}

impl BoxscoreRow {
    pub fn from_cells(cells: Vec<String>) -> Result<Self, SchemaError> {
        let [name, mp, fg, fga, fg_pct, two_p, two_pa, two_pct, three_p, three_pa, three_pct, ft, fta, ft_pct, orb, drb, trb, ast, stl, blk, tov, pf, pts] =
            into_array::<BOXSCORE_WIDTH>(cells)?;
        Ok(Self {
            name,
            mp,
            fg,
            fga,
            fg_pct,
            two_p,
            two_pa,
            two_pct,
            three_p,
            three_pa,
            three_pct,
            ft,
            fta,
            ft_pct,
            orb,
            drb,
            trb,
            ast,
            stl,
            blk,
            tov,
            pf,
            pts,
        })
    }
}
