use anyhow::{bail, Result};
use hoopstats_lib::{GameResult, Physiology, PlayerLine, RosterEntry};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self> {
        Ok(match name.trim().to_lowercase().as_str() {
            "table" => Self::Table,
            "json" => Self::Json,
            "csv" => Self::Csv,
            "markdown" | "md" => Self::Markdown,
            other => bail!(
                "unknown output format '{}'. Valid formats: table, json, csv, markdown",
                other
            ),
        })
    }
}

#[derive(Tabled, Serialize)]
struct PlayerRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "#")]
    #[serde(rename = "Number")]
    number: i64,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: f64,
    #[tabled(rename = "Pos")]
    #[serde(rename = "Position")]
    position: String,
    #[tabled(rename = "Height")]
    #[serde(rename = "Height")]
    height: u32,
    #[tabled(rename = "Weight")]
    #[serde(rename = "Weight")]
    weight: String,
    #[tabled(rename = "PPG")]
    #[serde(rename = "PPG")]
    ppg: f64,
    #[tabled(rename = "RPG")]
    #[serde(rename = "RPG")]
    rpg: f64,
    #[tabled(rename = "APG")]
    #[serde(rename = "APG")]
    apg: f64,
}

#[derive(Tabled, Serialize)]
struct GameRow {
    #[tabled(rename = "Game")]
    #[serde(rename = "Game")]
    game: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Opponent")]
    #[serde(rename = "Opponent")]
    opponent: String,
    #[tabled(rename = "Outcome")]
    #[serde(rename = "Outcome")]
    outcome: u8,
    #[tabled(rename = "Team Points")]
    #[serde(rename = "Team Points")]
    team_points: i64,
    #[tabled(rename = "Opponent Points")]
    #[serde(rename = "Opponent Points")]
    opponent_points: i64,
}

#[derive(Tabled, Serialize)]
struct StatLineRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "MP")]
    #[serde(rename = "MP")]
    mp: f64,
    #[tabled(rename = "FG")]
    #[serde(rename = "FG")]
    fg: i64,
    #[tabled(rename = "FGA")]
    #[serde(rename = "FGA")]
    fga: i64,
    #[tabled(rename = "2P")]
    #[serde(rename = "2P")]
    two_p: i64,
    #[tabled(rename = "2PA")]
    #[serde(rename = "2PA")]
    two_pa: i64,
    #[tabled(rename = "3P")]
    #[serde(rename = "3P")]
    three_p: i64,
    #[tabled(rename = "3PA")]
    #[serde(rename = "3PA")]
    three_pa: i64,
    #[tabled(rename = "FT")]
    #[serde(rename = "FT")]
    ft: i64,
    #[tabled(rename = "FTA")]
    #[serde(rename = "FTA")]
    fta: i64,
    #[tabled(rename = "ORB")]
    #[serde(rename = "ORB")]
    orb: i64,
    #[tabled(rename = "DRB")]
    #[serde(rename = "DRB")]
    drb: i64,
    #[tabled(rename = "AST")]
    #[serde(rename = "AST")]
    ast: i64,
    #[tabled(rename = "STL")]
    #[serde(rename = "STL")]
    stl: i64,
    #[tabled(rename = "BLK")]
    #[serde(rename = "BLK")]
    blk: i64,
    #[tabled(rename = "TOV")]
    #[serde(rename = "TOV")]
    tov: i64,
    #[tabled(rename = "PF")]
    #[serde(rename = "PF")]
    pf: i64,
    #[tabled(rename = "PTS")]
    #[serde(rename = "PTS")]
    pts: i64,
}

#[derive(Tabled, Serialize)]
struct PhysiologyRow {
    #[tabled(rename = "School")]
    #[serde(rename = "School")]
    school: String,
    #[tabled(rename = "Game")]
    #[serde(rename = "Game")]
    game: String,
    #[tabled(rename = "Players")]
    #[serde(rename = "Players")]
    players: usize,
    #[tabled(rename = "Height (in)")]
    #[serde(rename = "Height")]
    height: String,
    #[tabled(rename = "Weight (lbs)")]
    #[serde(rename = "Weight")]
    weight: String,
}

// -- Row builders --

fn build_player_rows(roster: &[RosterEntry]) -> Vec<PlayerRow> {
    roster
        .iter()
        .map(|p| PlayerRow {
            name: p.name.clone(),
            number: p.number,
            year: p.year,
            position: p.position.clone(),
            height: p.height,
            weight: p.weight.map(|w| format!("{:.0}", w)).unwrap_or_default(),
            ppg: p.ppg,
            rpg: p.rpg,
            apg: p.apg,
        })
        .collect()
}

fn build_game_rows(games: &[GameResult]) -> Vec<GameRow> {
    games
        .iter()
        .map(|g| GameRow {
            game: g.game.clone(),
            date: g.date.clone(),
            opponent: g.opponent.clone(),
            outcome: g.outcome,
            team_points: g.team_points,
            opponent_points: g.opponent_points,
        })
        .collect()
}

fn build_stat_line_rows(lines: &[PlayerLine]) -> Vec<StatLineRow> {
    lines
        .iter()
        .map(|l| StatLineRow {
            name: l.name.clone(),
            mp: l.mp,
            fg: l.fg,
            fga: l.fga,
            two_p: l.two_p,
            two_pa: l.two_pa,
            three_p: l.three_p,
            three_pa: l.three_pa,
            ft: l.ft,
            fta: l.fta,
            orb: l.orb,
            drb: l.drb,
            ast: l.ast,
            stl: l.stl,
            blk: l.blk,
            tov: l.tov,
            pf: l.pf,
            pts: l.pts,
        })
        .collect()
}

fn build_physiology_row(
    school: &str,
    game: &str,
    players: usize,
    p: &Physiology,
) -> PhysiologyRow {
    PhysiologyRow {
        school: school.to_string(),
        game: game.to_string(),
        players,
        height: format!("{:.1}", p.height),
        weight: format!("{:.1}", p.weight),
    }
}

// -- Rendering --

fn render<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            table.to_string()
        }
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            {
                let mut wtr = csv::Writer::from_writer(&mut buf);
                for row in rows {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
            }
            String::from_utf8(buf)?
        }
    })
}

fn print<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    let rendered = render(rows, format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub fn print_roster(roster: &[RosterEntry], format: &OutputFormat) -> Result<()> {
    print(&build_player_rows(roster), format)
}

pub fn print_schedule(games: &[GameResult], format: &OutputFormat) -> Result<()> {
    print(&build_game_rows(games), format)
}

pub fn print_boxscore(lines: &[PlayerLine], format: &OutputFormat) -> Result<()> {
    print(&build_stat_line_rows(lines), format)
}

pub fn print_physiology(
    school: &str,
    game: &str,
    players: usize,
    physiology: &Physiology,
    format: &OutputFormat,
) -> Result<()> {
    print(
        &[build_physiology_row(school, game, players, physiology)],
        format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, weight: Option<f64>) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            number: 35,
            year: 1.0,
            position: "F".to_string(),
            height: 83,
            weight,
            ppg: 21.0,
            rpg: 11.1,
            apg: 1.5,
        }
    }

    fn game() -> GameResult {
        GameResult {
            game: "1".to_string(),
            date: "2017-11-10-19".to_string(),
            opponent: "elon".to_string(),
            outcome: 1,
            team_points: 97,
            opponent_points: 68,
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("MD").unwrap(), OutputFormat::Markdown);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_build_player_rows_missing_weight() {
        let rows = build_player_rows(&[
            entry("Marvin Bagley III", Some(234.0)),
            entry("Walk On", None),
        ]);
        assert_eq!(rows[0].weight, "234");
        assert_eq!(rows[1].weight, "");
    }

    #[test]
    fn test_render_csv_has_header() {
        let out = render(&build_game_rows(&[game()]), &OutputFormat::Csv).unwrap();
        insta::assert_snapshot!(out, @r###"
        Game,Date,Opponent,Outcome,Team Points,Opponent Points
        1,2017-11-10-19,elon,1,97,68
        "###);
    }

    #[test]
    fn test_render_json_uses_column_names() {
        let out = render(&build_game_rows(&[game()]), &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["Opponent"], "elon");
        assert_eq!(value[0]["Team Points"], 97);
    }

    #[test]
    fn test_render_markdown_table() {
        let out = render(&build_game_rows(&[game()]), &OutputFormat::Markdown).unwrap();
        assert!(out.starts_with("| Game |"));
        assert!(out.contains("| elon "));
    }

    #[test]
    fn test_physiology_row_rounding() {
        let row = build_physiology_row(
            "duke",
            "2018-02-08-21",
            6,
            &Physiology {
                weight: 212.345,
                height: 77.96,
            },
        );
        assert_eq!(row.height, "78.0");
        assert_eq!(row.weight, "212.3");
    }
}
