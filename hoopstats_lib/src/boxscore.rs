//! Boxscore resolution: schedule row to a pair of per-school stat files.
//!
//! The site indexes a game's boxscore page under only one of the two teams.
//! Away games live under the opponent, home games under the school, and
//! neutral-site games under either. The first URL follows the home/away
//! marker; a 404 flips to the other team once.
//!
//! Inside the page each team's table is `box-score-basic-<slug>`. The table
//! slug occasionally differs from the URL slug the override map produces, so
//! the opponent table is looked up a second time under the gently cleaned
//! name before giving up.

use scraper::Html;

use crate::crawler::Crawler;
use crate::error::HoopsError;
use crate::game::GameKey;
use crate::records::{BoxscoreRow, ScheduleRow, BOXSCORE_WIDTH};
use crate::report::{FailureKind, FailureReport};
use crate::store::write_records;
use crate::table::{body_rows, find_table, SchemaError, Table};

const TABLE_ID_PREFIX: &str = "box-score-basic-";

/// What happened to one scheduled game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxscoreOutcome {
    /// Both files were on disk; no request was made.
    AlreadyFetched,
    /// Both files were written. `recovered` is set when the opponent table
    /// was only found under the gently cleaned name.
    Written { url: String, recovered: bool },
    /// Both candidate URLs answered 404.
    NotFound { url: String },
    /// A non-404 failure, or tables that do not fit the boxscore schema.
    Failed { url: String },
    /// The page loaded but a team's table could not be located.
    UnresolvedTables { url: String },
}

/// Slugs to try for the boxscore URL, in order.
///
/// When the school was the visitor the page is expected under the opponent;
/// home and neutral-site games start with the school.
pub fn url_schools<'a>(school: &'a str, opponent: &'a str, away: bool) -> [&'a str; 2] {
    if away {
        [opponent, school]
    } else {
        [school, opponent]
    }
}

/// Both teams' stat tables from one boxscore page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePair {
    pub school: Table,
    pub opponent: Table,
    /// Set when the opponent table needed the fallback slug.
    pub recovered: bool,
}

fn stat_table(document: &Html, slug: &str) -> Result<Table, SchemaError> {
    let table = find_table(document, &format!("{}{}", TABLE_ID_PREFIX, slug))?;
    Ok(Table::from_rows(body_rows(table, true)?))
}

/// Locates both tables, trying `opponent` first and `fallback` second.
pub fn extract_table_pair(
    html: &str,
    school: &str,
    opponent: &str,
    fallback: &str,
) -> Result<TablePair, SchemaError> {
    let document = Html::parse_document(html);
    let lookup = |opponent_slug: &str| -> Result<(Table, Table), SchemaError> {
        Ok((
            stat_table(&document, school)?,
            stat_table(&document, opponent_slug)?,
        ))
    };

    let (school_table, opponent_table, recovered) = match lookup(opponent) {
        Ok((s, o)) => (s, o, false),
        Err(first) => {
            tracing::warn!("Bad name ({}). Attempting to recover.", first);
            let (s, o) = lookup(fallback)?;
            tracing::info!("Recovered with '{}'", fallback);
            (s, o, true)
        }
    };

    Ok(TablePair {
        school: school_table,
        opponent: opponent_table,
        recovered,
    })
}

fn conform_rows(table: Table) -> Result<Vec<BoxscoreRow>, SchemaError> {
    table
        .conform(BOXSCORE_WIDTH)?
        .into_iter()
        .map(BoxscoreRow::from_cells)
        .collect()
}

impl Crawler {
    /// Resolves, fetches and persists the boxscore pair for one schedule row.
    ///
    /// Fetch and table failures are recorded under the last URL tried and
    /// reported through the outcome. An unparseable date or time is an error:
    /// schedule files are expected to be well formed once written.
    pub async fn fetch_boxscore(
        &self,
        school: &str,
        row: &ScheduleRow,
        report: &mut FailureReport,
    ) -> Result<BoxscoreOutcome, HoopsError> {
        let key = GameKey::from_schedule(&row.date, &row.time)?;
        let opponent = self.names().clean(&row.opponent);

        tracing::info!(
            "Getting BOXSCORE for game between {} and {}",
            school.to_uppercase(),
            opponent.to_uppercase()
        );

        let store = self.store();
        let school_path = store.boxscore_path(school, &key);
        let opponent_path = store.boxscore_path(&opponent, &key);
        if school_path.is_file() && opponent_path.is_file() {
            return Ok(BoxscoreOutcome::AlreadyFetched);
        }

        let locator = self.client().locator();
        let [primary, backup] = url_schools(school, &opponent, row.is_away());

        let mut url = locator.boxscore_url(primary, &key.date, &key.hour);
        tracing::info!("Requesting: {}", url);
        let mut result = self.client().fetch_page(&url).await;

        if matches!(&result, Err(e) if e.is_not_found()) {
            url = locator.boxscore_url(backup, &key.date, &key.hour);
            tracing::info!("URL failed, attempting to use backup: {}", url);
            result = self.client().fetch_page(&url).await;
        }

        let html = match result {
            Ok(html) => html,
            Err(e) if e.is_not_found() => {
                tracing::warn!("Failed to get boxscore: {}", url);
                report.record(FailureKind::Boxscore, url.as_str());
                return Ok(BoxscoreOutcome::NotFound { url });
            }
            Err(e) => {
                tracing::warn!("Failed to get boxscore {}: {}", url, e);
                report.record(FailureKind::Boxscore, url.as_str());
                return Ok(BoxscoreOutcome::Failed { url });
            }
        };

        let fallback = self.names().gentle_clean(&row.opponent);
        let pair = match extract_table_pair(&html, school, &opponent, &fallback) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(
                    "Could not select boxscore tables ({}). Teams involved were {} and {}; \
                     the latter likely needs an entry in the opponent map",
                    e,
                    school,
                    opponent
                );
                report.record(FailureKind::Boxscore, url.as_str());
                return Ok(BoxscoreOutcome::UnresolvedTables { url });
            }
        };

        let recovered = pair.recovered;
        let rows = conform_rows(pair.school).and_then(|s| Ok((s, conform_rows(pair.opponent)?)));
        let (school_rows, opponent_rows) = match rows {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Unusable boxscore tables at {}: {}", url, e);
                report.record(FailureKind::Boxscore, url.as_str());
                return Ok(BoxscoreOutcome::Failed { url });
            }
        };

        write_records(&school_path, &school_rows)?;
        write_records(&opponent_path, &opponent_rows)?;
        Ok(BoxscoreOutcome::Written { url, recovered })
    }
}
