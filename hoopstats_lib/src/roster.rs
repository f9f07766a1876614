//! Roster pages: `table#roster` to `rosters/<school>-roster.csv`.

use scraper::Html;

use crate::crawler::{Crawler, FetchOutcome};
use crate::error::HoopsError;
use crate::records::{RosterRow, ROSTER_WIDTH};
use crate::report::{FailureKind, FailureReport};
use crate::store::write_records;
use crate::table::{body_rows, find_table, SchemaError, Table};

pub const ROSTER_TABLE_ID: &str = "roster";

/// Some high-level programs list an extra RSCI ranking column.
const RSCI_WIDTH: usize = 10;
const RSCI_COLUMN: usize = 8;

/// Extracts and conforms the roster table of a roster page.
pub fn parse_roster_page(html: &str) -> Result<Vec<RosterRow>, SchemaError> {
    let document = Html::parse_document(html);
    let table = find_table(&document, ROSTER_TABLE_ID)?;
    let mut table = Table::from_rows(body_rows(table, false)?);
    if table.width() == RSCI_WIDTH {
        table.drop_column(RSCI_COLUMN);
    }
    table
        .conform(ROSTER_WIDTH)?
        .into_iter()
        .map(RosterRow::from_cells)
        .collect()
}

impl Crawler {
    /// Fetches and persists one school's roster unless it is already on disk.
    ///
    /// Non-200 responses, transport errors and tables that do not fit the
    /// roster schema are recorded under the school's slug.
    pub async fn fetch_roster(
        &self,
        school: &str,
        report: &mut FailureReport,
    ) -> Result<FetchOutcome, HoopsError> {
        tracing::info!("Retrieving ROSTER for {}", school.to_uppercase());
        let path = self.store().roster_path(school);
        if path.is_file() {
            tracing::debug!("{} exists, skipping", path.display());
            return Ok(FetchOutcome::AlreadyFetched);
        }

        let html = match self.client().roster_page(school).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to get ROSTER for {}: {}", school.to_uppercase(), e);
                report.record(FailureKind::Roster, school);
                return Ok(FetchOutcome::Failed);
            }
        };

        let rows = match parse_roster_page(&html) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Unusable ROSTER for {}: {}", school.to_uppercase(), e);
                report.record(FailureKind::Roster, school);
                return Ok(FetchOutcome::Failed);
            }
        };

        write_records(&path, &rows)?;
        Ok(FetchOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(extra_column: bool) -> String {
        let rsci = if extra_column { "<td>12 (2017)</td>" } else { "" };
        format!(
            r#"<html><body><table id="roster"><tbody>
<tr><th>Trevon Duval</th><td>1</td><td>FR</td><td>G</td><td>6-3</td><td>186</td><td>Chandler, AZ</td><td>IMG Academy</td>{rsci}<td>10.3 Pts, 2.8 Reb, 5.6 Ast</td></tr>
<tr><th>Grayson Allen</th><td>3</td><td>SR</td><td>G</td><td>6-5</td><td>205</td><td>Jacksonville, FL</td><td>Providence School</td>{rsci}<td>15.5 Pts, 3.3 Reb, 4.6 Ast</td></tr>
</tbody></table></body></html>"#
        )
    }

    #[test]
    fn plain_roster_parses() {
        let rows = parse_roster_page(&page(false)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Trevon Duval");
        assert_eq!(rows[0].high_school, "IMG Academy");
        assert_eq!(rows[0].ppg.as_deref(), Some("10.3 Pts"));
    }

    #[test]
    fn rsci_column_is_dropped() {
        let rows = parse_roster_page(&page(true)).unwrap();
        assert_eq!(rows[1].name, "Grayson Allen");
        assert_eq!(rows[1].high_school, "Providence School");
        assert_eq!(rows[1].apg.as_deref(), Some("4.6 Ast"));
    }

    #[test]
    fn missing_table_is_a_schema_error() {
        assert_eq!(
            parse_roster_page("<html><body>nothing</body></html>").unwrap_err(),
            SchemaError::MissingTable("roster".to_string())
        );
    }
}
