//! Schedule pages: `table#schedule` to `schedules/<school>-schedule.csv`.

use scraper::Html;

use crate::crawler::{Crawler, FetchOutcome};
use crate::error::HoopsError;
use crate::records::{ScheduleRow, SCHEDULE_WIDTH};
use crate::report::{FailureKind, FailureReport};
use crate::store::{read_records, write_records};
use crate::table::{body_rows, find_table, SchemaError, Table};

pub const SCHEDULE_TABLE_ID: &str = "schedule";

/// Extracts and conforms the schedule table of a schedule page.
///
/// Classed body rows (repeated headers) are skipped.
pub fn parse_schedule_page(html: &str) -> Result<Vec<ScheduleRow>, SchemaError> {
    let document = Html::parse_document(html);
    let table = find_table(&document, SCHEDULE_TABLE_ID)?;
    Table::from_rows(body_rows(table, true)?)
        .conform(SCHEDULE_WIDTH)?
        .into_iter()
        .map(ScheduleRow::from_cells)
        .collect()
}

impl Crawler {
    /// Fetches and persists one school's schedule unless it is already on disk.
    pub async fn fetch_schedule(
        &self,
        school: &str,
        report: &mut FailureReport,
    ) -> Result<FetchOutcome, HoopsError> {
        tracing::info!("Retrieving SCHEDULE for {}", school.to_uppercase());
        let path = self.store().schedule_path(school);
        if path.is_file() {
            tracing::debug!("{} exists, skipping", path.display());
            return Ok(FetchOutcome::AlreadyFetched);
        }

        let html = match self.client().schedule_page(school).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to get SCHEDULE for {}: {}", school.to_uppercase(), e);
                report.record(FailureKind::Schedule, school);
                return Ok(FetchOutcome::Failed);
            }
        };

        let rows = match parse_schedule_page(&html) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Unusable SCHEDULE for {}: {}", school.to_uppercase(), e);
                report.record(FailureKind::Schedule, school);
                return Ok(FetchOutcome::Failed);
            }
        };

        write_records(&path, &rows)?;
        Ok(FetchOutcome::Written)
    }

    /// Reads a persisted schedule, or `None` when the school has none on disk.
    pub fn read_schedule(&self, school: &str) -> Result<Option<Vec<ScheduleRow>>, HoopsError> {
        let path = self.store().schedule_path(school);
        if !path.is_file() {
            return Ok(None);
        }
        read_records(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body><table id="schedule"><tbody>
<tr><th>1</th><td>Fri, Nov 10, 2017</td><td>7:00p</td><td>REG</td><td></td><td>Elon</td><td></td><td>W</td><td>97</td><td>68</td><td></td><td>1</td><td>0</td><td>W 1</td><td>Cameron Indoor Stadium</td></tr>
<tr class="thead"><th>G</th><td>Date</td><td>Time</td><td>Type</td><td></td><td>Opponent</td><td>Conf</td><td></td><td>Tm</td><td>Opp</td><td>OT</td><td>W</td><td>L</td><td>Streak</td><td>Arena</td></tr>
<tr><th>2</th><td>Tue, Nov 14, 2017</td><td>9:30p</td><td>REG</td><td>N</td><td>(2) Michigan State</td><td>Big Ten</td><td>W</td><td>88</td><td>81</td><td></td><td>2</td><td>0</td><td>W 2</td><td>United Center</td></tr>
</tbody></table></body></html>"#;

    #[test]
    fn header_rows_inside_body_are_skipped() {
        let rows = parse_schedule_page(PAGE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].opponent, "Elon");
        assert_eq!(rows[1].game, "2");
        assert_eq!(rows[1].home_away, "N");
        assert_eq!(rows[1].arena, "United Center");
    }

    #[test]
    fn wrong_width_is_a_schema_error() {
        let page = r#"<table id="schedule"><tbody><tr><th>1</th><td>x</td></tr></tbody></table>"#;
        assert_eq!(
            parse_schedule_page(page).unwrap_err(),
            SchemaError::Width { expected: 15, found: 2 }
        );
    }
}
