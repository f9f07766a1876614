//! HTML table flattening.
//!
//! Rows come out as ordered cell text; the fixed schemas are imposed later by
//! [`Table::conform`] and the typed records in [`crate::records`].

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// A table that does not fit the shape its caller expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("no table with id '{0}'")]
    MissingTable(String),
    #[error("table '{0}' has no body")]
    MissingBody(String),
    #[error("expected {expected} columns, found {found}")]
    Width { expected: usize, found: usize },
    #[error("invalid CSS selector '{0}'")]
    Selector(String),
}

/// Flattened body rows of one HTML table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Collects the text of every child element cell (`th` or `td`) of each row.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ElementRef<'a>>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.children()
                    .filter_map(ElementRef::wrap)
                    .map(|cell| cell.text().collect::<String>())
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn from_cells(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Removes column `index` from every row long enough to have it.
    pub fn drop_column(&mut self, index: usize) {
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
    }

    /// Pads short rows with empty cells and checks the width.
    ///
    /// Short rows are normal (a "Did Not Play" row spans most of the stat
    /// columns); a table whose widest row differs from `columns` is not.
    pub fn conform(self, columns: usize) -> Result<Vec<Vec<String>>, SchemaError> {
        let found = self.width();
        if found != columns {
            return Err(SchemaError::Width {
                expected: columns,
                found,
            });
        }
        Ok(self
            .rows
            .into_iter()
            .map(|mut row| {
                row.resize(columns, String::new());
                row
            })
            .collect())
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector, SchemaError> {
    Selector::parse(css).map_err(|_| SchemaError::Selector(css.to_string()))
}

/// Finds a `<table>` by its `id` attribute.
pub fn find_table<'a>(document: &'a Html, id: &str) -> Result<ElementRef<'a>, SchemaError> {
    let tables = selector("table")?;
    document
        .select(&tables)
        .find(|table| table.value().attr("id") == Some(id))
        .ok_or_else(|| SchemaError::MissingTable(id.to_string()))
}

/// Rows of the first `<tbody>` of `table`.
///
/// With `unclassed_only`, rows carrying a non-empty `class` (repeated header
/// rows such as `thead` or spacer rows) are skipped.
pub fn body_rows<'a>(
    table: ElementRef<'a>,
    unclassed_only: bool,
) -> Result<Vec<ElementRef<'a>>, SchemaError> {
    let tbody = selector("tbody")?;
    let tr = selector("tr")?;
    let id = table.value().attr("id").unwrap_or_default();
    let body = table
        .select(&tbody)
        .next()
        .ok_or_else(|| SchemaError::MissingBody(id.to_string()))?;
    Ok(body
        .select(&tr)
        .filter(|row| !unclassed_only || is_unclassed(row))
        .collect())
}

fn is_unclassed(row: &ElementRef<'_>) -> bool {
    row.value()
        .attr("class")
        .map_or(true, |class| class.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"
<html><body>
<table id="stats">
  <thead><tr><th>Name</th><th>PTS</th></tr></thead>
  <tbody>
    <tr><th>Alpha <a href="/a">One</a></th><td>10</td></tr>
    <tr class="thead"><th>Reserves</th><td>PTS</td></tr>
    <tr class=""><th>Beta Two</th><td>4</td></tr>
    <tr><th>Gamma Three</th><td colspan="1">Did Not Play</td></tr>
  </tbody>
</table>
</body></html>
"#;

    #[test]
    fn flattens_rows_in_document_order() {
        let doc = Html::parse_document(HTML);
        let table = find_table(&doc, "stats").unwrap();
        let rows = body_rows(table, false).unwrap();
        let table = Table::from_rows(rows);
        assert_eq!(table.len(), 4);
        assert_eq!(table.rows()[0], vec!["Alpha One", "10"]);
        assert_eq!(table.rows()[1], vec!["Reserves", "PTS"]);
    }

    #[test]
    fn skips_classed_rows_when_asked() {
        let doc = Html::parse_document(HTML);
        let table = find_table(&doc, "stats").unwrap();
        let table = Table::from_rows(body_rows(table, true).unwrap());
        let names: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["Alpha One", "Beta Two", "Gamma Three"]);
    }

    #[test]
    fn missing_table_is_reported_by_id() {
        let doc = Html::parse_document(HTML);
        assert_eq!(
            find_table(&doc, "roster").unwrap_err(),
            SchemaError::MissingTable("roster".to_string())
        );
    }

    #[test]
    fn drop_column_removes_from_every_row() {
        let mut table = Table::from_cells(vec![
            vec!["a".into(), "b".into(), "c".into()],
            vec!["d".into(), "e".into()],
        ]);
        table.drop_column(2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.rows()[0], vec!["a", "b"]);
        assert_eq!(table.rows()[1], vec!["d", "e"]);
    }

    #[test]
    fn conform_pads_short_rows() {
        let table = Table::from_cells(vec![
            vec!["a".into(), "1".into(), "2".into()],
            vec!["b".into(), "Did Not Play".into()],
        ]);
        let rows = table.conform(3).unwrap();
        assert_eq!(rows[1], vec!["b", "Did Not Play", ""]);
    }

    #[test]
    fn conform_rejects_wrong_width() {
        let table = Table::from_cells(vec![vec!["a".into(), "b".into()]]);
        assert_eq!(
            table.conform(3).unwrap_err(),
            SchemaError::Width { expected: 3, found: 2 }
        );
        assert_eq!(
            Table::default().conform(9).unwrap_err(),
            SchemaError::Width { expected: 9, found: 0 }
        );
    }
}
