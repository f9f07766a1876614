//! On-disk layout of crawled artifacts and CSV reading/writing.
//!
//! Files carry a header row and a leading unnamed positional index column.
//! Writes go to a `.part` sibling first and are renamed into place, so a file
//! under its final name is always complete.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::HoopsError;
use crate::game::GameKey;
use crate::records::Record;
use crate::report::FailureKind;

pub const ROSTER_DIR: &str = "rosters";
pub const SCHEDULE_DIR: &str = "schedules";
pub const BOXSCORE_DIR: &str = "boxscores";

/// Paths of every artifact under one data root.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `rosters/<school>-roster.csv`
    pub fn roster_path(&self, school: &str) -> PathBuf {
        self.root
            .join(ROSTER_DIR)
            .join(format!("{}-roster.csv", school))
    }

    /// `schedules/<school>-schedule.csv`
    pub fn schedule_path(&self, school: &str) -> PathBuf {
        self.root
            .join(SCHEDULE_DIR)
            .join(format!("{}-schedule.csv", school))
    }

    /// `boxscores/<school>-<date>-<hour>-boxscore.csv`
    pub fn boxscore_path(&self, school: &str, key: &GameKey) -> PathBuf {
        self.root.join(BOXSCORE_DIR).join(format!(
            "{}-{}-{}-boxscore.csv",
            school, key.date, key.hour
        ))
    }

    pub fn failure_log_path(&self, kind: FailureKind) -> PathBuf {
        self.root.join(kind.log_file_name())
    }

    /// Appends lines to a log file, creating it when missing.
    pub fn append_lines<'a, I>(&self, path: &Path, lines: I) -> Result<(), HoopsError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

/// Serializes rows with a header and positional index into any writer.
pub fn write_records_to<W: Write, R: Record>(writer: W, rows: &[R]) -> Result<(), HoopsError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(std::iter::once("").chain(R::COLUMNS.iter().copied()))?;
    for (index, row) in rows.iter().enumerate() {
        wtr.write_field(index.to_string())?;
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes rows to `path`, creating parent directories as needed.
pub fn write_records<R: Record>(path: &Path, rows: &[R]) -> Result<(), HoopsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    write_records_to(fs::File::create(&partial)?, rows)?;
    fs::rename(&partial, path)?;
    Ok(())
}

/// Reads rows back by header name; the index column is ignored.
pub fn read_records<R: Record>(path: &Path) -> Result<Vec<R>, HoopsError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
