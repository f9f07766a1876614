//! Per-run failure bookkeeping.

use std::collections::BTreeSet;

use crate::error::HoopsError;
use crate::store::Store;

/// Which stage an identifier failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Roster,
    Schedule,
    Boxscore,
}

impl FailureKind {
    pub const ALL: [FailureKind; 3] = [Self::Roster, Self::Schedule, Self::Boxscore];

    pub fn log_file_name(self) -> &'static str {
        match self {
            Self::Roster => "roster-failures.log",
            Self::Schedule => "schedule-failures.log",
            Self::Boxscore => "boxscore-failures.log",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roster => write!(f, "roster"),
            Self::Schedule => write!(f, "schedule"),
            Self::Boxscore => write!(f, "boxscore"),
        }
    }
}

/// Identifiers that failed during one run, deduplicated per stage.
///
/// Rosters and schedules record school slugs; boxscores record the last URL
/// tried for the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    rosters: BTreeSet<String>,
    schedules: BTreeSet<String>,
    boxscores: BTreeSet<String>,
}

impl FailureReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, kind: FailureKind) -> &BTreeSet<String> {
        match kind {
            FailureKind::Roster => &self.rosters,
            FailureKind::Schedule => &self.schedules,
            FailureKind::Boxscore => &self.boxscores,
        }
    }

    fn set_mut(&mut self, kind: FailureKind) -> &mut BTreeSet<String> {
        match kind {
            FailureKind::Roster => &mut self.rosters,
            FailureKind::Schedule => &mut self.schedules,
            FailureKind::Boxscore => &mut self.boxscores,
        }
    }

    pub fn record(&mut self, kind: FailureKind, id: impl Into<String>) {
        self.set_mut(kind).insert(id.into());
    }

    pub fn failures(&self, kind: FailureKind) -> impl Iterator<Item = &str> {
        self.set(kind).iter().map(String::as_str)
    }

    pub fn count(&self, kind: FailureKind) -> usize {
        self.set(kind).len()
    }

    pub fn contains(&self, kind: FailureKind, id: &str) -> bool {
        self.set(kind).contains(id)
    }

    pub fn is_empty(&self) -> bool {
        FailureKind::ALL.iter().all(|kind| self.set(*kind).is_empty())
    }

    /// Appends each stage's identifiers to its log file, one per line.
    ///
    /// All three files are touched even when a stage had no failures.
    pub fn write_logs(&self, store: &Store) -> Result<(), HoopsError> {
        std::fs::create_dir_all(store.root())?;
        for kind in FailureKind::ALL {
            store.append_lines(&store.failure_log_path(kind), self.failures(kind))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_deduplicated() {
        let mut report = FailureReport::new();
        report.record(FailureKind::Roster, "duke");
        report.record(FailureKind::Roster, "duke");
        report.record(FailureKind::Schedule, "duke");
        assert_eq!(report.count(FailureKind::Roster), 1);
        assert_eq!(report.count(FailureKind::Schedule), 1);
        assert_eq!(report.count(FailureKind::Boxscore), 0);
        assert!(!report.is_empty());
    }

    #[test]
    fn logs_are_appended_per_stage() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut report = FailureReport::new();
        report.record(FailureKind::Schedule, "villanova");
        report.write_logs(&store).unwrap();

        let mut again = FailureReport::new();
        again.record(FailureKind::Schedule, "xavier");
        again.write_logs(&store).unwrap();

        let schedule_log =
            std::fs::read_to_string(store.failure_log_path(FailureKind::Schedule)).unwrap();
        assert_eq!(schedule_log, "villanova\nxavier\n");
        let roster_log =
            std::fs::read_to_string(store.failure_log_path(FailureKind::Roster)).unwrap();
        assert!(roster_log.is_empty());
    }
}
