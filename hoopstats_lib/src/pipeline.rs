//! The four-stage crawl.

use std::fmt;
use std::str::FromStr;

use crate::boxscore::BoxscoreOutcome;
use crate::crawler::{Crawler, FetchOutcome};
use crate::error::HoopsError;
use crate::report::FailureReport;

/// One pass over the school list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Rosters,
    Schedules,
    OpponentRosters,
    Boxscores,
}

impl Stage {
    /// Execution order.
    pub const ALL: [Stage; 4] = [
        Self::Rosters,
        Self::Schedules,
        Self::OpponentRosters,
        Self::Boxscores,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rosters => "rosters",
            Self::Schedules => "schedules",
            Self::OpponentRosters => "opponent-rosters",
            Self::Boxscores => "boxscores",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == s.trim().to_lowercase())
            .ok_or_else(|| {
                HoopsError::Parse(format!(
                    "unknown stage '{}'. Valid stages: rosters, schedules, opponent-rosters, boxscores",
                    s
                ))
            })
    }
}

/// Artifact counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub rosters_written: usize,
    pub schedules_written: usize,
    pub boxscores_written: usize,
    pub skipped: usize,
}

fn tally(outcome: FetchOutcome, written: &mut usize, skipped: &mut usize) {
    match outcome {
        FetchOutcome::Written => *written += 1,
        FetchOutcome::AlreadyFetched => *skipped += 1,
        FetchOutcome::Failed => {}
    }
}

/// Result of a full run.
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    pub stats: CrawlStats,
    pub failures: FailureReport,
}

/// Runs the enabled stages over a fixed school list.
pub struct Pipeline<'a> {
    crawler: &'a Crawler,
    schools: Vec<String>,
    stages: Vec<Stage>,
}

impl<'a> Pipeline<'a> {
    /// A pipeline with every stage enabled.
    pub fn new(crawler: &'a Crawler, schools: Vec<String>) -> Self {
        Self {
            crawler,
            schools,
            stages: Stage::ALL.to_vec(),
        }
    }

    /// Restricts the run to `stages`. Order is always [`Stage::ALL`] order.
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn is_enabled(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }

    /// Runs every enabled stage, then appends the failure logs.
    ///
    /// Per-school and per-game failures are collected, not returned; only
    /// I/O errors and unparseable schedule dates/times stop the run.
    pub async fn run(&self) -> Result<CrawlSummary, HoopsError> {
        let mut summary = CrawlSummary::default();

        for stage in Stage::ALL {
            if !self.is_enabled(stage) {
                tracing::debug!("Stage {} disabled", stage);
                continue;
            }
            tracing::info!("Starting stage {}", stage);
            match stage {
                Stage::Rosters => self.rosters(&mut summary).await?,
                Stage::Schedules => self.schedules(&mut summary).await?,
                Stage::OpponentRosters => self.opponent_rosters(&mut summary).await?,
                Stage::Boxscores => self.boxscores(&mut summary).await?,
            }
        }

        summary.failures.write_logs(self.crawler.store())?;
        Ok(summary)
    }

    async fn rosters(&self, summary: &mut CrawlSummary) -> Result<(), HoopsError> {
        for school in &self.schools {
            let outcome = self
                .crawler
                .fetch_roster(school, &mut summary.failures)
                .await?;
            let stats = &mut summary.stats;
            tally(outcome, &mut stats.rosters_written, &mut stats.skipped);
        }
        Ok(())
    }

    async fn schedules(&self, summary: &mut CrawlSummary) -> Result<(), HoopsError> {
        for school in &self.schools {
            let outcome = self
                .crawler
                .fetch_schedule(school, &mut summary.failures)
                .await?;
            let stats = &mut summary.stats;
            tally(outcome, &mut stats.schedules_written, &mut stats.skipped);
        }
        Ok(())
    }

    async fn opponent_rosters(&self, summary: &mut CrawlSummary) -> Result<(), HoopsError> {
        for school in &self.schools {
            tracing::info!("Getting rosters for schedule of {}", school.to_uppercase());
            let Some(schedule) = self.crawler.read_schedule(school)? else {
                tracing::warn!("No schedule on disk for {}, skipping opponents", school);
                continue;
            };
            for row in &schedule {
                let opponent = self.crawler.names().clean(&row.opponent);
                let outcome = self
                    .crawler
                    .fetch_roster(&opponent, &mut summary.failures)
                    .await?;
                let stats = &mut summary.stats;
                tally(outcome, &mut stats.rosters_written, &mut stats.skipped);
            }
        }
        Ok(())
    }

    async fn boxscores(&self, summary: &mut CrawlSummary) -> Result<(), HoopsError> {
        for school in &self.schools {
            let Some(schedule) = self.crawler.read_schedule(school)? else {
                tracing::warn!("No schedule on disk for {}, skipping boxscores", school);
                continue;
            };
            // The last row is the unplayed tournament game.
            let played = schedule.split_last().map_or(&[][..], |(_, rest)| rest);
            for row in played {
                let outcome = self
                    .crawler
                    .fetch_boxscore(school, row, &mut summary.failures)
                    .await?;
                match outcome {
                    BoxscoreOutcome::Written { .. } => summary.stats.boxscores_written += 1,
                    BoxscoreOutcome::AlreadyFetched => summary.stats.skipped += 1,
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_parse_by_name() {
        assert_eq!("rosters".parse::<Stage>().unwrap(), Stage::Rosters);
        assert_eq!(
            "Opponent-Rosters".parse::<Stage>().unwrap(),
            Stage::OpponentRosters
        );
        assert!("players".parse::<Stage>().is_err());
    }

    #[test]
    fn stage_order_is_fixed() {
        let names: Vec<&str> = Stage::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["rosters", "schedules", "opponent-rosters", "boxscores"]
        );
    }

    #[test]
    fn fetch_outcomes_are_counted() {
        let mut stats = CrawlStats::default();
        tally(FetchOutcome::Written, &mut stats.rosters_written, &mut stats.skipped);
        tally(FetchOutcome::AlreadyFetched, &mut stats.rosters_written, &mut stats.skipped);
        tally(FetchOutcome::Failed, &mut stats.schedules_written, &mut stats.skipped);
        assert_eq!(stats.rosters_written, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.schedules_written, 0);
    }
}
