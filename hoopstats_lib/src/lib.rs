//! Library layer for hoopstats: crawl pipeline, artifact store and loaders.
//!
//! Drives the `sportsref_api` page client over a list of schools, extracts
//! the roster, schedule and boxscore tables, persists them as CSV, and loads
//! them back as cleaned, typed rows.

pub mod boxscore;
pub mod clean;
pub mod crawler;
pub mod error;
pub mod game;
pub mod names;
pub mod physiology;
pub mod pipeline;
pub mod records;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod seed;
pub mod store;
pub mod table;

pub use sportsref_api;
pub use sportsref_api::{Client, Locator};

pub use boxscore::BoxscoreOutcome;
pub use clean::{GameResult, PlayerLine, RosterEntry};
pub use crawler::{Crawler, FetchOutcome};
pub use error::HoopsError;
pub use game::GameKey;
pub use names::TeamNames;
pub use physiology::Physiology;
pub use pipeline::{CrawlStats, CrawlSummary, Pipeline, Stage};
pub use records::{BoxscoreRow, Record, RosterRow, ScheduleRow};
pub use report::{FailureKind, FailureReport};
pub use seed::SeedDataError;
pub use store::Store;
pub use table::SchemaError;
