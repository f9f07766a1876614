//! The `crawl` subcommand: run the fetch pipeline into the data directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hoopstats_lib::seed;
use hoopstats_lib::{Client, Crawler, FailureKind, Locator, Pipeline, Stage, Store};

#[derive(Args)]
pub struct CrawlArgs {
    /// Stage to run: rosters, schedules, opponent-rosters, boxscores (repeatable; default all)
    #[arg(long = "stage")]
    pub stages: Vec<String>,

    /// YAML school list replacing the built-in one
    #[arg(long)]
    pub schools_file: Option<PathBuf>,

    /// YAML opponent alias map replacing the built-in one
    #[arg(long)]
    pub opponent_map_file: Option<PathBuf>,

    /// Crawl only these schools (repeatable; overrides the school list)
    #[arg(long = "school")]
    pub schools: Vec<String>,
}

pub async fn run(args: &CrawlArgs, locator: Locator, store: Store) -> Result<()> {
    let stages = if args.stages.is_empty() {
        Stage::ALL.to_vec()
    } else {
        args.stages
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<Stage>, _>>()?
    };

    let schools = if !args.schools.is_empty() {
        args.schools.clone()
    } else if let Some(ref path) = args.schools_file {
        seed::load_schools_from(path)?
    } else {
        seed::load_schools()?
    };

    let names = super::team_names(args.opponent_map_file.as_ref())?;

    eprintln!(
        "Crawling {} schools from {} (season {}) into {}",
        schools.len(),
        locator.base_url(),
        locator.season(),
        store.root().display()
    );
    tracing::debug!("{} opponent overrides loaded", names.override_count());

    let crawler = Crawler::new(Client::with_locator(locator)?, store, names);
    let summary = Pipeline::new(&crawler, schools)
        .with_stages(stages)
        .run()
        .await?;

    let stats = &summary.stats;
    eprintln!(
        "Done: {} rosters, {} schedules, {} boxscores written; {} already on disk",
        stats.rosters_written, stats.schedules_written, stats.boxscores_written, stats.skipped
    );
    for kind in FailureKind::ALL {
        let count = summary.failures.count(kind);
        if count > 0 {
            eprintln!(
                "{} {} failures logged to {}",
                count,
                kind,
                crawler.store().failure_log_path(kind).display()
            );
        }
    }

    Ok(())
}
