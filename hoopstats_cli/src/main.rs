mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hoopstats_lib::sportsref_api::{DEFAULT_BASE_URL, DEFAULT_SEASON};
use hoopstats_lib::{Locator, Store};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "hoopstats")]
#[command(about = "Crawl and load college basketball rosters, schedules and boxscores")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Directory holding rosters/, schedules/, boxscores/ and the failure logs
    #[arg(long, default_value = ".", global = true)]
    data_dir: PathBuf,

    /// Site origin (defaults to HOOPSTATS_BASE_URL, then sports-reference)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Season whose pages are crawled, named by its ending year
    #[arg(long, default_value_t = DEFAULT_SEASON, global = true)]
    season: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the crawl pipeline over the school list
    Crawl(commands::crawl::CrawlArgs),
    /// Print a school's cleaned roster
    Roster(commands::roster::RosterArgs),
    /// Print a school's cleaned schedule
    Schedule(commands::schedule::ScheduleArgs),
    /// Print a school's cleaned boxscore for one game
    Boxscore(commands::boxscore::BoxscoreArgs),
    /// Print the minutes-weighted height and weight for one game
    Physiology(commands::physiology::PhysiologyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hoopstats=info".parse()?)
                .add_directive("sportsref_api=info".parse()?),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output)?;
    let store = Store::new(&cli.data_dir);

    match &cli.command {
        Commands::Crawl(args) => {
            let base_url = cli
                .base_url
                .clone()
                .or_else(|| std::env::var("HOOPSTATS_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            let locator = Locator::new(&base_url, cli.season)?;
            commands::crawl::run(args, locator, store).await?
        }
        Commands::Roster(args) => commands::roster::run(args, &store, &format)?,
        Commands::Schedule(args) => commands::schedule::run(args, &store, &format)?,
        Commands::Boxscore(args) => commands::boxscore::run(args, &store, &format)?,
        Commands::Physiology(args) => commands::physiology::run(args, &store, &format)?,
    }

    Ok(())
}
