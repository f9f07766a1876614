use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hoopstats_lib::clean::load_schedule;
use hoopstats_lib::Store;

use crate::output::{print_schedule, OutputFormat};

#[derive(Args)]
pub struct ScheduleArgs {
    /// School slug
    pub school: String,

    /// YAML opponent alias map replacing the built-in one (use the same file as the crawl)
    #[arg(long)]
    pub opponent_map_file: Option<PathBuf>,
}

pub fn run(args: &ScheduleArgs, store: &Store, format: &OutputFormat) -> Result<()> {
    let names = super::team_names(args.opponent_map_file.as_ref())?;
    let games = load_schedule(&store.schedule_path(&args.school), &names)?;
    print_schedule(&games, format)
}
