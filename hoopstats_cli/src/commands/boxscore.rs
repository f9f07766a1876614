use anyhow::Result;
use clap::Args;
use hoopstats_lib::clean::load_boxscore;
use hoopstats_lib::Store;

use crate::output::{print_boxscore, OutputFormat};

#[derive(Args)]
pub struct BoxscoreArgs {
    /// School slug
    pub school: String,

    /// Game date (YYYY-MM-DD)
    pub date: String,

    /// Tip-off hour on a 24-hour clock, as in the file name
    pub hour: String,
}

pub fn run(args: &BoxscoreArgs, store: &Store, format: &OutputFormat) -> Result<()> {
    let key = super::game_key(&args.date, &args.hour)?;
    let lines = load_boxscore(&store.boxscore_path(&args.school, &key))?;
    print_boxscore(&lines, format)
}
