use anyhow::Result;
use clap::Args;
use hoopstats_lib::clean::{load_boxscore, load_roster};
use hoopstats_lib::physiology::physiology;
use hoopstats_lib::Store;

use crate::output::{print_physiology, OutputFormat};

#[derive(Args)]
pub struct PhysiologyArgs {
    /// School slug
    pub school: String,

    /// Game date (YYYY-MM-DD)
    pub date: String,

    /// Tip-off hour on a 24-hour clock
    pub hour: String,
}

pub fn run(args: &PhysiologyArgs, store: &Store, format: &OutputFormat) -> Result<()> {
    let key = super::game_key(&args.date, &args.hour)?;
    let roster = load_roster(&store.roster_path(&args.school))?;
    let lines = load_boxscore(&store.boxscore_path(&args.school, &key))?;
    let result = physiology(&roster, &lines);
    print_physiology(&args.school, &key.to_string(), lines.len(), &result, format)
}
