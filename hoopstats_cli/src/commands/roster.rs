use anyhow::Result;
use clap::Args;
use hoopstats_lib::clean::load_roster;
use hoopstats_lib::Store;

use crate::output::{print_roster, OutputFormat};

#[derive(Args)]
pub struct RosterArgs {
    /// School slug, e.g. duke or north-carolina
    pub school: String,
}

pub fn run(args: &RosterArgs, store: &Store, format: &OutputFormat) -> Result<()> {
    let roster = load_roster(&store.roster_path(&args.school))?;
    print_roster(&roster, format)
}
