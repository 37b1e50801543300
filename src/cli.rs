mod intensities;
mod rank;
mod scenario;

use clap::{Parser, Subcommand};

use crate::{
    cli::{intensities::IntensitiesArgs, rank::RankArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Rank(args) => args.run(),
            Command::Intensities(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: score the companies against their zones and rank them.
    #[clap(name = "rank")]
    Rank(Box<RankArgs>),

    /// Show the hourly carbon intensity of the zones.
    #[clap(name = "intensities")]
    Intensities(IntensitiesArgs),
}
