use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::scenario::ScenarioArgs,
    core::provider::IntensityProvider,
    prelude::*,
    tables::build_intensities_table,
};

#[derive(Parser)]
pub struct IntensitiesArgs {
    #[clap(flatten)]
    scenario: ScenarioArgs,
}

impl IntensitiesArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let (scenario, date) = self.scenario.load()?;
        let zones = scenario
            .zones_on(date)
            .unique()
            .map(|zone| Ok((zone.clone(), scenario.get_intensity(zone, date)?)))
            .collect::<Result<Vec<_>>>()?;
        ensure!(!zones.is_empty(), "no zone has carbon intensity on {date}");
        println!("{}", build_intensities_table(&zones));
        Ok(())
    }
}
