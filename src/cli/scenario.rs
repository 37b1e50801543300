use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::{config::Scenario, prelude::*};

#[derive(Parser)]
pub struct ScenarioArgs {
    /// TOML file with the zone intensities and company charging profiles.
    #[clap(long = "scenario", env = "SCENARIO_PATH", default_value = "scenario.toml")]
    pub path: PathBuf,

    /// Analysis date, defaults to the one in the scenario file.
    #[clap(long, env = "ANALYSIS_DATE")]
    pub date: Option<NaiveDate>,
}

impl ScenarioArgs {
    /// Read the scenario and resolve the analysis date.
    pub fn load(&self) -> Result<(Scenario, NaiveDate)> {
        let scenario = Scenario::read_from(&self.path)?;
        let date = self
            .date
            .or(scenario.date)
            .context("the analysis date is neither given nor set in the scenario")?;
        info!(%date, "analysing");
        Ok((scenario, date))
    }
}
