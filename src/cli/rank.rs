use clap::Parser;

use crate::{
    cli::scenario::ScenarioArgs,
    core::{
        assessment::Assessor,
        provider::{IntensityProvider, Memoized},
        ranking::rank,
        scenario::DEFAULT_HOURLY_CAPACITY,
    },
    prelude::*,
    quantity::power::Kilowatts,
    tables::{build_assessments_table, build_hourly_emissions_table, build_ranking_table},
};

#[derive(Parser)]
pub struct RankArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Maximum charging power within one hour, used for the best- and worst-case bounds.
    ///
    /// Defaults to the scenario setting, and then to 10 kW.
    #[clap(long = "hourly-capacity-kilowatts", env = "HOURLY_CAPACITY_KILOWATTS")]
    pub hourly_capacity: Option<Kilowatts>,

    /// Also print the hourly emissions of every company.
    #[clap(long)]
    pub hourly: bool,

    /// Print the ranking as JSON instead of the tables.
    #[clap(long, conflicts_with = "hourly")]
    pub json: bool,

    /// Fail when a zone has too few hours to allocate the whole demand.
    #[clap(long)]
    pub strict: bool,
}

impl RankArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let (scenario, date) = self.scenario.load()?;
        let hourly_capacity = self
            .hourly_capacity
            .or(scenario.hourly_capacity)
            .unwrap_or(DEFAULT_HOURLY_CAPACITY);
        info!(?hourly_capacity, "ranking…");

        let provider = Memoized::new(&scenario);
        let assessments = scenario
            .companies
            .iter()
            .map(|company| {
                let intensity = provider.get_intensity(&company.zone, date)?;
                let charging = company.charging_profile()?;
                let assessment = Assessor::builder()
                    .company(&company.name)
                    .charging(&charging)
                    .intensity(&intensity)
                    .hourly_capacity(hourly_capacity)
                    .build()
                    .assess()
                    .with_context(|| format!("failed to assess `{}`", company.name))?;
                if self.strict {
                    assessment
                        .scenarios
                        .ensure_complete()
                        .with_context(|| format!("incomplete bounds for `{}`", company.name))?;
                }
                Ok(assessment)
            })
            .collect::<Result<Vec<_>>>()?;

        let ranking = rank(assessments.iter().map(|assessment| assessment.score.clone()));
        if self.json {
            println!("{}", serde_json::to_string_pretty(&ranking)?);
        } else {
            if self.hourly {
                println!("{}", build_hourly_emissions_table(&assessments));
            }
            println!("{}", build_assessments_table(&assessments));
            println!("{}", build_ranking_table(&ranking));
        }
        Ok(())
    }
}
