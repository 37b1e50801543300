use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        emissions::{Emissions, compute_emissions},
        error::Error,
        profile::{ChargingProfile, IntensityProfile},
        ranking::CompanyScore,
        scenario::{Scenarios, compute_scenarios},
        score::{compute_percentages, compute_score},
    },
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// Everything computed for a single company.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Assessment {
    pub demand: KilowattHours,
    pub emissions: Emissions,
    pub scenarios: Scenarios,
    pub score: CompanyScore,
}

#[derive(Builder)]
pub struct Assessor<'a> {
    company: &'a str,
    charging: &'a ChargingProfile,
    intensity: &'a IntensityProfile,

    /// Maximum charging power within one hour.
    hourly_capacity: Kilowatts,
}

impl Assessor<'_> {
    /// Run the company through emissions, scenarios and scoring.
    ///
    /// Undefined percentages are reported as [`None`] rather than failing the whole assessment.
    #[instrument(skip_all, fields(company = self.company))]
    pub fn assess(self) -> Result<Assessment, Error> {
        let demand = self.charging.total_energy();
        let emissions = compute_emissions(self.charging, self.intensity)?;
        let scenarios = compute_scenarios(demand, self.intensity, self.hourly_capacity)?;

        let score = compute_score(emissions.total, scenarios.best_case, scenarios.worst_case);
        let percentages =
            compute_percentages(emissions.total, scenarios.best_case, scenarios.worst_case);
        let percent_away_from_best = percentages
            .away_from_best
            .inspect_err(|error| warn!(%error, "no percentage from the best case"))
            .ok();
        let percent_away_from_worst = percentages
            .away_from_worst
            .inspect_err(|error| warn!(%error, "no percentage from the worst case"))
            .ok();
        info!(
            ?demand,
            actual = ?emissions.total,
            best_case = ?scenarios.best_case,
            worst_case = ?scenarios.worst_case,
            score,
            "assessed"
        );

        Ok(Assessment {
            demand,
            emissions,
            scenarios,
            score: CompanyScore {
                company: self.company.to_owned(),
                score,
                percent_away_from_best,
                percent_away_from_worst,
            },
        })
    }
}
