use serde::Serialize;

use crate::{
    core::{
        error::Error,
        profile::{ChargingProfile, IntensityProfile},
    },
    quantity::{emissions::Grams, time::Hours},
};

/// Actual emissions of a charging profile.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Emissions {
    pub hourly: Vec<Grams>,
    pub total: Grams,
}

/// Multiply the charging energy by the carbon intensity hour by hour.
pub fn compute_emissions(
    charging: &ChargingProfile,
    intensity: &IntensityProfile,
) -> Result<Emissions, Error> {
    if charging.len() != intensity.len() {
        return Err(Error::DimensionMismatch {
            n_charging: charging.len(),
            n_intensity: intensity.len(),
        });
    }
    let hourly: Vec<Grams> = charging
        .iter()
        .zip(intensity)
        .map(|(power, intensity)| *power * Hours::ONE * *intensity)
        .collect();
    let total = hourly.iter().copied().sum();
    Ok(Emissions { hourly, total })
}
