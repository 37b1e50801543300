use serde::Serialize;

use crate::{
    core::{error::Error, profile::IntensityProfile},
    prelude::*,
    quantity::{
        Quantity,
        emissions::Grams,
        energy::KilowattHours,
        power::Kilowatts,
        time::Hours,
    },
};

pub const DEFAULT_HOURLY_CAPACITY: Kilowatts = Quantity(10.0);

/// Emissions bounds for a given total demand.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Scenarios {
    /// All the demand charged at full capacity during the cleanest hours.
    pub best_case: Grams,

    /// All the demand charged at full capacity during the dirtiest hours.
    pub worst_case: Grams,

    /// Number of full-capacity hours the bounds are built from.
    pub n_hours: usize,

    /// Demand left over when the profile runs out of hours.
    pub unallocated_demand: KilowattHours,
}

impl Scenarios {
    pub fn is_partial(&self) -> bool {
        self.unallocated_demand > KilowattHours::ZERO
    }

    /// Fail when the bounds do not cover the whole demand.
    pub fn ensure_complete(&self) -> Result<(), Error> {
        if self.is_partial() {
            Err(Error::PartialAllocation { unallocated: self.unallocated_demand })
        } else {
            Ok(())
        }
    }
}

/// Greedy best- and worst-case bounds.
///
/// The demand is split into `ceil(demand / capacity)` full-capacity hours, which
/// are then placed into the lowest- and highest-intensity hours of the profile.
/// The bounds do not depend on how the demand is actually distributed.
#[instrument(skip_all, fields(total_demand = ?total_demand, hourly_capacity = ?hourly_capacity))]
pub fn compute_scenarios(
    total_demand: KilowattHours,
    intensity: &IntensityProfile,
    hourly_capacity: Kilowatts,
) -> Result<Scenarios, Error> {
    if !hourly_capacity.0.is_finite() || hourly_capacity <= Kilowatts::ZERO {
        return Err(Error::InvalidCapacity(hourly_capacity));
    }
    if !total_demand.is_non_negative() {
        return Err(Error::InvalidDemand(total_demand));
    }

    let n_hours_needed = (total_demand / hourly_capacity).ceil();
    let n_hours = n_hours_needed.min(intensity.len());
    let energy_per_hour = hourly_capacity * Hours::ONE;

    let unallocated_demand = if n_hours < n_hours_needed {
        #[expect(clippy::cast_precision_loss)]
        let allocated = energy_per_hour * n_hours as f64;
        (total_demand - allocated).max(KilowattHours::ZERO)
    } else {
        KilowattHours::ZERO
    };
    if n_hours < n_hours_needed {
        warn!(
            n_hours_needed,
            n_available = intensity.len(),
            unallocated = ?unallocated_demand,
            "the demand does not fit into the profile, bounds are partial"
        );
    }

    let ascending = intensity.sorted_ascending();
    let scenarios = Scenarios {
        best_case: ascending
            .iter()
            .take(n_hours)
            .map(|intensity| energy_per_hour * *intensity)
            .sum(),
        worst_case: ascending
            .iter()
            .rev()
            .take(n_hours)
            .map(|intensity| energy_per_hour * *intensity)
            .sum(),
        n_hours,
        unallocated_demand,
    };
    debug!(n_hours, best_case = ?scenarios.best_case, worst_case = ?scenarios.worst_case, "computed");
    Ok(scenarios)
}
