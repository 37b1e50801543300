use itertools::Itertools;

use crate::{
    core::error::Error,
    quantity::{
        Quantity,
        energy::KilowattHours,
        intensity::GramsPerKilowattHour,
        power::Kilowatts,
        time::Hours,
    },
};

pub const N_HOURS: usize = 24;

/// Hour-of-day values starting at midnight.
///
/// Holds at most [`N_HOURS`] finite non-negative values. Shorter profiles are
/// valid: a provider may not have data for the whole day.
#[must_use]
#[derive(Clone, Debug, PartialEq, derive_more::Deref, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
pub struct HourlyProfile<V>(Vec<V>);

/// Carbon intensity of a zone for each hour.
pub type IntensityProfile = HourlyProfile<GramsPerKilowattHour>;

/// Average charging power of a company for each hour.
pub type ChargingProfile = HourlyProfile<Kilowatts>;

impl<const POWER: isize, const TIME: isize, const MASS: isize> TryFrom<Vec<Quantity<POWER, TIME, MASS>>>
    for HourlyProfile<Quantity<POWER, TIME, MASS>>
{
    type Error = Error;

    fn try_from(values: Vec<Quantity<POWER, TIME, MASS>>) -> Result<Self, Self::Error> {
        if values.len() > N_HOURS {
            return Err(Error::TooManyHours(values.len()));
        }
        if let Some((hour, value)) = values.iter().find_position(|value| !value.is_non_negative())
        {
            return Err(Error::InvalidValue { hour, value: value.0 });
        }
        Ok(Self(values))
    }
}

impl ChargingProfile {
    /// Energy drawn over the day: every slot lasts one hour.
    pub fn total_energy(&self) -> KilowattHours {
        self.iter().map(|power| *power * Hours::ONE).sum()
    }
}

impl IntensityProfile {
    /// Intensities from the cleanest hour to the dirtiest one.
    pub fn sorted_ascending(&self) -> Vec<GramsPerKilowattHour> {
        self.iter().copied().sorted().collect()
    }
}
