use crate::quantity::{energy::KilowattHours, power::Kilowatts};

/// Which emissions bound a computation refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Bound {
    #[display("best-case")]
    Best,

    #[display("worst-case")]
    Worst,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("charging profile has {n_charging} hours, but the intensity profile has {n_intensity}")]
    DimensionMismatch { n_charging: usize, n_intensity: usize },

    #[error("hourly capacity must be positive, got {0:?}")]
    InvalidCapacity(Kilowatts),

    #[error("total demand must be finite and not negative, got {0:?}")]
    InvalidDemand(KilowattHours),

    #[error("{bound} emissions are zero, the percentage is undefined")]
    DivisionByZero { bound: Bound },

    /// The greedy allocation ran out of hours before placing the whole demand.
    #[error("{unallocated:?} of the demand does not fit into the available hours")]
    PartialAllocation { unallocated: KilowattHours },

    #[error("hour #{hour} has an invalid value: {value}")]
    InvalidValue { hour: usize, value: f64 },

    #[error("profile has {0} hours, at most 24 are allowed")]
    TooManyHours(usize),
}
