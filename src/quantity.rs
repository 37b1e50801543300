pub mod emissions;
pub mod energy;
pub mod intensity;
pub mod power;
pub mod time;

use std::{
    cmp::Ordering,
    ops::{Div, Mul},
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Physical quantity tagged with its dimensions: power, time and mass.
///
/// Energy is power × time, and carbon intensity is mass per energy.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<const POWER: isize, const TIME: isize, const MASS: isize>(pub f64);

impl<const POWER: isize, const TIME: isize, const MASS: isize> Quantity<POWER, TIME, MASS> {
    pub const ZERO: Self = Self(0.0);

    /// Finite and not negative.
    pub const fn is_non_negative(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl<const POWER: isize, const TIME: isize, const MASS: isize> PartialEq
    for Quantity<POWER, TIME, MASS>
{
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl<const POWER: isize, const TIME: isize, const MASS: isize> Eq for Quantity<POWER, TIME, MASS> {}

impl<const POWER: isize, const TIME: isize, const MASS: isize> PartialOrd
    for Quantity<POWER, TIME, MASS>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const POWER: isize, const TIME: isize, const MASS: isize> Ord for Quantity<POWER, TIME, MASS> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

impl<const POWER: isize, const TIME: isize, const MASS: isize> Mul<f64>
    for Quantity<POWER, TIME, MASS>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const POWER: isize, const TIME: isize, const MASS: isize> Div<f64>
    for Quantity<POWER, TIME, MASS>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// Dividing same-dimension quantities gives a bare ratio.
impl<const POWER: isize, const TIME: isize, const MASS: isize> Div<Self>
    for Quantity<POWER, TIME, MASS>
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{
        emissions::Grams,
        energy::KilowattHours,
        intensity::GramsPerKilowattHour,
        power::Kilowatts,
        time::Hours,
    };

    #[test]
    fn test_ordering() {
        assert!(Kilowatts::from(1.0) < Kilowatts::from(2.0));
        assert_eq!(Kilowatts::from(3.0).max(Kilowatts::ZERO), Kilowatts::from(3.0));
        assert_eq!(Kilowatts::from(-3.0).max(Kilowatts::ZERO), Kilowatts::ZERO);
    }

    #[test]
    fn test_is_non_negative() {
        assert!(Kilowatts::ZERO.is_non_negative());
        assert!(Kilowatts::from(1.5).is_non_negative());
        assert!(!Kilowatts::from(-0.1).is_non_negative());
        assert!(!Kilowatts::from(f64::NAN).is_non_negative());
        assert!(!Kilowatts::from(f64::INFINITY).is_non_negative());
    }

    #[test]
    fn test_units() {
        let energy: KilowattHours = Kilowatts::from(7.0) * Hours::from(2.0);
        assert_abs_diff_eq!(energy.0, 14.0);

        let emissions: Grams = energy * GramsPerKilowattHour::from(100.0);
        assert_abs_diff_eq!(emissions.0, 1400.0);

        let hours: Hours = energy / Kilowatts::from(4.0);
        assert_abs_diff_eq!(hours.0, 3.5);
    }

    #[test]
    fn test_ratio() {
        assert_abs_diff_eq!(Grams::from(3.0) / Grams::from(4.0), 0.75);
    }

    #[test]
    fn test_sum() {
        let total: Grams = [1.0, 2.0, 3.5].into_iter().map(Grams::from).sum();
        assert_abs_diff_eq!(total.0, 6.5);
    }
}
