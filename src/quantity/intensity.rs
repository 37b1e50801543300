use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Carbon intensity: grams of CO₂ emitted per kilowatt-hour consumed.
pub type GramsPerKilowattHour = Quantity<-1, -1, 1>;

impl Display for GramsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} g/kWh", self.0)
    }
}

impl Debug for GramsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}g/kWh", self.0)
    }
}
