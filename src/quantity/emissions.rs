use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Mass of emitted CO₂.
pub type Grams = Quantity<0, 0, 1>;

impl Display for Grams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kg", self.0 * 0.001)
    }
}

impl Debug for Grams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}g", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_in_kilograms() {
        assert_eq!(Grams::from(6900.0).to_string(), "6.90 kg");
    }
}
