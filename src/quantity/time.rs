use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Hours = Quantity<0, 1, 0>;

impl Hours {
    /// Duration of one profile slot.
    pub const ONE: Self = Self(1.0);

    /// Relative slack absorbing the rounding error of summed profiles.
    const CEIL_TOLERANCE: f64 = 1e-9;

    /// Number of whole hours needed to cover the duration.
    ///
    /// Values within [`Self::CEIL_TOLERANCE`] above a whole number round down to it.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ceil(self) -> usize {
        // Negative and NaN saturate to zero:
        (self.0 - Self::CEIL_TOLERANCE * self.0.abs().max(1.0)).ceil() as usize
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}h", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil() {
        assert_eq!(Hours::ZERO.ceil(), 0);
        assert_eq!(Hours::from(2.5).ceil(), 3);
        assert_eq!(Hours::from(3.0).ceil(), 3);
        assert_eq!(Hours::from(-1.0).ceil(), 0);
        assert_eq!(Hours::from(f64::NAN).ceil(), 0);
    }

    #[test]
    fn test_ceil_ignores_rounding_noise() {
        let hours = Hours::from((6.4 + 9.8 + 3.8) / 10.0);
        assert_eq!(hours.ceil(), 2);
        assert_eq!(Hours::from(2.000_001).ceil(), 3);
        assert_eq!(Hours::from(1e-12).ceil(), 0);
        assert_eq!(Hours::from(1e-6).ceil(), 1);
    }
}
