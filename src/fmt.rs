use std::fmt::{Debug, Display, Formatter};

/// Percentage that may be undefined.
pub struct FormattedPercentage(pub Option<f64>);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(percentage) => write!(f, "{percentage:.1}%"),
            None => write!(f, "n/a"),
        }
    }
}
