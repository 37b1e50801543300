use crate::{
    core::error::{Bound, Error},
    quantity::emissions::Grams,
};

/// Position of the actual emissions between the bounds: `0` is the best case, `1` is the worst.
///
/// A zero-width interval (constant intensity or no demand) always scores `0`.
#[must_use]
pub fn compute_score(actual: Grams, best: Grams, worst: Grams) -> f64 {
    if worst == best {
        return 0.0;
    }
    (actual - best) / (worst - best)
}

/// How much more the actual emissions are than the best case, in percent.
pub fn percent_away_from_best(actual: Grams, best: Grams) -> Result<f64, Error> {
    if best == Grams::ZERO {
        return Err(Error::DivisionByZero { bound: Bound::Best });
    }
    Ok((actual - best) / best * 100.0)
}

/// How much less the actual emissions are than the worst case, in percent.
pub fn percent_away_from_worst(actual: Grams, worst: Grams) -> Result<f64, Error> {
    if worst == Grams::ZERO {
        return Err(Error::DivisionByZero { bound: Bound::Worst });
    }
    Ok((worst - actual) / worst * 100.0)
}

/// Distance of the actual emissions from both bounds, in percent.
///
/// Each side fails on its own when its bound is zero.
#[must_use]
#[derive(Debug, PartialEq)]
pub struct Percentages {
    pub away_from_best: Result<f64, Error>,
    pub away_from_worst: Result<f64, Error>,
}

pub fn compute_percentages(actual: Grams, best: Grams, worst: Grams) -> Percentages {
    Percentages {
        away_from_best: percent_away_from_best(actual, best),
        away_from_worst: percent_away_from_worst(actual, worst),
    }
}
