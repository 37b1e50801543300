use std::{cell::RefCell, collections::HashMap};

use chrono::NaiveDate;

use crate::{
    core::{profile::IntensityProfile, zone::Zone},
    prelude::*,
};

/// Source of hourly carbon intensity.
pub trait IntensityProvider {
    fn get_intensity(&self, zone: &Zone, on: NaiveDate) -> Result<IntensityProfile>;
}

impl<P: IntensityProvider + ?Sized> IntensityProvider for &P {
    fn get_intensity(&self, zone: &Zone, on: NaiveDate) -> Result<IntensityProfile> {
        (**self).get_intensity(zone, on)
    }
}

/// Fetches each `(zone, date)` only once.
pub struct Memoized<P> {
    inner: P,
    cache: RefCell<HashMap<(Zone, NaiveDate), IntensityProfile>>,
}

impl<P> Memoized<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, cache: RefCell::default() }
    }
}

impl<P: IntensityProvider> IntensityProvider for Memoized<P> {
    fn get_intensity(&self, zone: &Zone, on: NaiveDate) -> Result<IntensityProfile> {
        let key = (zone.clone(), on);
        if let Some(profile) = self.cache.borrow().get(&key) {
            debug!(%zone, %on, "cache hit");
            return Ok(profile.clone());
        }
        let profile = self.inner.get_intensity(zone, on)?;
        info!(%zone, %on, n_hours = profile.len(), "fetched carbon intensity");
        self.cache.borrow_mut().insert(key, profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::quantity::intensity::GramsPerKilowattHour;

    #[derive(Default)]
    struct CountingProvider {
        n_calls: Cell<usize>,
    }

    impl IntensityProvider for CountingProvider {
        fn get_intensity(&self, zone: &Zone, _on: NaiveDate) -> Result<IntensityProfile> {
            self.n_calls.set(self.n_calls.get() + 1);
            ensure!(zone.to_string() != "XX", "unknown zone");
            Ok(IntensityProfile::try_from(vec![GramsPerKilowattHour::from(100.0); 24])?)
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_fetches_once_per_zone_and_date() -> Result {
        let inner = CountingProvider::default();
        let provider = Memoized::new(&inner);

        provider.get_intensity(&Zone::from("PT"), date(1))?;
        provider.get_intensity(&Zone::from("PT"), date(1))?;
        assert_eq!(inner.n_calls.get(), 1);

        provider.get_intensity(&Zone::from("PT"), date(2))?;
        provider.get_intensity(&Zone::from("DE"), date(1))?;
        assert_eq!(inner.n_calls.get(), 3);
        Ok(())
    }

    #[test]
    fn test_does_not_cache_errors() {
        let inner = CountingProvider::default();
        let provider = Memoized::new(&inner);
        assert!(provider.get_intensity(&Zone::from("XX"), date(1)).is_err());
        assert!(provider.get_intensity(&Zone::from("XX"), date(1)).is_err());
        assert_eq!(inner.n_calls.get(), 2);
    }
}
