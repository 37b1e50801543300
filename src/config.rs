use std::{fs, path::Path, str::FromStr};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    core::{
        profile::{ChargingProfile, IntensityProfile},
        provider::IntensityProvider,
        zone::Zone,
    },
    prelude::*,
    quantity::{intensity::GramsPerKilowattHour, power::Kilowatts},
};

/// Scenario file: zone intensities and the companies to rank.
#[must_use]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Default analysis date.
    pub date: Option<NaiveDate>,

    #[serde(rename = "hourly_capacity_kilowatts")]
    pub hourly_capacity: Option<Kilowatts>,

    #[serde(default)]
    pub zones: Vec<ZoneIntensity>,

    #[serde(default)]
    pub companies: Vec<Company>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneIntensity {
    pub zone: Zone,

    /// Falls back to the scenario date.
    pub date: Option<NaiveDate>,

    #[serde(rename = "intensity_grams_per_kilowatt_hour")]
    pub intensity: Vec<GramsPerKilowattHour>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Company {
    pub name: String,
    pub zone: Zone,

    #[serde(rename = "charging_kilowatts")]
    pub charging: Vec<Kilowatts>,
}

impl Company {
    pub fn charging_profile(&self) -> Result<ChargingProfile> {
        ChargingProfile::try_from(self.charging.clone())
            .with_context(|| format!("invalid charging profile of `{}`", self.name))
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(text).context("failed to parse the scenario")?;
        ensure!(!scenario.companies.is_empty(), "the scenario has no companies");
        Ok(scenario)
    }
}

impl Scenario {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let scenario: Self = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?
            .parse()?;
        info!(n_zones = scenario.zones.len(), n_companies = scenario.companies.len(), "loaded");
        Ok(scenario)
    }

    /// Zones that have intensity data on the date, in the file order.
    pub fn zones_on(&self, on: NaiveDate) -> impl Iterator<Item = &Zone> {
        self.zones
            .iter()
            .filter(move |entry| entry.date.or(self.date) == Some(on))
            .map(|entry| &entry.zone)
    }
}

impl IntensityProvider for Scenario {
    fn get_intensity(&self, zone: &Zone, on: NaiveDate) -> Result<IntensityProfile> {
        let entry = self
            .zones
            .iter()
            .find(|entry| &entry.zone == zone && entry.date.or(self.date) == Some(on))
            .with_context(|| format!("no carbon intensity for zone `{zone}` on {on}"))?;
        IntensityProfile::try_from(entry.intensity.clone())
            .with_context(|| format!("invalid carbon intensity of zone `{zone}` on {on}"))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const SCENARIO: &str = r#"
        date = "2024-05-01"
        hourly_capacity_kilowatts = 11.0

        [[zones]]
        zone = "PT"
        intensity_grams_per_kilowatt_hour = [100.0, 200.0, 300.0]

        [[zones]]
        zone = "PT"
        date = "2024-05-02"
        intensity_grams_per_kilowatt_hour = [50.0, 60.0, 70.0]

        [[zones]]
        zone = "DE"
        intensity_grams_per_kilowatt_hour = [400.0, -1.0, 300.0]

        [[companies]]
        name = "Company 1"
        zone = "PT"
        charging_kilowatts = [1.0, 0.0, 2.5]
    "#;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_parse() -> Result {
        let scenario: Scenario = SCENARIO.parse()?;
        assert_eq!(scenario.date, Some(date(1)));
        assert_eq!(scenario.hourly_capacity, Some(Kilowatts::from(11.0)));
        assert_eq!(scenario.companies.len(), 1);
        assert_abs_diff_eq!(scenario.companies[0].charging_profile()?.total_energy().0, 3.5);
        Ok(())
    }

    #[test]
    fn test_intensity_falls_back_to_scenario_date() -> Result {
        let scenario: Scenario = SCENARIO.parse()?;
        let profile = scenario.get_intensity(&Zone::from("PT"), date(1))?;
        assert_eq!(profile.first(), Some(&GramsPerKilowattHour::from(100.0)));
        Ok(())
    }

    #[test]
    fn test_intensity_on_explicit_date() -> Result {
        let scenario: Scenario = SCENARIO.parse()?;
        let profile = scenario.get_intensity(&Zone::from("PT"), date(2))?;
        assert_eq!(profile.first(), Some(&GramsPerKilowattHour::from(50.0)));
        Ok(())
    }

    #[test]
    fn test_missing_intensity() -> Result {
        let scenario: Scenario = SCENARIO.parse()?;
        assert!(scenario.get_intensity(&Zone::from("FR"), date(1)).is_err());
        assert!(scenario.get_intensity(&Zone::from("PT"), date(3)).is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_intensity() -> Result {
        let scenario: Scenario = SCENARIO.parse()?;
        assert!(scenario.get_intensity(&Zone::from("DE"), date(1)).is_err());
        Ok(())
    }

    #[test]
    fn test_zones_on() -> Result {
        let scenario: Scenario = SCENARIO.parse()?;
        let zones: Vec<_> = scenario.zones_on(date(1)).map(ToString::to_string).collect();
        assert_eq!(zones, ["PT", "DE"]);
        Ok(())
    }

    #[test]
    fn test_rejects_no_companies() {
        assert!("date = \"2024-05-01\"".parse::<Scenario>().is_err());
    }
}
