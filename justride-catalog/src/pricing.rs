use std::fmt;
use std::str::FromStr;

use justride_shared::ServiceCategory;
use serde::{Deserialize, Serialize};

use crate::browse::Facets;
use crate::product::{Agent, Bookable, Vehicle};
use crate::CatalogError;

/// Which self-drive rate is quoted
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    #[default]
    Hourly,
    Daily,
}

impl PriceMode {
    pub fn rate_for(&self, vehicle: &Vehicle) -> u64 {
        match self {
            PriceMode::Hourly => vehicle.hourly_rate,
            PriceMode::Daily => vehicle.daily_rate,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            PriceMode::Hourly => "hr",
            PriceMode::Daily => "day",
        }
    }
}

impl fmt::Display for PriceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceMode::Hourly => f.write_str("hourly"),
            PriceMode::Daily => f.write_str("daily"),
        }
    }
}

impl FromStr for PriceMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(PriceMode::Hourly),
            "daily" => Ok(PriceMode::Daily),
            other => Err(CatalogError::UnknownPriceMode(other.to_string())),
        }
    }
}

/// A vehicle quoted under a price mode; this is what gets browsed and booked.
#[derive(Debug, Clone, Copy)]
pub struct PricedVehicle<'a> {
    pub vehicle: &'a Vehicle,
    pub mode: PriceMode,
}

impl Vehicle {
    pub fn priced(&self, mode: PriceMode) -> PricedVehicle<'_> {
        PricedVehicle { vehicle: self, mode }
    }
}

impl PricedVehicle<'_> {
    /// Price label as shown on a listing card, e.g. `₹299/hr`
    pub fn price_label(&self) -> String {
        format!("₹{}/{}", self.price(), self.mode.unit())
    }
}

impl Bookable for PricedVehicle<'_> {
    fn category(&self) -> ServiceCategory {
        ServiceCategory::SelfDrive
    }

    fn display_name(&self) -> &str {
        &self.vehicle.name
    }

    fn description(&self) -> &str {
        &self.vehicle.description
    }

    fn details(&self) -> String {
        format!("{} — {}", self.vehicle.vehicle_type, self.vehicle.description)
    }

    fn price(&self) -> u64 {
        self.mode.rate_for(self.vehicle)
    }

    fn agent(&self) -> Option<&Agent> {
        Some(&self.vehicle.agent)
    }

    fn admits(&self, facets: &Facets) -> bool {
        facets
            .vehicle_type
            .as_deref()
            .map_or(true, |t| self.vehicle.vehicle_type.eq_ignore_ascii_case(t))
    }

    fn rating(&self) -> f64 {
        self.vehicle.rating
    }

    fn reviews(&self) -> u32 {
        self.vehicle.reviews
    }
}
