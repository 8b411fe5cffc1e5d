use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::EngineError;

pub type AircraftName = Arc<str>;

/// One fleet catalog entry. Reference data, validated once at load and never
/// mutated afterwards. `co2_factor` is kg of CO2 per kg of fuel burned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Aircraft {
    #[tabled(rename = "Aircraft")]
    pub name: AircraftName,
    #[tabled(rename = "Seats")]
    pub max_passengers: u32,
    #[tabled(rename = "Cargo (kg)", display("display_whole"))]
    pub cargo_capacity_kg: f64,
    #[tabled(rename = "Range (km)", display("display_whole"))]
    pub max_range_km: f64,
    #[tabled(rename = "Cruise (kts)", display("display_whole"))]
    pub cruise_speed_kts: f64,
    #[tabled(rename = "Burn (L/km)", display("display_rate"))]
    pub fuel_efficiency_l_km: f64,
    #[tabled(rename = "CO2 (kg/kg)", display("display_rate"))]
    pub co2_factor: f64,
    #[tabled(rename = "Runway (m)", display("display_runway"))]
    #[serde(default)]
    pub runway_required_m: Option<f64>,
}

fn display_whole(value: &f64) -> String {
    format!("{value:.0}")
}

fn display_rate(value: &f64) -> String {
    format!("{value:.2}")
}

fn display_runway(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |m| format!("{m:.0}"))
}

impl Aircraft {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.name.trim().is_empty() {
            return Err(EngineError::invalid("aircraft name", "must not be empty"));
        }
        if self.max_passengers == 0 {
            return Err(EngineError::invalid(
                "max_passengers",
                format!("'{}' must seat at least one passenger", self.name),
            ));
        }
        if !self.cargo_capacity_kg.is_finite() || self.cargo_capacity_kg < 0.0 {
            return Err(EngineError::invalid(
                "cargo_capacity_kg",
                format!("'{}' must be non-negative", self.name),
            ));
        }
        Self::positive("max_range_km", &self.name, self.max_range_km)?;
        Self::positive("cruise_speed_kts", &self.name, self.cruise_speed_kts)?;
        Self::positive("fuel_efficiency_l_km", &self.name, self.fuel_efficiency_l_km)?;
        Self::positive("co2_factor", &self.name, self.co2_factor)?;
        if let Some(runway) = self.runway_required_m {
            Self::positive("runway_required_m", &self.name, runway)?;
        }
        Ok(())
    }

    fn positive(field: &'static str, name: &str, value: f64) -> Result<(), EngineError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(EngineError::invalid(
                field,
                format!("'{name}' must be positive, got {value}"),
            ))
        }
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
