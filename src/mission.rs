use std::fmt;

use serde::{Deserialize, Serialize};

use crate::economics::EconomicOverrides;
use crate::error::EngineError;
use crate::wind::Wind;

/// What the requester cares about most. A closed set, so "cost and
/// environment at once" cannot be expressed by accident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Balanced,
    Cost,
    Environment,
    Speed,
}

impl Preference {
    pub fn parse(s: &str) -> Option<Preference> {
        match s.to_ascii_lowercase().as_str() {
            "balanced" => Some(Preference::Balanced),
            "cost" => Some(Preference::Cost),
            "environment" => Some(Preference::Environment),
            "speed" => Some(Preference::Speed),
            _ => None,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Preference::Balanced => "balanced",
            Preference::Cost => "cost",
            Preference::Environment => "environment",
            Preference::Speed => "speed",
        };
        write!(f, "{label}")
    }
}

/// One recommendation request. Built fresh per call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRequest {
    pub origin: String,
    pub destination: String,
    pub passengers: u32,
    #[serde(default)]
    pub cargo_kg: f64,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub preference: Preference,
    #[serde(default)]
    pub economics: EconomicOverrides,
}

impl MissionRequest {
    pub fn new(origin: &str, destination: &str, passengers: u32) -> MissionRequest {
        MissionRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            passengers,
            cargo_kg: 0.0,
            wind: None,
            preference: Preference::default(),
            economics: EconomicOverrides::default(),
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.passengers == 0 {
            return Err(EngineError::invalid("passengers", "must be at least 1"));
        }
        if !self.cargo_kg.is_finite() || self.cargo_kg < 0.0 {
            return Err(EngineError::invalid(
                "cargo_kg",
                format!("must be non-negative, got {}", self.cargo_kg),
            ));
        }
        if let Some(wind) = &self.wind {
            wind.validate()?;
        }
        Ok(())
    }
}

/// Input of the quick wind-filter check: no scoring, just the feasible
/// subset against the tighter of the two range requirements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortlistRequest {
    pub passengers: u32,
    pub cargo_kg: f64,
    pub range_km: f64,
    pub alternate_range_km: f64,
    pub wind: Wind,
    #[serde(default)]
    pub runway_available_m: Option<f64>,
}

impl ShortlistRequest {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.passengers == 0 {
            return Err(EngineError::invalid("passengers", "must be at least 1"));
        }
        if !self.cargo_kg.is_finite() || self.cargo_kg < 0.0 {
            return Err(EngineError::invalid(
                "cargo_kg",
                format!("must be non-negative, got {}", self.cargo_kg),
            ));
        }
        for (field, value) in [
            ("range_km", self.range_km),
            ("alternate_range_km", self.alternate_range_km),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::invalid(
                    field,
                    format!("must be positive, got {value}"),
                ));
            }
        }
        if let Some(runway) = self.runway_available_m {
            if !runway.is_finite() || runway <= 0.0 {
                return Err(EngineError::invalid(
                    "runway_available_m",
                    format!("must be positive, got {runway}"),
                ));
            }
        }
        self.wind.validate()
    }
}
