use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Reported wind for the leg. The direction is taken at face value: 0 deg is
/// always a pure tailwind, 180 deg a pure headwind, regardless of the route
/// bearing. This mirrors the business-education model, not meteorology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed_kts: f64,
    pub direction_deg: f64,
}

impl Wind {
    /// Along-track component in knots, positive for tailwind.
    pub fn component_kts(&self) -> f64 {
        self.direction_deg.to_radians().cos() * self.speed_kts
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.speed_kts.is_finite() || self.speed_kts < 0.0 {
            return Err(EngineError::invalid(
                "wind speed",
                format!("must be non-negative, got {}", self.speed_kts),
            ));
        }
        if !self.direction_deg.is_finite() {
            return Err(EngineError::invalid("wind direction", "must be finite"));
        }
        Ok(())
    }
}

/// Nominal range corrected for wind. A tailwind component stretches the
/// reachable distance, a headwind shrinks it; never below zero.
pub fn effective_range_km(base_range_km: f64, cruise_speed_kts: f64, wind: Option<Wind>) -> f64 {
    match wind {
        Some(w) => (base_range_km * (1.0 + w.component_kts() / cruise_speed_kts)).max(0.0),
        None => base_range_km,
    }
}
