use thiserror::Error;

/// Terminal per-request failures. Never recovered internally; the console
/// layer prints them and returns to the prompt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("airport '{0}' not found in directory")]
    AirportNotFound(String),

    #[error(
        "no aircraft in the fleet can fly this mission \
         ({passengers} passengers, {cargo_kg:.0} kg cargo, {required_range_km:.0} km required range)"
    )]
    NoFeasibleAircraft {
        passengers: u32,
        cargo_kg: f64,
        required_range_km: f64,
    },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl EngineError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> EngineError {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
