use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::EngineError;

pub type AirportCode = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Airport {
    #[tabled(rename = "IATA")]
    pub code: AirportCode,
    #[tabled(rename = "Latitude", display("display_degrees"))]
    pub latitude: f64,
    #[tabled(rename = "Longitude", display("display_degrees"))]
    pub longitude: f64,
}

fn display_degrees(value: &f64) -> String {
    format!("{value:.4}")
}

impl Airport {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.code.len() != 3 || !self.code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EngineError::invalid(
                "airport code",
                format!("'{}' is not a 3-letter IATA code", self.code),
            ));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EngineError::invalid(
                "latitude",
                format!("'{}' must be within [-90, 90], got {}", self.code, self.latitude),
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EngineError::invalid(
                "longitude",
                format!("'{}' must be within [-180, 180], got {}", self.code, self.longitude),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_airport_passes() {
        let ist = Airport {
            code: Arc::from("IST"),
            latitude: 41.2753,
            longitude: 28.7519,
        };
        assert_eq!(ist.validate(), Ok(()));
    }

    #[test]
    fn test_bad_code_rejected() {
        for code in ["", "IS", "ISTA", "I5T"] {
            let ap = Airport {
                code: Arc::from(code),
                latitude: 0.0,
                longitude: 0.0,
            };
            assert!(ap.validate().is_err(), "'{code}' should be rejected");
        }
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let ap = Airport {
            code: Arc::from("XYZ"),
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(ap.validate().is_err());

        let ap = Airport {
            code: Arc::from("XYZ"),
            latitude: 0.0,
            longitude: f64::NAN,
        };
        assert!(ap.validate().is_err());
    }
}
