use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use serde::Deserialize;

use crate::aircraft::Aircraft;
use crate::airport::{Airport, AirportCode};
use crate::error::EngineError;

/// Immutable reference data: the fleet in file order plus an airport
/// directory keyed by upper-case IATA code. Loaded once, shared read-only.
pub struct Catalog {
    pub fleet: Vec<Aircraft>,
    pub airports: HashMap<AirportCode, Airport>,
}

impl Catalog {
    pub fn new(fleet: Vec<Aircraft>, airports: Vec<Airport>) -> Catalog {
        let airports = airports
            .into_iter()
            .map(|mut ap| {
                ap.code = Arc::from(ap.code.to_ascii_uppercase());
                (ap.code.clone(), ap)
            })
            .collect();
        Catalog { fleet, airports }
    }

    pub fn load_from_file(path: &str) -> io::Result<Catalog> {
        let data = std::fs::read_to_string(path)?;
        #[derive(Deserialize)]
        struct RawData {
            aircraft: Vec<Aircraft>,
            airports: Vec<Airport>,
        }
        let raw: RawData = serde_json::from_str(&data)?;

        Ok(Catalog::new(raw.aircraft, raw.airports))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for aircraft in &self.fleet {
            aircraft.validate()?;
        }
        for airport in self.airports.values() {
            airport.validate()?;
        }
        Ok(())
    }

    pub fn resolve_airport(&self, code: &str) -> Result<&Airport, EngineError> {
        self.airports
            .get(code.to_ascii_uppercase().as_str())
            .ok_or_else(|| EngineError::AirportNotFound(code.to_string()))
    }

    pub fn sorted_airports(&self) -> Vec<&Airport> {
        let mut airports: Vec<&Airport> = self.airports.values().collect();
        airports.sort_by_key(|ap| ap.code.clone());
        airports
    }
}
