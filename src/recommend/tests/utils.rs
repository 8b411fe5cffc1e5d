use std::sync::Arc;

use proptest::prelude::Strategy;

use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::catalog::Catalog;
use crate::mission::MissionRequest;
use crate::recommend::Recommender;
use crate::wind::Wind;

pub fn aircraft(name: &str, seats: u32, cargo_kg: f64, range_km: f64, cruise_kts: f64, burn_l_km: f64) -> Aircraft {
    Aircraft {
        name: Arc::from(name),
        max_passengers: seats,
        cargo_capacity_kg: cargo_kg,
        max_range_km: range_km,
        cruise_speed_kts: cruise_kts,
        fuel_efficiency_l_km: burn_l_km,
        co2_factor: 3.16,
        runway_required_m: None,
    }
}

pub fn airport(code: &str, latitude: f64, longitude: f64) -> Airport {
    Airport {
        code: Arc::from(code),
        latitude,
        longitude,
    }
}

/// IST/JFK/KRK plus a mixed fleet: two wide-bodies that make the Atlantic,
/// two narrow-bodies that do not.
pub fn atlantic_advisor() -> Recommender {
    let fleet = vec![
        aircraft("A320neo", 180, 4000.0, 6300.0, 455.0, 2.4),
        aircraft("A350-900", 325, 19000.0, 15000.0, 488.0, 5.8),
        aircraft("B777-300ER", 396, 20000.0, 13650.0, 490.0, 8.0),
        aircraft("E195-E2", 132, 2500.0, 4800.0, 450.0, 2.0),
    ];
    let airports = vec![
        airport("IST", 41.2753, 28.7519),
        airport("JFK", 40.6413, -73.7781),
        airport("KRK", 50.0777, 19.7848),
    ];
    advisor(fleet, airports)
}

pub fn advisor(fleet: Vec<Aircraft>, airports: Vec<Airport>) -> Recommender {
    Recommender::new(Catalog::new(fleet, airports)).unwrap()
}

pub fn mission(origin: &str, destination: &str, passengers: u32) -> MissionRequest {
    MissionRequest::new(origin, destination, passengers)
}

pub fn arb_aircraft() -> impl Strategy<Value = Aircraft> {
    (
        0..1000u32,
        1..500u32,
        0.0..25000.0f64,
        500.0..16000.0f64,
        150.0..600.0f64,
        0.5..12.0f64,
    )
        .prop_map(|(n, seats, cargo_kg, range_km, cruise_kts, burn_l_km)| {
            aircraft(
                &format!("AC_{n}"),
                seats,
                cargo_kg,
                range_km,
                cruise_kts,
                burn_l_km,
            )
        })
}

pub fn arb_wind() -> impl Strategy<Value = Wind> {
    (0.0..140.0f64, 0.0..360.0f64).prop_map(|(speed_kts, direction_deg)| Wind {
        speed_kts,
        direction_deg,
    })
}
