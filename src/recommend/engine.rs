use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tabled::Tabled;

use crate::aircraft::Aircraft;
use crate::catalog::Catalog;
use crate::economics::{EconomicParams, LegEconomics};
use crate::emissions::EmissionsReport;
use crate::error::EngineError;
use crate::geo;
use crate::mission::{MissionRequest, Preference, ShortlistRequest};
use crate::wind::{self, Wind};

/// An aircraft must carry this much spare range beyond the leg distance.
pub const RANGE_SAFETY_MARGIN: f64 = 1.1;

const EFFICIENT_BURN_L_KM: f64 = 2.5;
const STRONG_PROFIT_USD: f64 = 30_000.0;
const LOW_CARBON_PER_PAX_KG: f64 = 80.0;
const HIGH_SEAT_UTILIZATION: f64 = 0.85;
const MAX_REASONS: usize = 3;

/// Sub-score caps and baselines. One place to retune the ranking without
/// touching the combining logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub efficiency_cap: f64,
    pub profit_cap: f64,
    pub environment_cap: f64,
    pub utilization_cap: f64,
    pub efficiency_baseline_l_km: f64,
    pub co2_baseline_per_pax_kg: f64,
    pub profit_usd_per_point: f64,
    pub speed_baseline_kts: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            efficiency_cap: 30.0,
            profit_cap: 40.0,
            environment_cap: 20.0,
            utilization_cap: 10.0,
            efficiency_baseline_l_km: 3.0,
            co2_baseline_per_pax_kg: 100.0,
            profit_usd_per_point: 1000.0,
            speed_baseline_kts: 800.0,
        }
    }
}

pub struct SubScores {
    pub efficiency: f64,
    pub profit: f64,
    pub environment: f64,
    pub utilization: f64,
}

impl ScoreWeights {
    pub fn efficiency_score(&self, fuel_efficiency_l_km: f64) -> f64 {
        ((self.efficiency_baseline_l_km - fuel_efficiency_l_km) / self.efficiency_baseline_l_km
            * self.efficiency_cap)
            .clamp(0.0, self.efficiency_cap)
    }

    pub fn profit_score(&self, profit_usd: f64) -> f64 {
        (profit_usd / self.profit_usd_per_point).clamp(0.0, self.profit_cap)
    }

    pub fn environment_score(&self, co2_per_pax_kg: f64) -> f64 {
        ((self.co2_baseline_per_pax_kg - co2_per_pax_kg) / self.co2_baseline_per_pax_kg
            * self.environment_cap)
            .clamp(0.0, self.environment_cap)
    }

    pub fn utilization_score(&self, pax_utilization: f64, cargo_utilization: f64) -> f64 {
        self.utilization_cap * (pax_utilization + cargo_utilization) / 2.0
    }

    pub fn composite(&self, s: &SubScores, preference: Preference, cruise_speed_kts: f64) -> f64 {
        let balanced = s.efficiency + s.profit + s.environment + s.utilization;
        match preference {
            Preference::Balanced => balanced,
            Preference::Cost => 1.5 * s.profit + 1.2 * s.efficiency + 0.8 * s.environment,
            Preference::Environment => 2.0 * s.environment + 0.8 * s.profit + 1.2 * s.efficiency,
            Preference::Speed => balanced + (cruise_speed_kts - self.speed_baseline_kts) / 10.0,
        }
    }
}

/// Why an aircraft placed where it did. Numeric codes; text only at the
/// presentation edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reason {
    FuelEfficient { l_per_km: f64 },
    StrongProfit { usd: f64 },
    LowCarbon { kg_per_pax: f64 },
    HighUtilization { pct: f64 },
    ProfileMatch(Preference),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::FuelEfficient { l_per_km } => write!(f, "burns just {l_per_km:.1} L/km"),
            Reason::StrongProfit { usd } => write!(f, "projects ${usd:.0} profit on the leg"),
            Reason::LowCarbon { kg_per_pax } => {
                write!(f, "emits only {kg_per_pax:.0} kg CO2 per passenger")
            }
            Reason::HighUtilization { pct } => write!(f, "fills {pct:.0}% of its seats"),
            Reason::ProfileMatch(preference) => {
                write!(f, "strong fit for the {preference} profile")
            }
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ranked output row, one per feasible aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct AircraftScore {
    #[tabled(rename = "Aircraft")]
    pub aircraft: Arc<str>,
    #[tabled(rename = "Score")]
    pub score: i32,
    #[tabled(rename = "Burn (L/km)", display("display_rate"))]
    pub fuel_efficiency_l_km: f64,
    #[tabled(rename = "Cost", display("display_usd"))]
    pub operating_cost_usd: f64,
    #[tabled(rename = "Revenue", display("display_usd"))]
    pub revenue_usd: f64,
    #[tabled(rename = "Profit", display("display_usd"))]
    pub profit_usd: f64,
    #[tabled(rename = "CO2 (kg)", display("display_whole"))]
    pub co2_kg: f64,
    #[tabled(rename = "Break-even", display("display_pct"))]
    pub break_even_load_factor_pct: f64,
    #[tabled(rename = "Seats")]
    pub max_passengers: u32,
    #[tabled(rename = "Range (km)", display("display_whole"))]
    pub max_range_km: f64,
    #[tabled(rename = "Cruise (kts)", display("display_whole"))]
    pub cruise_speed_kts: f64,
    #[tabled(skip)]
    pub reasons: Vec<Reason>,
}

fn display_rate(value: &f64) -> String {
    format!("{value:.2}")
}

fn display_usd(value: &f64) -> String {
    format!("${value:.0}")
}

fn display_whole(value: &f64) -> String {
    format!("{value:.0}")
}

fn display_pct(value: &f64) -> String {
    format!("{value:.1}%")
}

/// Everything an aircraft must satisfy to fly the mission.
struct FlightRequirement {
    passengers: u32,
    cargo_kg: f64,
    range_km: f64,
    wind: Option<Wind>,
    runway_available_m: Option<f64>,
}

fn feasible<'a>(fleet: &'a [Aircraft], req: &FlightRequirement) -> Vec<&'a Aircraft> {
    fleet
        .iter()
        .filter(|ac| ac.max_passengers >= req.passengers)
        .filter(|ac| ac.cargo_capacity_kg >= req.cargo_kg)
        .filter(|ac| {
            let effective =
                wind::effective_range_km(ac.max_range_km, ac.cruise_speed_kts, req.wind);
            effective >= req.range_km * RANGE_SAFETY_MARGIN
        })
        .filter(|ac| match (ac.runway_required_m, req.runway_available_m) {
            (Some(required), Some(available)) => required <= available,
            _ => true,
        })
        .collect()
}

/// Stateless recommendation service over an immutable catalog snapshot.
pub struct Recommender {
    catalog: Catalog,
    weights: ScoreWeights,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Result<Recommender, EngineError> {
        Self::with_weights(catalog, ScoreWeights::default())
    }

    pub fn with_weights(catalog: Catalog, weights: ScoreWeights) -> Result<Recommender, EngineError> {
        catalog.validate()?;
        Ok(Recommender { catalog, weights })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve airports, measure the leg, filter the fleet, score and rank.
    /// Returns the full ranked list; callers truncate as they see fit.
    pub fn recommend(&self, request: &MissionRequest) -> Result<Vec<AircraftScore>, EngineError> {
        request.validate()?;
        let origin = self.catalog.resolve_airport(&request.origin)?;
        let destination = self.catalog.resolve_airport(&request.destination)?;
        if origin.code == destination.code {
            return Err(EngineError::invalid(
                "destination",
                "must differ from origin",
            ));
        }

        let distance_km = geo::haversine_km(
            origin.latitude,
            origin.longitude,
            destination.latitude,
            destination.longitude,
        )?;

        let requirement = FlightRequirement {
            passengers: request.passengers,
            cargo_kg: request.cargo_kg,
            range_km: distance_km,
            wind: request.wind,
            runway_available_m: None,
        };
        let candidates = feasible(&self.catalog.fleet, &requirement);
        if candidates.is_empty() {
            return Err(EngineError::NoFeasibleAircraft {
                passengers: request.passengers,
                cargo_kg: request.cargo_kg,
                required_range_km: distance_km * RANGE_SAFETY_MARGIN,
            });
        }

        let params = EconomicParams::default().with_overrides(&request.economics);
        let mut scored = candidates
            .into_iter()
            .map(|ac| self.score(ac, distance_km, &params, request))
            .collect::<Result<Vec<AircraftScore>, EngineError>>()?;

        // Stable sort: equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scored)
    }

    /// The quick wind-filter check: feasible subset only, no scoring. The
    /// binding range is the larger of the direct and alternate requirement.
    pub fn shortlist(&self, request: &ShortlistRequest) -> Result<Vec<&Aircraft>, EngineError> {
        request.validate()?;
        let binding_range_km = request.range_km.max(request.alternate_range_km);

        let requirement = FlightRequirement {
            passengers: request.passengers,
            cargo_kg: request.cargo_kg,
            range_km: binding_range_km,
            wind: Some(request.wind),
            runway_available_m: request.runway_available_m,
        };
        let candidates = feasible(&self.catalog.fleet, &requirement);
        if candidates.is_empty() {
            return Err(EngineError::NoFeasibleAircraft {
                passengers: request.passengers,
                cargo_kg: request.cargo_kg,
                required_range_km: binding_range_km * RANGE_SAFETY_MARGIN,
            });
        }
        Ok(candidates)
    }

    fn score(
        &self,
        aircraft: &Aircraft,
        distance_km: f64,
        params: &EconomicParams,
        request: &MissionRequest,
    ) -> Result<AircraftScore, EngineError> {
        let economics = LegEconomics::evaluate(
            aircraft.max_passengers,
            aircraft.fuel_efficiency_l_km,
            distance_km,
            params,
        )?;
        let emissions = EmissionsReport::evaluate(
            economics.fuel_liters,
            aircraft.co2_factor,
            aircraft.max_passengers,
            params.load_factor,
        );

        let pax_utilization = f64::from(request.passengers) / f64::from(aircraft.max_passengers);
        let cargo_utilization = if aircraft.cargo_capacity_kg > 0.0 {
            request.cargo_kg / aircraft.cargo_capacity_kg
        } else {
            0.0
        };

        let w = &self.weights;
        let sub_scores = SubScores {
            efficiency: w.efficiency_score(aircraft.fuel_efficiency_l_km),
            profit: w.profit_score(economics.profit_usd),
            environment: w.environment_score(emissions.co2_per_pax_kg),
            utilization: w.utilization_score(pax_utilization, cargo_utilization),
        };
        let composite = w.composite(&sub_scores, request.preference, aircraft.cruise_speed_kts);

        let reasons = collect_reasons(
            aircraft,
            &economics,
            &emissions,
            pax_utilization,
            request.preference,
        );

        Ok(AircraftScore {
            aircraft: aircraft.name.clone(),
            score: composite.round() as i32,
            fuel_efficiency_l_km: aircraft.fuel_efficiency_l_km,
            operating_cost_usd: economics.operating_cost_usd,
            revenue_usd: economics.revenue_usd,
            profit_usd: economics.profit_usd,
            co2_kg: emissions.co2_kg,
            break_even_load_factor_pct: economics.break_even_load_factor * 100.0,
            max_passengers: aircraft.max_passengers,
            max_range_km: aircraft.max_range_km,
            cruise_speed_kts: aircraft.cruise_speed_kts,
            reasons,
        })
    }
}

fn collect_reasons(
    aircraft: &Aircraft,
    economics: &LegEconomics,
    emissions: &EmissionsReport,
    pax_utilization: f64,
    preference: Preference,
) -> Vec<Reason> {
    let mut reasons = Vec::new();
    if aircraft.fuel_efficiency_l_km < EFFICIENT_BURN_L_KM {
        reasons.push(Reason::FuelEfficient {
            l_per_km: aircraft.fuel_efficiency_l_km,
        });
    }
    if economics.profit_usd > STRONG_PROFIT_USD {
        reasons.push(Reason::StrongProfit {
            usd: economics.profit_usd,
        });
    }
    if emissions.co2_per_pax_kg < LOW_CARBON_PER_PAX_KG {
        reasons.push(Reason::LowCarbon {
            kg_per_pax: emissions.co2_per_pax_kg,
        });
    }
    if pax_utilization > HIGH_SEAT_UTILIZATION {
        reasons.push(Reason::HighUtilization {
            pct: pax_utilization * 100.0,
        });
    }
    if preference != Preference::Balanced {
        reasons.push(Reason::ProfileMatch(preference));
    }
    reasons.truncate(MAX_REASONS);
    reasons
}
