use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Simplified airline unit economics. RASK/CASK are USD per available
/// seat-kilometer, fuel price is USD per liter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParams {
    pub rask: f64,
    pub cask: f64,
    pub load_factor: f64,
    pub fuel_price_usd_l: f64,
}

impl Default for EconomicParams {
    fn default() -> Self {
        EconomicParams {
            rask: 0.12,
            cask: 0.08,
            load_factor: 0.80,
            fuel_price_usd_l: 0.75,
        }
    }
}

/// Per-field overrides merged over the defaults, so a request can replace
/// just the fuel price without restating the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomicOverrides {
    pub rask: Option<f64>,
    pub cask: Option<f64>,
    pub load_factor: Option<f64>,
    pub fuel_price_usd_l: Option<f64>,
}

impl EconomicParams {
    pub fn with_overrides(self, overrides: &EconomicOverrides) -> EconomicParams {
        EconomicParams {
            rask: overrides.rask.unwrap_or(self.rask),
            cask: overrides.cask.unwrap_or(self.cask),
            load_factor: overrides.load_factor.unwrap_or(self.load_factor),
            fuel_price_usd_l: overrides.fuel_price_usd_l.unwrap_or(self.fuel_price_usd_l),
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        Self::positive("rask", self.rask)?;
        Self::positive("cask", self.cask)?;
        Self::positive("fuel_price_usd_l", self.fuel_price_usd_l)?;
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 || self.load_factor > 1.0 {
            return Err(EngineError::invalid(
                "load_factor",
                format!("must be within (0, 1], got {}", self.load_factor),
            ));
        }
        Ok(())
    }

    fn positive(field: &'static str, value: f64) -> Result<(), EngineError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(EngineError::invalid(
                field,
                format!("must be positive, got {value}"),
            ))
        }
    }
}

/// Revenue and cost picture for a single flight leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegEconomics {
    pub ask: f64,
    pub rpk: f64,
    pub revenue_usd: f64,
    pub fuel_liters: f64,
    pub fuel_cost_usd: f64,
    pub operating_cost_usd: f64,
    pub profit_usd: f64,
    /// Fraction of seats that must be sold for revenue to cover cost,
    /// clamped to [0, 1].
    pub break_even_load_factor: f64,
}

impl LegEconomics {
    pub fn evaluate(
        seats: u32,
        fuel_efficiency_l_km: f64,
        distance_km: f64,
        params: &EconomicParams,
    ) -> Result<LegEconomics, EngineError> {
        params.validate()?;
        if seats == 0 {
            return Err(EngineError::invalid("seats", "must be at least 1"));
        }
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(EngineError::invalid(
                "distance_km",
                format!("must be positive, got {distance_km}"),
            ));
        }
        if !fuel_efficiency_l_km.is_finite() || fuel_efficiency_l_km <= 0.0 {
            return Err(EngineError::invalid(
                "fuel_efficiency_l_km",
                format!("must be positive, got {fuel_efficiency_l_km}"),
            ));
        }

        let ask = distance_km * f64::from(seats);
        let rpk = ask * params.load_factor;
        let revenue_usd = params.rask * rpk;
        let fuel_liters = fuel_efficiency_l_km * distance_km;
        let fuel_cost_usd = fuel_liters * params.fuel_price_usd_l;
        let operating_cost_usd = params.cask * ask + fuel_cost_usd;
        let profit_usd = revenue_usd - operating_cost_usd;
        let break_even_load_factor = (operating_cost_usd / (params.rask * ask)).clamp(0.0, 1.0);

        Ok(LegEconomics {
            ask,
            rpk,
            revenue_usd,
            fuel_liters,
            fuel_cost_usd,
            operating_cost_usd,
            profit_usd,
            break_even_load_factor,
        })
    }
}
