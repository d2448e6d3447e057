// src/strategy/optimization.rs

//! Replenishment parameter calculations.
//!
//! Safety stock and reorder points follow the classic service-level model:
//! cover forecast demand over the lead time, plus `z` standard deviations of
//! lead-time demand. Order size follows the Wilson EOQ formula.

use crate::error::{Result, SimulationError};

/// Days in the year used to annualize demand and holding cost.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Population standard deviation (divisor N) of the first `window` days of demand.
///
/// Uses the whole schedule when it is shorter than the window.
pub fn demand_std_dev(demand: &[u32], window: usize) -> Result<f64> {
    let sample = &demand[..window.min(demand.len())];
    if sample.is_empty() {
        return Err(SimulationError::EmptySeries);
    }

    let n = sample.len() as f64;
    let mean = sample.iter().map(|&d| d as f64).sum::<f64>() / n;
    let variance = sample
        .iter()
        .map(|&d| {
            let diff = d as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    Ok(variance.sqrt())
}

/// Calculates the safety stock held against lead-time demand variability.
///
/// # Formula
/// SafetyStock = Z * StdDev * sqrt(LeadTime)
///
/// A single run-wide constant: variability is measured once, not per day.
pub fn safety_stock(z_score: f64, std_dev: f64, lead_time: usize) -> f64 {
    z_score * std_dev * (lead_time as f64).sqrt()
}

/// Calculates the reorder point for every day of the forecast.
///
/// # Formula
/// ROP_t = Forecast_t * LeadTime + SafetyStock
pub fn reorder_points(forecast: &[f64], lead_time: usize, safety_stock: f64) -> Vec<f64> {
    forecast
        .iter()
        .map(|f| f * lead_time as f64 + safety_stock)
        .collect()
}

/// Scales the demand observed over `horizon_days` to a full year.
pub fn annual_demand(demand: &[u32], horizon_days: usize) -> f64 {
    let total: u64 = demand.iter().map(|&d| d as u64).sum();
    total as f64 * (DAYS_PER_YEAR / horizon_days as f64)
}

/// Calculates the Economic Order Quantity.
///
/// # Formula
/// EOQ = floor( sqrt( 2 * AnnualDemand * OrderCost / (HoldingCost * 365) ) )
///
/// The result is truncated, never rounded.
///
/// # Arguments
/// * `annual_demand` - Projected demand over a year (see [`annual_demand`]).
/// * `order_cost` - Fixed cost per replenishment order.
/// * `holding_cost` - Cost per unit held, as configured.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] when the batch size does not
/// fit in a `u32` (including an infinite result from a zero holding cost).
pub fn economic_order_quantity(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
) -> Result<u32> {
    let eoq = ((2.0 * annual_demand * order_cost) / (holding_cost * DAYS_PER_YEAR)).sqrt();

    // NaN (negative or 0/0 inputs) collapses to an empty order
    if eoq.is_nan() || eoq <= 0.0 {
        return Ok(0);
    }

    let batch = eoq.floor();
    if batch > u32::MAX as f64 {
        return Err(SimulationError::InvalidParameter {
            name: "order_cost",
            reason: format!(
                "economic order quantity {batch:.0} exceeds {} units; order cost is too large relative to holding cost",
                u32::MAX
            ),
        });
    }
    Ok(batch as u32)
}
