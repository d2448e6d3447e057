//! Single exponential smoothing over a daily demand schedule.
//!
//! ```text
//! F_0 = D_0
//! F_t = α D_{t-1} + (1 - α) F_{t-1}
//! ```
//!
//! Each forecast only sees demand up to the previous day, so `F_t` is the
//! expectation for day `t` formed the evening before.

use crate::error::{Result, SimulationError};

/// Produces one forecast per day of `demand`.
///
/// # Errors
///
/// Returns [`SimulationError::EmptySeries`] when `demand` is empty, since the
/// recurrence is seeded from the first observation.
pub fn exponential_smoothing(demand: &[u32], alpha: f64) -> Result<Vec<f64>> {
    let (&first, _) = demand.split_first().ok_or(SimulationError::EmptySeries)?;

    let mut forecast = Vec::with_capacity(demand.len());
    let mut level = first as f64;
    forecast.push(level);

    for &observed in &demand[..demand.len() - 1] {
        level = alpha * observed as f64 + (1.0 - alpha) * level;
        forecast.push(level);
    }

    Ok(forecast)
}
