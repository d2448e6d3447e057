// src/simulation/config.rs

use crate::error::{Result, SimulationError};

/// Parameters of a single-item, daily-review inventory run.
///
/// Fixed for the lifetime of the process; the pipeline reads them once.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub item_id: String,
    pub horizon_days: usize,
    pub demand_mean: f64, // Poisson lambda
    pub seed: u64,
    pub alpha: f64,   // Smoothing factor
    pub z_score: f64, // Service level
    pub lead_time: usize,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub initial_inventory: u32,
    /// Days of observed demand used for the variability estimate.
    pub variability_window: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            item_id: "gloves_001".to_string(),
            horizon_days: 30,
            demand_mean: 20.0,
            seed: 42,
            alpha: 0.3,
            z_score: 1.645,
            lead_time: 3,
            order_cost: 50.0,
            holding_cost: 2.0,
            initial_inventory: 100,
            variability_window: 10,
        }
    }
}

impl SimulationConfig {
    /// Rejects parameter sets the pipeline cannot run on.
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 {
            return Err(SimulationError::EmptyHorizon);
        }
        if !self.demand_mean.is_finite() || self.demand_mean <= 0.0 {
            return Err(invalid("demand_mean", "must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(invalid("alpha", "must lie in [0, 1]"));
        }
        if !self.z_score.is_finite() || self.z_score < 0.0 {
            return Err(invalid("z_score", "must be finite and >= 0"));
        }
        if !self.order_cost.is_finite() || self.order_cost < 0.0 {
            return Err(invalid("order_cost", "must be finite and >= 0"));
        }
        if !self.holding_cost.is_finite() || self.holding_cost <= 0.0 {
            return Err(invalid("holding_cost", "must be finite and > 0"));
        }
        if self.variability_window == 0 {
            return Err(invalid("variability_window", "must be at least one day"));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: &str) -> SimulationError {
    SimulationError::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_horizon_rejected() {
        let config = SimulationConfig {
            horizon_days: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SimulationError::EmptyHorizon)));
    }

    #[test]
    fn alpha_out_of_range_rejected() {
        let config = SimulationConfig {
            alpha: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidParameter { name: "alpha", .. })
        ));
    }

    #[test]
    fn zero_holding_cost_rejected() {
        let config = SimulationConfig {
            holding_cost: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidParameter {
                name: "holding_cost",
                ..
            })
        ));
    }

    #[test]
    fn zero_lead_time_accepted() {
        let config = SimulationConfig {
            lead_time: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
