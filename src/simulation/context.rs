//! The immutable state every query is served from.
//!
//! Built once at startup by running the full pipeline:
//! demand -> forecast -> safety stock / ROP -> EOQ -> simulation -> table.

use crate::error::{Result, SimulationError};
use crate::forecast::exponential_smoothing;
use crate::io::demand::generate_poisson_demand;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{simulate, InventoryTrajectory};
use crate::simulation::table::ResultTable;
use crate::strategy::optimization::{
    annual_demand, demand_std_dev, economic_order_quantity, reorder_points, safety_stock,
};

#[derive(Debug, Clone)]
pub struct InventoryContext {
    config: SimulationConfig,
    demand: Vec<u32>,
    forecast: Vec<f64>,
    safety_stock: f64,
    reorder_points: Vec<f64>,
    eoq: u32,
    trajectory: InventoryTrajectory,
    table: ResultTable,
}

impl InventoryContext {
    /// Runs the pipeline on seeded Poisson demand.
    pub fn build(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let demand = generate_poisson_demand(config.horizon_days, config.demand_mean, config.seed)?;
        Self::from_demand(config, demand)
    }

    /// Runs the pipeline on a caller-supplied demand schedule.
    ///
    /// The schedule must cover exactly `config.horizon_days` days.
    pub fn from_demand(config: SimulationConfig, demand: Vec<u32>) -> Result<Self> {
        config.validate()?;
        if demand.len() != config.horizon_days {
            return Err(SimulationError::InvalidParameter {
                name: "horizon_days",
                reason: format!(
                    "demand schedule covers {} days, expected {}",
                    demand.len(),
                    config.horizon_days
                ),
            });
        }

        let forecast = exponential_smoothing(&demand, config.alpha)?;

        let std_dev = demand_std_dev(&demand, config.variability_window)?;
        let safety_stock = safety_stock(config.z_score, std_dev, config.lead_time);
        let reorder_points = reorder_points(&forecast, config.lead_time, safety_stock);

        let annual = annual_demand(&demand, config.horizon_days);
        let eoq = economic_order_quantity(annual, config.order_cost, config.holding_cost)?;
        if eoq == 0 {
            return Err(SimulationError::ZeroOrderQuantity);
        }

        tracing::info!(
            item = %config.item_id,
            std_dev,
            safety_stock,
            annual_demand = annual,
            eoq,
            "replenishment parameters computed"
        );

        let trajectory = simulate(&config, &demand, &reorder_points, eoq)?;
        let table = ResultTable::assemble(&demand, &forecast, &reorder_points, &trajectory)?;

        Ok(Self {
            config,
            demand,
            forecast,
            safety_stock,
            reorder_points,
            eoq,
            trajectory,
            table,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn item_id(&self) -> &str {
        &self.config.item_id
    }

    pub fn demand(&self) -> &[u32] {
        &self.demand
    }

    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }

    pub fn safety_stock(&self) -> f64 {
        self.safety_stock
    }

    /// Unrounded reorder point per day, as used by the simulator.
    pub fn reorder_points(&self) -> &[f64] {
        &self.reorder_points
    }

    pub fn eoq(&self) -> u32 {
        self.eoq
    }

    pub fn trajectory(&self) -> &InventoryTrajectory {
        &self.trajectory
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }
}
