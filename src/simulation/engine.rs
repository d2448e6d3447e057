// src/simulation/engine.rs

use crate::error::{Result, SimulationError};
use crate::model::queues::PendingOrders;
use crate::model::stock::StockPoint;
use crate::simulation::config::SimulationConfig;
use crate::strategy::implementations::ReorderPointPolicy;
use crate::strategy::traits::{OrderContext, OrderPolicy};

/// Day-by-day outcome of a run. All vectors are indexed by day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryTrajectory {
    pub inventory: Vec<u32>,
    pub orders: Vec<u32>,
    pub arrivals: Vec<u32>,
    pub lost_sales: Vec<u32>,
}

impl InventoryTrajectory {
    fn with_capacity(days: usize) -> Self {
        Self {
            inventory: Vec::with_capacity(days),
            orders: Vec::with_capacity(days),
            arrivals: Vec::with_capacity(days),
            lost_sales: Vec::with_capacity(days),
        }
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }
}

pub struct InventorySimulation {
    lead_time: usize,

    // The stocking point and its supply pipeline
    stock: StockPoint,
    pending: PendingOrders,
    policy: Box<dyn OrderPolicy>,

    // Inputs/Outputs
    demand_schedule: Vec<u32>,
    current_day: usize,
    trajectory: InventoryTrajectory,
}

impl InventorySimulation {
    /// Prepares a run. Day 0 is recorded immediately as the initial state:
    /// initial inventory, nothing arrived, nothing ordered.
    pub fn new(
        config: &SimulationConfig,
        demand_schedule: Vec<u32>,
        policy: Box<dyn OrderPolicy>,
    ) -> Result<Self> {
        if demand_schedule.is_empty() {
            return Err(SimulationError::EmptyHorizon);
        }

        let mut trajectory = InventoryTrajectory::with_capacity(demand_schedule.len());
        trajectory.inventory.push(config.initial_inventory);
        trajectory.orders.push(0);
        trajectory.arrivals.push(0);
        trajectory.lost_sales.push(0);

        Ok(Self {
            lead_time: config.lead_time,
            stock: StockPoint::new(config.initial_inventory),
            pending: PendingOrders::new(),
            policy,
            demand_schedule,
            current_day: 1,
            trajectory,
        })
    }

    pub fn run(&mut self) {
        while self.current_day < self.demand_schedule.len() {
            self.step();
        }
    }

    fn step(&mut self) {
        let day = self.current_day;

        // 1. Collect everything due today
        let arrivals = self.pending.pop_due(day);
        if arrivals > 0 {
            tracing::debug!(day, arrivals, "replenishment arrived");
        }
        self.stock.receive(arrivals);

        // 2. Serve demand, losing what cannot be covered
        self.stock.fulfil(self.demand_schedule[day]);

        // 3. Reorder decision on the post-demand stock
        let context = OrderContext { day };
        let order = self.policy.calculate_order(self.stock.inventory, &context);
        if order > 0 {
            self.pending.place(day + self.lead_time, order);
            tracing::debug!(
                day,
                inventory = self.stock.inventory,
                order,
                arrival_day = day + self.lead_time,
                "replenishment ordered"
            );
        }

        // 4. Record & advance
        self.trajectory.inventory.push(self.stock.inventory);
        self.trajectory.orders.push(order);
        self.trajectory.arrivals.push(arrivals);
        self.trajectory.lost_sales.push(self.stock.last_lost_sales);
        self.current_day += 1;
    }

    pub fn trajectory(&self) -> &InventoryTrajectory {
        &self.trajectory
    }

    /// Orders still in transit when the run stopped.
    pub fn outstanding(&self) -> &PendingOrders {
        &self.pending
    }

    pub fn into_trajectory(self) -> InventoryTrajectory {
        self.trajectory
    }
}

/// Runs the reorder-point policy over `demand` and returns the trajectory.
///
/// # Errors
///
/// Returns [`SimulationError::LengthMismatch`] if `reorder_points` does not
/// cover exactly the days of `demand`.
pub fn simulate(
    config: &SimulationConfig,
    demand: &[u32],
    reorder_points: &[f64],
    order_quantity: u32,
) -> Result<InventoryTrajectory> {
    if demand.len() != reorder_points.len() {
        return Err(SimulationError::LengthMismatch {
            demand_len: demand.len(),
            rop_len: reorder_points.len(),
        });
    }

    let policy = ReorderPointPolicy::new(reorder_points.to_vec(), order_quantity);
    let mut sim = InventorySimulation::new(config, demand.to_vec(), Box::new(policy))?;
    sim.run();

    let outstanding = sim.outstanding().on_order();
    let trajectory = sim.into_trajectory();
    tracing::info!(
        days = trajectory.len(),
        orders = trajectory.orders.iter().filter(|&&q| q > 0).count(),
        outstanding,
        "inventory simulation complete"
    );
    Ok(trajectory)
}
