// src/strategy/traits.rs

use std::fmt::Debug;

/// What the simulator knows about the current day when it asks for a decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderContext {
    /// Day index being simulated.
    pub day: usize,
}

/// Defines the replenishment decision for the stocking point.
///
/// We require `Send` + `Sync` so a finished policy can live inside shared,
/// read-only state.
pub trait OrderPolicy: Debug + Send + Sync {
    /// Calculates how much to order from the supplier today.
    ///
    /// # Arguments
    /// * `inventory` - On-hand stock after today's arrivals and demand.
    /// * `context` - Day index.
    fn calculate_order(&mut self, inventory: u32, context: &OrderContext) -> u32;
}
