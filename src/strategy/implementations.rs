// src/strategy/implementations.rs

use crate::strategy::traits::{OrderContext, OrderPolicy};

// =========================================================================
// Reorder Point Policy ((s, Q) with a daily reorder point)
// =========================================================================

/// Orders a fixed batch whenever on-hand stock is at or below the day's
/// reorder point.
///
/// The threshold is inclusive and has no hysteresis: stock exactly equal to
/// the reorder point triggers an order, and a new batch is ordered every day
/// the condition holds, regardless of what is already on order.
#[derive(Debug, Clone)]
pub struct ReorderPointPolicy {
    reorder_points: Vec<f64>,
    order_quantity: u32,
}

impl ReorderPointPolicy {
    pub fn new(reorder_points: Vec<f64>, order_quantity: u32) -> Self {
        Self {
            reorder_points,
            order_quantity,
        }
    }

    /// Reorder point for `day`; days past the schedule never trigger.
    pub fn reorder_point(&self, day: usize) -> f64 {
        self.reorder_points
            .get(day)
            .copied()
            .unwrap_or(f64::NEG_INFINITY)
    }
}

impl OrderPolicy for ReorderPointPolicy {
    fn calculate_order(&mut self, inventory: u32, context: &OrderContext) -> u32 {
        if inventory as f64 <= self.reorder_point(context.day) {
            self.order_quantity
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(day: usize) -> OrderContext {
        OrderContext { day }
    }

    #[test]
    fn orders_at_exact_threshold() {
        let mut policy = ReorderPointPolicy::new(vec![0.0, 40.0], 25);
        assert_eq!(policy.calculate_order(40, &ctx(1)), 25);
    }

    #[test]
    fn no_order_above_threshold() {
        let mut policy = ReorderPointPolicy::new(vec![0.0, 40.0], 25);
        assert_eq!(policy.calculate_order(41, &ctx(1)), 0);
    }

    #[test]
    fn fractional_threshold() {
        let mut policy = ReorderPointPolicy::new(vec![39.99], 25);
        assert_eq!(policy.calculate_order(40, &ctx(0)), 0);
        assert_eq!(policy.calculate_order(39, &ctx(0)), 25);
    }

    #[test]
    fn no_hysteresis_between_days() {
        let mut policy = ReorderPointPolicy::new(vec![50.0], 10);
        // Repeated days below the threshold keep ordering
        assert_eq!(policy.calculate_order(0, &ctx(0)), 10);
        assert_eq!(policy.calculate_order(0, &ctx(0)), 10);
    }

    #[test]
    fn out_of_schedule_day_never_orders() {
        let mut policy = ReorderPointPolicy::new(vec![50.0], 10);
        assert_eq!(policy.calculate_order(0, &ctx(3)), 0);
    }
}
