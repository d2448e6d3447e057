#![allow(dead_code)]

use std::sync::Mutex;

use jit_inventory::{InventoryContext, Notifier, NotifyError, ReorderAlert, SimulationConfig};

/// Records every alert it is given.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<ReorderAlert>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<ReorderAlert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, alert: &ReorderAlert) -> Result<(), NotifyError> {
        self.alerts.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

/// Records every alert, then reports a transport failure.
#[derive(Default)]
pub struct FailingNotifier {
    pub attempts: Mutex<usize>,
}

impl Notifier for FailingNotifier {
    fn send(&self, _alert: &ReorderAlert) -> Result<(), NotifyError> {
        *self.attempts.lock().unwrap() += 1;
        Err(NotifyError::Rejected("535 authentication failed".to_string()))
    }
}

/// A run whose final day is guaranteed to sit below its reorder point:
/// 10 days of demand 20, lead time 10 so nothing ever arrives, 10 units on
/// hand. Stock is 0 from day 1 on; ROP is 20 * 10 = 200; EOQ is 31.
pub fn starved_context() -> InventoryContext {
    let config = SimulationConfig {
        horizon_days: 10,
        lead_time: 10,
        initial_inventory: 10,
        ..Default::default()
    };
    InventoryContext::from_demand(config, vec![20; 10]).unwrap()
}

/// A run that stays far above its reorder point.
pub fn overstocked_context() -> InventoryContext {
    let config = SimulationConfig {
        horizon_days: 10,
        lead_time: 3,
        initial_inventory: 10_000,
        ..Default::default()
    };
    InventoryContext::from_demand(config, vec![1; 10]).unwrap()
}
