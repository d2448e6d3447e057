//! The per-day result table every query reads from.

use serde::Serialize;

use crate::error::{Result, SimulationError};
use crate::simulation::engine::InventoryTrajectory;

/// One row of the result table.
///
/// `forecast` and `rop` are rounded to two decimals for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub day: usize,
    pub demand: u32,
    pub forecast: f64,
    #[serde(rename = "ROP")]
    pub rop: f64,
    pub inventory: u32,
    pub order: u32,
}

/// Ordered, read-only set of [`DailyRecord`] rows, one per simulated day.
///
/// Never empty once assembled.
#[derive(Debug, Clone)]
pub struct ResultTable {
    rows: Vec<DailyRecord>,
}

impl ResultTable {
    /// Zips the pipeline outputs into rows.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptySeries`] for an empty run and
    /// [`SimulationError::LengthMismatch`] when the series disagree on length.
    pub fn assemble(
        demand: &[u32],
        forecast: &[f64],
        reorder_points: &[f64],
        trajectory: &InventoryTrajectory,
    ) -> Result<Self> {
        if demand.is_empty() {
            return Err(SimulationError::EmptySeries);
        }
        let days = demand.len();
        for len in [
            forecast.len(),
            reorder_points.len(),
            trajectory.inventory.len(),
            trajectory.orders.len(),
        ] {
            if len != days {
                return Err(SimulationError::LengthMismatch {
                    demand_len: days,
                    rop_len: len,
                });
            }
        }

        let rows = (0..days)
            .map(|day| DailyRecord {
                day,
                demand: demand[day],
                forecast: round_to(forecast[day], 2),
                rop: round_to(reorder_points[day], 2),
                inventory: trajectory.inventory[day],
                order: trajectory.orders[day],
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[DailyRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for the most recent simulated day.
    pub fn latest(&self) -> &DailyRecord {
        &self.rows[self.rows.len() - 1]
    }

    pub fn total_demand(&self) -> u64 {
        self.rows.iter().map(|r| r.demand as u64).sum()
    }

    pub fn mean_inventory(&self) -> f64 {
        let total: u64 = self.rows.iter().map(|r| r.inventory as u64).sum();
        total as f64 / self.rows.len() as f64
    }
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(inventory: Vec<u32>, orders: Vec<u32>) -> InventoryTrajectory {
        let days = inventory.len();
        InventoryTrajectory {
            inventory,
            orders,
            arrivals: vec![0; days],
            lost_sales: vec![0; days],
        }
    }

    #[test]
    fn assembles_rounded_rows() {
        let table = ResultTable::assemble(
            &[10, 12],
            &[10.0, 10.606],
            &[35.1234, 36.9999],
            &trajectory(vec![100, 88], vec![0, 0]),
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].forecast, 10.61);
        assert_eq!(table.rows()[0].rop, 35.12);
        assert_eq!(table.rows()[1].rop, 37.0);
        assert_eq!(table.latest().day, 1);
    }

    #[test]
    fn reductions() {
        let table = ResultTable::assemble(
            &[5, 10, 15],
            &[0.0; 3],
            &[0.0; 3],
            &trajectory(vec![30, 20, 10], vec![0; 3]),
        )
        .unwrap();
        assert_eq!(table.total_demand(), 30);
        assert!((table.mean_inventory() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn mismatched_series_rejected() {
        let err = ResultTable::assemble(
            &[5, 10],
            &[0.0; 2],
            &[0.0; 1],
            &trajectory(vec![1, 1], vec![0, 0]),
        );
        assert!(matches!(err, Err(SimulationError::LengthMismatch { .. })));
    }

    #[test]
    fn empty_run_rejected() {
        let err = ResultTable::assemble(&[], &[], &[], &trajectory(vec![], vec![]));
        assert!(matches!(err, Err(SimulationError::EmptySeries)));
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let row = DailyRecord {
            day: 3,
            demand: 21,
            forecast: 19.5,
            rop: 66.25,
            inventory: 40,
            order: 0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "day": 3, "demand": 21, "forecast": 19.5,
                "ROP": 66.25, "inventory": 40, "order": 0
            })
        );
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(2.345678, 2), 2.35);
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(7.0, 2), 7.0);
    }
}
