//! Read-only queries over a built [`InventoryContext`].

use serde::Serialize;

use crate::notify::{self, Notifier, ReorderAlert};
use crate::simulation::context::InventoryContext;
use crate::simulation::table::{round_to, DailyRecord};

/// Latest stock position and the recommended replenishment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStatus {
    pub item_id: String,
    pub inventory: u32,
    pub forecast_demand: f64,
    #[serde(rename = "ROP")]
    pub rop: f64,
    pub safety_stock: f64,
    pub recommended_order: u32,
}

/// Cost and service indicators for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiMetrics {
    #[serde(rename = "EOQ")]
    pub eoq: u32,
    pub total_cost: f64,
    pub turnover_rate: f64,
    pub stockout_risk: f64,
}

/// Reports the most recent day. If its stock is at or below the (rounded)
/// reorder point, an alert goes to `notifier`; delivery failures do not
/// affect the returned status.
pub fn inventory_status(ctx: &InventoryContext, notifier: &dyn Notifier) -> InventoryStatus {
    let latest = ctx.table().latest();

    if latest.inventory as f64 <= latest.rop {
        let alert = ReorderAlert {
            item_id: ctx.item_id().to_string(),
            inventory: latest.inventory,
            reorder_point: latest.rop,
            order_quantity: ctx.eoq(),
        };
        notify::dispatch(notifier, &alert);
    }

    InventoryStatus {
        item_id: ctx.item_id().to_string(),
        inventory: latest.inventory,
        forecast_demand: latest.forecast,
        rop: latest.rop,
        safety_stock: round_to(ctx.safety_stock(), 2),
        recommended_order: ctx.eoq(),
    }
}

pub fn kpi_metrics(ctx: &InventoryContext) -> KpiMetrics {
    let config = ctx.config();
    let table = ctx.table();
    let eoq = ctx.eoq() as f64;
    let total_demand = table.total_demand() as f64;

    let total_cost = (total_demand / eoq) * config.order_cost + (eoq / 2.0) * config.holding_cost;

    // Whole turns only; the rounding below is a no-op kept for the output format
    let average_inventory = table.mean_inventory();
    let turnover = if average_inventory > 0.0 {
        (total_demand / average_inventory).trunc()
    } else {
        0.0
    };

    KpiMetrics {
        eoq: ctx.eoq(),
        total_cost: round_to(total_cost, 2),
        turnover_rate: round_to(turnover, 2),
        stockout_risk: round_to(1.0 / (1.0 + ctx.safety_stock()), 4),
    }
}

pub fn daily_series(ctx: &InventoryContext) -> &[DailyRecord] {
    ctx.table().rows()
}
