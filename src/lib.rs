//! Single-item inventory simulation under Poisson demand.
//!
//! The pipeline runs once: seeded demand, exponential-smoothing forecast,
//! safety stock and daily reorder points, EOQ, then a day-stepped simulation
//! with in-flight orders. The result is an immutable [`InventoryContext`]
//! that the query functions in [`service`] read from.

pub mod api;
pub mod error;
pub mod forecast;
pub mod io;
pub mod model;
pub mod notify;
pub mod service;
pub mod simulation;
pub mod strategy;

pub use error::{Result, SimulationError};
pub use notify::{LogNotifier, Notifier, NotifyError, ReorderAlert};
pub use simulation::config::SimulationConfig;
pub use simulation::context::InventoryContext;
pub use simulation::table::{DailyRecord, ResultTable};
