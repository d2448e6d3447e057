//! Demand forecasting.

pub mod smoothing;

pub use smoothing::exponential_smoothing;
