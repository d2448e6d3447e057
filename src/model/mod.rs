pub mod queues;
pub mod stock;
