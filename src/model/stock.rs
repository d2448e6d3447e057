// src/model/stock.rs

/// On-hand stock of the single item under a lost-sales policy.
#[derive(Debug, Clone)]
pub struct StockPoint {
    pub inventory: u32,

    // Tracking for the trajectory
    pub last_lost_sales: u32,
}

impl StockPoint {
    pub fn new(initial_inventory: u32) -> Self {
        Self {
            inventory: initial_inventory,
            last_lost_sales: 0,
        }
    }

    /// Step 1: Receive goods from the supplier.
    pub fn receive(&mut self, quantity: u32) {
        self.inventory = self.inventory.saturating_add(quantity);
    }

    /// Step 2: Serve today's demand.
    ///
    /// Demand beyond what is on hand is lost, not backlogged; stock bottoms
    /// out at zero. Returns the quantity actually served.
    pub fn fulfil(&mut self, demand: u32) -> u32 {
        let served = demand.min(self.inventory);
        self.inventory -= served;
        self.last_lost_sales = demand - served;
        served
    }
}
