//! Error types for the inventory pipeline.

/// Error type for all fallible operations in the simulation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// Returned when a parameter is outside its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the configuration.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the simulation horizon is zero days.
    #[error("simulation horizon must be at least one day")]
    EmptyHorizon,

    /// Returned when a series that needs a seed value is empty.
    #[error("input series is empty")]
    EmptySeries,

    /// Returned when two series that must align differ in length.
    #[error("length mismatch: demand has {demand_len} days, reorder points has {rop_len}")]
    LengthMismatch {
        /// Length of the demand series.
        demand_len: usize,
        /// Length of the reorder-point series.
        rop_len: usize,
    },

    /// Returned when the economic order quantity truncates to zero.
    #[error("economic order quantity is zero; every replenishment would be empty")]
    ZeroOrderQuantity,

    /// Returned when the demand distribution cannot be constructed.
    #[error("demand distribution: {0}")]
    Demand(String),

    /// Returned when the result table cannot be written as CSV.
    #[error("csv export failed: {0}")]
    Export(#[from] csv::Error),

    /// Returned when flushing an export fails.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_parameter() {
        let e = SimulationError::InvalidParameter {
            name: "alpha",
            reason: "must lie in [0, 1]".to_string(),
        };
        assert_eq!(e.to_string(), "invalid parameter `alpha`: must lie in [0, 1]");
    }

    #[test]
    fn error_length_mismatch() {
        let e = SimulationError::LengthMismatch {
            demand_len: 30,
            rop_len: 29,
        };
        assert_eq!(
            e.to_string(),
            "length mismatch: demand has 30 days, reorder points has 29"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SimulationError>();
    }
}
