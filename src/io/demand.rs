// src/io/demand.rs

use crate::error::{Result, SimulationError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Poisson};

/// Generates a demand schedule where every day has the exact same quantity.
/// Useful for forcing a known inventory path in tests.
pub fn generate_constant_demand(days: usize, value: u32) -> Vec<u32> {
    vec![value; days]
}

/// Generates a daily demand schedule from a Poisson distribution.
///
/// The generator is seeded, so the same `(days, mean, seed)` always yields
/// the same schedule.
///
/// # Arguments
/// * `days` - Length of the simulation horizon.
/// * `mean` - The Poisson rate (average units per day, e.g. 20.0).
/// * `seed` - RNG seed.
pub fn generate_poisson_demand(days: usize, mean: f64, seed: u64) -> Result<Vec<u32>> {
    if days == 0 {
        return Err(SimulationError::EmptyHorizon);
    }
    let poisson = Poisson::new(mean).map_err(|e| SimulationError::Demand(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let schedule: Vec<u32> = (0..days)
        .map(|_| {
            // Poisson samples are whole, non-negative floats
            let val: f64 = poisson.sample(&mut rng);
            val as u32
        })
        .collect();

    tracing::debug!(days, mean, seed, total = schedule.iter().sum::<u32>(), "generated demand");
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_schedule() {
        let a = generate_poisson_demand(30, 20.0, 42).unwrap();
        let b = generate_poisson_demand(30, 20.0, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
    }

    #[test]
    fn different_seed_changes_schedule() {
        let a = generate_poisson_demand(200, 20.0, 1).unwrap();
        let b = generate_poisson_demand(200, 20.0, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn sample_mean_near_lambda() {
        let schedule = generate_poisson_demand(5000, 20.0, 7).unwrap();
        let mean = schedule.iter().map(|&d| d as f64).sum::<f64>() / schedule.len() as f64;
        assert!((mean - 20.0).abs() < 0.5, "sample mean {mean} too far from 20");
    }

    #[test]
    fn zero_days_rejected() {
        assert!(matches!(
            generate_poisson_demand(0, 20.0, 42),
            Err(SimulationError::EmptyHorizon)
        ));
    }

    #[test]
    fn invalid_mean_rejected() {
        assert!(matches!(
            generate_poisson_demand(10, -1.0, 42),
            Err(SimulationError::Demand(_))
        ));
    }

    #[test]
    fn constant_schedule() {
        assert_eq!(generate_constant_demand(3, 5), vec![5, 5, 5]);
    }
}
