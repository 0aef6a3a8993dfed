use ndarray::Array1;
use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{EstimateError, Result};

/// Estimates π by sampling every coordinate at once and reducing with bulk
/// array arithmetic. Single-threaded; runs are not reproducible.
pub fn estimate_pi(total_points: usize) -> Result<f64> {
    estimate_with_rng(total_points, &mut StdRng::from_entropy())
}

/// Seeded variant of [`estimate_pi`]: identical seeds give identical
/// estimates.
pub fn estimate_pi_seeded(total_points: usize, seed: u64) -> Result<f64> {
    estimate_with_rng(total_points, &mut StdRng::seed_from_u64(seed))
}

fn estimate_with_rng<R: Rng>(total_points: usize, rng: &mut R) -> Result<f64> {
    if total_points == 0 {
        return Err(EstimateError::InvalidArgument(
            "total_points must be positive".into(),
        ));
    }

    let x: Array1<f64> = (&mut *rng).sample_iter(Standard).take(total_points).collect();
    let y: Array1<f64> = (&mut *rng).sample_iter(Standard).take(total_points).collect();

    Ok(4.0 * count_inside(&x, &y) as f64 / total_points as f64)
}

fn count_inside(x: &Array1<f64>, y: &Array1<f64>) -> usize {
    let distances = (x * x + y * y).mapv(f64::sqrt);
    distances.iter().filter(|&&d| d <= 1.0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_near_pi() {
        let estimate = estimate_pi_seeded(1_000_000, 42).unwrap();
        assert!(
            (estimate - std::f64::consts::PI).abs() < 0.05,
            "estimate {} too far from π",
            estimate
        );
    }

    #[test]
    fn same_seed_same_estimate() {
        let first = estimate_pi_seeded(100_000, 9).unwrap();
        let second = estimate_pi_seeded(100_000, 9).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn all_points_inside_gives_four() {
        let x = Array1::from_elem(100, 0.5);
        let y = Array1::from_elem(100, 0.5);
        assert_eq!(count_inside(&x, &y), 100);
        assert_eq!(4.0 * count_inside(&x, &y) as f64 / 100.0, 4.0);
    }

    #[test]
    fn all_points_outside_gives_zero() {
        let x = Array1::from_elem(100, 1.0);
        let y = Array1::from_elem(100, 1.0);
        assert_eq!(count_inside(&x, &y), 0);
        assert_eq!(4.0 * count_inside(&x, &y) as f64 / 100.0, 0.0);
    }

    #[test]
    fn boundary_point_counts_as_inside() {
        let x = Array1::from_elem(1, 1.0);
        let y = Array1::from_elem(1, 0.0);
        assert_eq!(count_inside(&x, &y), 1);
    }

    #[test]
    fn zero_points_rejected() {
        assert!(estimate_pi(0).is_err());
    }
}
