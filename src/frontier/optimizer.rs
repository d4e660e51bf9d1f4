//! # Frontier Optimizer
//!
//! $$
//! \sigma_k = \min_{\mathbf{w} \in \Delta^{N-1}} \sqrt{\mathbf{w}^\top \Sigma \mathbf{w}}
//! + \lambda (\mu^\top \mathbf{w} - r^\*_k)^2
//! $$
//!
//! One independent constrained minimum-volatility solve per target return on
//! an evenly spaced grid. Weights live on the long-only simplex through a
//! softmax parametrization, so the full-investment and no-short constraints
//! hold at every iterate; the return-equality constraint is a quadratic
//! penalty large enough to be driven to zero at the optimum.

use anyhow::Result;
use anyhow::bail;
use argmin::core::CostFunction;
use argmin::core::Executor;
use argmin::solver::neldermead::NelderMead;
use ndarray::Array1;
use rayon::prelude::*;
use tracing::debug;

use super::stats::portfolio_statistics;
use super::types::FrontierPoint;
use super::types::MomentEstimate;

/// Weight on the squared return-target residual. Large enough that the
/// residual at the optimum is negligible against the volatility objective.
const RETURN_PENALTY: f64 = 1e4;

const MAX_ITERS: u64 = 5000;

fn softmax(x: &[f64]) -> Vec<f64> {
  if x.is_empty() {
    return Vec::new();
  }

  let max_x = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
  let exps: Vec<f64> = x.iter().map(|&v| (v - max_x).exp()).collect();
  let sum: f64 = exps.iter().sum();

  if sum < 1e-15 {
    vec![1.0 / x.len() as f64; x.len()]
  } else {
    exps.iter().map(|&e| e / sum).collect()
  }
}

/// Cost for a single target return, built per solve so the captured target
/// is a value, not a shared loop variable.
struct TargetVolatilityCost<'a> {
  estimate: &'a MomentEstimate,
  target_return: f64,
}

impl CostFunction for TargetVolatilityCost<'_> {
  type Param = Vec<f64>;
  type Output = f64;

  fn cost(&self, x: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
    let w = Array1::from(softmax(x));
    let stats = portfolio_statistics(w.view(), self.estimate);
    let residual = stats.expected_return - self.target_return;

    Ok(stats.volatility + RETURN_PENALTY * residual * residual)
  }
}

/// Minimum-volatility weights for one target return.
///
/// The initial point is the softmax origin, i.e. the equal-weight portfolio;
/// solves on the grid share nothing, so there is no warm-starting. A solver
/// error falls back to equal weights rather than surfacing; non-convergence
/// is accepted as-is and the best-found point is recorded.
fn min_volatility_weights(estimate: &MomentEstimate, target_return: f64) -> Vec<f64> {
  let n = estimate.asset_count();

  let cost = TargetVolatilityCost {
    estimate,
    target_return,
  };

  let x0 = vec![0.0; n];
  let mut simplex = Vec::with_capacity(n + 1);
  simplex.push(x0.clone());
  for i in 0..n {
    let mut point = x0.clone();
    point[i] = 1.0;
    simplex.push(point);
  }

  match NelderMead::new(simplex).with_sd_tolerance(1e-10) {
    Ok(solver) => {
      match Executor::new(cost, solver)
        .configure(|state| state.max_iters(MAX_ITERS))
        .run()
      {
        Ok(res) => {
          let best_x = res.state.best_param.unwrap_or(x0);
          softmax(&best_x)
        }
        Err(_) => vec![1.0 / n as f64; n],
      }
    }
    Err(_) => vec![1.0 / n as f64; n],
  }
}

/// Evenly spaced target grid, both ends inclusive.
pub fn target_grid(min_return: f64, max_return: f64, sample_count: usize) -> Array1<f64> {
  Array1::linspace(min_return, max_return, sample_count)
}

/// One constrained solve per target return over the grid; output order
/// follows the grid. Solves are independent and run in parallel.
pub fn sweep(
  estimate: &MomentEstimate,
  min_return: f64,
  max_return: f64,
  sample_count: usize,
) -> Result<Vec<FrontierPoint>> {
  if sample_count == 0 {
    bail!("sample count must be positive");
  }
  if min_return > max_return {
    bail!(
      "min return {} exceeds max return {}",
      min_return,
      max_return
    );
  }

  let targets = target_grid(min_return, max_return, sample_count);
  debug!(
    targets = sample_count,
    min_return, max_return, "sweeping frontier targets"
  );

  let points = targets
    .to_vec()
    .into_par_iter()
    .map(|target_return| {
      let weights = min_volatility_weights(estimate, target_return);
      let stats = portfolio_statistics(Array1::from(weights.clone()).view(), estimate);

      FrontierPoint {
        target_return,
        volatility: stats.volatility,
        weights,
      }
    })
    .collect();

  Ok(points)
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::arr1;
  use ndarray::arr2;

  use super::*;

  fn uncorrelated() -> MomentEstimate {
    MomentEstimate::new(
      arr1(&[0.10, 0.20]),
      arr2(&[[0.04, 0.0], [0.0, 0.09]]),
    )
    .unwrap()
  }

  #[test]
  fn rejects_inverted_bounds() {
    let err = sweep(&uncorrelated(), 0.2, 0.1, 10).unwrap_err();
    assert!(err.to_string().contains("exceeds"));
  }

  #[test]
  fn rejects_zero_sample_count() {
    assert!(sweep(&uncorrelated(), 0.1, 0.2, 0).is_err());
  }

  #[test]
  fn grid_is_inclusive_and_evenly_spaced() {
    let grid = target_grid(0.10, 0.20, 3);
    assert_eq!(grid.len(), 3);
    assert_abs_diff_eq!(grid[0], 0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(grid[1], 0.15, epsilon = 1e-12);
    assert_abs_diff_eq!(grid[2], 0.20, epsilon = 1e-12);
  }

  #[test]
  fn sweep_length_matches_sample_count_in_grid_order() {
    let points = sweep(&uncorrelated(), 0.10, 0.20, 7).unwrap();
    assert_eq!(points.len(), 7);

    let step = (0.20 - 0.10) / 6.0;
    for (k, point) in points.iter().enumerate() {
      assert_abs_diff_eq!(point.target_return, 0.10 + step * k as f64, epsilon = 1e-12);
    }
  }

  #[test]
  fn low_corner_target_concentrates_in_the_low_return_asset() {
    let points = sweep(&uncorrelated(), 0.10, 0.10, 1).unwrap();
    let point = &points[0];

    assert_abs_diff_eq!(point.weights[0], 1.0, epsilon = 0.05);
    assert_abs_diff_eq!(point.weights[1], 0.0, epsilon = 0.05);
    assert_abs_diff_eq!(point.volatility, 0.20, epsilon = 0.02);
  }

  #[test]
  fn high_corner_target_concentrates_in_the_high_return_asset() {
    let points = sweep(&uncorrelated(), 0.20, 0.20, 1).unwrap();
    let point = &points[0];

    assert_abs_diff_eq!(point.weights[0], 0.0, epsilon = 0.05);
    assert_abs_diff_eq!(point.weights[1], 1.0, epsilon = 0.05);
    assert_abs_diff_eq!(point.volatility, 0.30, epsilon = 0.02);
  }

  #[test]
  fn mid_target_matches_the_analytic_constrained_solution() {
    // mu'w = 0.15 with w summing to 1 forces w = [0.5, 0.5].
    let points = sweep(&uncorrelated(), 0.15, 0.15, 1).unwrap();
    let expected = (0.25 * 0.04 + 0.25 * 0.09_f64).sqrt();

    assert_abs_diff_eq!(points[0].volatility, expected, epsilon = 0.02);
    assert_abs_diff_eq!(points[0].weights[0], 0.5, epsilon = 0.05);
  }

  #[test]
  fn achieved_returns_sit_on_their_targets() {
    let est = uncorrelated();
    let points = sweep(&est, 0.12, 0.18, 4).unwrap();

    for point in &points {
      let stats = portfolio_statistics(Array1::from(point.weights.clone()).view(), &est);
      assert_abs_diff_eq!(stats.expected_return, point.target_return, epsilon = 0.01);
    }
  }
}
