//! # Frontier Trimmer
//!
//! $$
//! k^\* = \arg\min_k \sigma_k, \qquad \text{frontier} = \{(r^\*_k, \sigma_k)\}_{k \ge k^\*}
//! $$
//!
//! Below the minimum-variance point the raw curve folds back: raising the
//! target return can itself lower volatility, which is not on the efficient
//! frontier. Only the branch at or past the global minimum-volatility index
//! is retained.

use super::types::FrontierPoint;

/// Index of the global minimum-volatility point; first index on ties, so the
/// retained suffix is maximal. Empty input maps to index 0.
pub fn efficient_start(points: &[FrontierPoint]) -> usize {
  let mut best = 0;
  for (k, point) in points.iter().enumerate() {
    if point.volatility < points[best].volatility {
      best = k;
    }
  }
  best
}

/// The suffix of the sweep output from the minimum-volatility point onward.
pub fn efficient_branch(points: &[FrontierPoint]) -> &[FrontierPoint] {
  &points[efficient_start(points)..]
}

#[cfg(test)]
mod tests {
  use super::*;

  fn point(target_return: f64, volatility: f64) -> FrontierPoint {
    FrontierPoint {
      target_return,
      volatility,
      weights: Vec::new(),
    }
  }

  #[test]
  fn branch_starts_at_the_global_minimum() {
    let points = vec![
      point(0.10, 0.25),
      point(0.12, 0.21),
      point(0.14, 0.19),
      point(0.16, 0.22),
      point(0.18, 0.27),
    ];

    let branch = efficient_branch(&points);
    assert_eq!(branch.len(), 3);
    assert_eq!(branch[0].volatility, 0.19);

    let global_min = points
      .iter()
      .map(|p| p.volatility)
      .fold(f64::INFINITY, f64::min);
    assert_eq!(branch[0].volatility, global_min);
  }

  #[test]
  fn ties_keep_the_lowest_target() {
    let points = vec![point(0.10, 0.20), point(0.12, 0.18), point(0.14, 0.18)];
    assert_eq!(efficient_start(&points), 1);
  }

  #[test]
  fn monotone_curve_is_kept_whole() {
    let points = vec![point(0.10, 0.18), point(0.12, 0.19), point(0.14, 0.21)];
    assert_eq!(efficient_branch(&points).len(), 3);
  }

  #[test]
  fn empty_input_yields_empty_branch() {
    let points: Vec<FrontierPoint> = Vec::new();
    assert!(efficient_branch(&points).is_empty());
  }
}
