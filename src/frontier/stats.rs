//! # Portfolio Statistics
//!
//! $$
//! \mu_p = \mu^\top \mathbf{w}, \qquad \sigma_p = \sqrt{\mathbf{w}^\top \Sigma \mathbf{w}}
//! $$
//!
//! Pure portfolio summary at an arbitrary weight vector. The solver calls
//! this at intermediate, possibly infeasible iterates, so no feasibility
//! assumptions are made here.

use ndarray::ArrayView1;

use super::types::MomentEstimate;
use super::types::PortfolioStats;

/// Expected return, volatility and return/volatility ratio of a weight vector.
///
/// The ratio is an unguarded division: a zero-volatility portfolio yields a
/// NaN or infinite `sharpe`, which propagates to the caller.
pub fn portfolio_statistics(weights: ArrayView1<f64>, estimate: &MomentEstimate) -> PortfolioStats {
  let expected_return = estimate.expected_returns().dot(&weights);
  let variance = weights.dot(&estimate.covariance().dot(&weights));
  let volatility = variance.sqrt();

  PortfolioStats {
    expected_return,
    volatility,
    sharpe: expected_return / volatility,
  }
}
