//! # Return Data
//!
//! $$
//! \mu = 252\,\bar{r}, \qquad \Sigma = 252\,\widehat{\mathrm{Cov}}(r)
//! $$
//!
//! Daily percentage returns from an adjusted-close table and their annualized
//! first and second sample moments.

use anyhow::Result;
use ndarray::Array1;
use ndarray::Array2;
use ndarray::Axis;

use super::TRADING_DAYS_PER_YEAR;
use super::types::MomentEstimate;
use super::types::PriceHistory;

/// Simple daily percentage change per asset.
///
/// The first row carries no prior day and is defined as zero; it stays in the
/// series and participates in the moment estimates downstream.
pub fn daily_returns(prices: &PriceHistory) -> Array2<f64> {
  let closes = prices.adjusted_close();
  let (rows, cols) = closes.dim();
  let mut returns = Array2::<f64>::zeros((rows, cols));

  for t in 1..rows {
    for a in 0..cols {
      let prev = closes[[t - 1, a]];
      if prev != 0.0 {
        returns[[t, a]] = closes[[t, a]] / prev - 1.0;
      }
    }
  }

  returns
}

/// Column means and the ddof-1 sample covariance of a row-per-observation table.
pub(crate) fn column_moments(rows: &Array2<f64>) -> (Array1<f64>, Array2<f64>) {
  let (t, n) = rows.dim();
  let means = rows
    .mean_axis(Axis(0))
    .unwrap_or_else(|| Array1::zeros(n));

  let mut cov = Array2::<f64>::zeros((n, n));
  if t < 2 {
    return (means, cov);
  }

  for i in 0..n {
    for j in i..n {
      let mut acc = 0.0;
      for k in 0..t {
        acc += (rows[[k, i]] - means[i]) * (rows[[k, j]] - means[j]);
      }
      let c = acc / (t - 1) as f64;
      cov[[i, j]] = c;
      cov[[j, i]] = c;
    }
  }

  (means, cov)
}

/// Annualized moment estimate of a daily return series.
pub fn moment_estimate(returns: &Array2<f64>) -> Result<MomentEstimate> {
  let (means, cov) = column_moments(returns);
  MomentEstimate::new(means * TRADING_DAYS_PER_YEAR, cov * TRADING_DAYS_PER_YEAR)
}
