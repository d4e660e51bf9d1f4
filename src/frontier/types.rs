//! # Frontier Types
//!
//! $$
//! (\mu, \Sigma) \mapsto \{(r^\*_k, \sigma_k)\}_{k=1}^{K}
//! $$
//!
//! Value types shared across the frontier pipeline.

use anyhow::Result;
use anyhow::bail;
use ndarray::Array1;
use ndarray::Array2;

/// Adjusted-close price table handed over by the market-data collaborator.
///
/// Rows are chronological trading days, one column per ticker. Open, high,
/// low and volume columns are expected to be dropped by the caller before
/// construction.
#[derive(Clone, Debug)]
pub struct PriceHistory {
  tickers: Vec<String>,
  adjusted_close: Array2<f64>,
}

impl PriceHistory {
  /// Validate and wrap a price table; the ticker order fixes the asset
  /// universe for everything derived from it.
  pub fn new(tickers: Vec<String>, adjusted_close: Array2<f64>) -> Result<Self> {
    if tickers.is_empty() {
      bail!("asset universe is empty");
    }
    if adjusted_close.ncols() != tickers.len() {
      bail!(
        "price table has {} columns for {} tickers",
        adjusted_close.ncols(),
        tickers.len()
      );
    }
    if adjusted_close.nrows() < 2 {
      bail!(
        "price table needs at least 2 rows to form returns, got {}",
        adjusted_close.nrows()
      );
    }

    Ok(Self {
      tickers,
      adjusted_close,
    })
  }

  /// Number of assets in the universe.
  pub fn asset_count(&self) -> usize {
    self.tickers.len()
  }

  /// Ticker symbols in column order.
  pub fn tickers(&self) -> &[String] {
    &self.tickers
  }

  /// Adjusted-close prices, rows chronological.
  pub fn adjusted_close(&self) -> &Array2<f64> {
    &self.adjusted_close
  }
}

/// Annualized first and second moments of the daily return series.
#[derive(Clone, Debug)]
pub struct MomentEstimate {
  expected_returns: Array1<f64>,
  covariance: Array2<f64>,
}

impl MomentEstimate {
  const SYMMETRY_TOL: f64 = 1e-9;

  /// Validate and wrap an (expected-return vector, covariance matrix) pair.
  ///
  /// The covariance must be square, symmetric and have a non-negative
  /// diagonal; full positive semi-definiteness is surfaced later by the
  /// resampler's multivariate-normal construction.
  pub fn new(expected_returns: Array1<f64>, covariance: Array2<f64>) -> Result<Self> {
    let n = expected_returns.len();
    if n == 0 {
      bail!("expected-return vector is empty");
    }
    if covariance.nrows() != n || covariance.ncols() != n {
      bail!(
        "covariance shape {}x{} does not match {} assets",
        covariance.nrows(),
        covariance.ncols(),
        n
      );
    }

    for i in 0..n {
      if covariance[[i, i]] < 0.0 {
        bail!("covariance diagonal entry {} is negative", i);
      }
      for j in (i + 1)..n {
        if (covariance[[i, j]] - covariance[[j, i]]).abs() > Self::SYMMETRY_TOL {
          bail!("covariance matrix is not symmetric at ({}, {})", i, j);
        }
      }
    }

    Ok(Self {
      expected_returns,
      covariance,
    })
  }

  /// Number of assets.
  pub fn asset_count(&self) -> usize {
    self.expected_returns.len()
  }

  /// Annualized expected-return vector.
  pub fn expected_returns(&self) -> &Array1<f64> {
    &self.expected_returns
  }

  /// Annualized covariance matrix.
  pub fn covariance(&self) -> &Array2<f64> {
    &self.covariance
  }
}

/// Portfolio summary at a given weight vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortfolioStats {
  /// Annualized expected portfolio return.
  pub expected_return: f64,
  /// Annualized portfolio volatility.
  pub volatility: f64,
  /// Return over volatility, not risk-free adjusted. NaN or infinite when
  /// volatility is zero; intentionally unguarded.
  pub sharpe: f64,
}

/// One solved point of the frontier sweep.
#[derive(Clone, Debug)]
pub struct FrontierPoint {
  /// Target annualized return the solve was constrained to.
  pub target_return: f64,
  /// Minimum volatility the solver achieved at that target.
  pub volatility: f64,
  /// Weights behind the achieved volatility.
  pub weights: Vec<f64>,
}

/// Raw sweep output together with the efficient-branch cut.
#[derive(Clone, Debug)]
pub struct FrontierCurve {
  points: Vec<FrontierPoint>,
  efficient_start: usize,
}

impl FrontierCurve {
  pub(crate) fn new(points: Vec<FrontierPoint>, efficient_start: usize) -> Self {
    Self {
      points,
      efficient_start,
    }
  }

  /// All solved points in target-grid order.
  pub fn points(&self) -> &[FrontierPoint] {
    &self.points
  }

  /// Index of the global minimum-volatility point.
  pub fn efficient_start(&self) -> usize {
    self.efficient_start
  }

  /// The ascending branch from the minimum-volatility point onward.
  pub fn efficient(&self) -> &[FrontierPoint] {
    &self.points[self.efficient_start..]
  }

  /// Raw (target return, volatility) sequences for scatter display.
  pub fn raw_pairs(&self) -> (Vec<f64>, Vec<f64>) {
    pairs(&self.points)
  }

  /// Trimmed (target return, volatility) sequences for line display.
  pub fn efficient_pairs(&self) -> (Vec<f64>, Vec<f64>) {
    pairs(self.efficient())
  }
}

fn pairs(points: &[FrontierPoint]) -> (Vec<f64>, Vec<f64>) {
  let rets = points.iter().map(|p| p.target_return).collect();
  let vols = points.iter().map(|p| p.volatility).collect();
  (rets, vols)
}
