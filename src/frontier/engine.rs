//! # Frontier Engine
//!
//! $$
//! \text{prices} \to r_t \to (\mu, \Sigma) \to (\tilde\mu, \tilde\Sigma) \to \{(r^\*_k, \sigma_k)\}
//! $$
//!
//! High-level orchestration of the frontier pipeline. Each stage takes inputs
//! and returns new values; nothing is accumulated in mutable session state,
//! so there is no call-order hazard between data preparation and the sweep.

use anyhow::Result;
use tracing::info;

use super::data::daily_returns;
use super::data::moment_estimate;
use super::optimizer::sweep;
use super::resample::ResampleConfig;
use super::resample::resample;
use super::trim::efficient_start;
use super::types::FrontierCurve;
use super::types::MomentEstimate;
use super::types::PriceHistory;

/// Runtime configuration for [`FrontierEngine`].
#[derive(Clone, Copy, Debug)]
pub struct FrontierEngineConfig {
  /// Lowest target annualized return on the grid.
  pub min_return: f64,
  /// Highest target annualized return on the grid.
  pub max_return: f64,
  /// Number of evenly spaced targets, both ends inclusive.
  pub sample_count: usize,
  /// Stabilize the moment estimate by Monte-Carlo resampling before the
  /// sweep. When off, the estimate passes through untouched.
  pub resampling: bool,
  /// Path and sample-size settings used when `resampling` is on.
  pub resample: ResampleConfig,
}

impl Default for FrontierEngineConfig {
  fn default() -> Self {
    Self {
      min_return: 0.09,
      max_return: 0.20,
      sample_count: 50,
      resampling: false,
      resample: ResampleConfig::default(),
    }
  }
}

/// Single entry point for the frontier computation.
#[derive(Clone, Debug)]
pub struct FrontierEngine {
  config: FrontierEngineConfig,
}

impl FrontierEngine {
  /// Construct a new engine with explicit configuration.
  pub fn new(config: FrontierEngineConfig) -> Self {
    Self { config }
  }

  /// Borrow engine configuration.
  pub fn config(&self) -> &FrontierEngineConfig {
    &self.config
  }

  /// Full pipeline from an adjusted-close price table.
  pub fn compute(&self, prices: &PriceHistory) -> Result<FrontierCurve> {
    let returns = daily_returns(prices);
    let estimate = moment_estimate(&returns)?;

    info!(
      assets = prices.asset_count(),
      days = returns.nrows(),
      "estimated annualized moments from price history"
    );

    self.compute_from_moments(&estimate)
  }

  /// Sweep and trim from an already-estimated (or externally supplied)
  /// moment pair.
  pub fn compute_from_moments(&self, estimate: &MomentEstimate) -> Result<FrontierCurve> {
    let estimate = if self.config.resampling {
      resample(estimate, &self.config.resample)?
    } else {
      estimate.clone()
    };

    let points = sweep(
      &estimate,
      self.config.min_return,
      self.config.max_return,
      self.config.sample_count,
    )?;
    let start = efficient_start(&points);

    info!(
      points = points.len(),
      efficient_start = start,
      "frontier sweep complete"
    );

    Ok(FrontierCurve::new(points, start))
  }
}
