//! # Frontier
//!
//! $$
//! \sigma_p = \sqrt{\mathbf{w}^\top \Sigma \mathbf{w}}
//! $$
//!
//! Efficient-frontier pipeline: price history to daily returns, annualized
//! moment estimates, optional resampling, the per-target minimum-volatility
//! sweep and the efficient-branch trim.

pub mod data;
pub mod engine;
pub mod optimizer;
pub mod resample;
pub mod stats;
pub mod trim;
pub mod types;

pub use data::daily_returns;
pub use data::moment_estimate;
pub use engine::FrontierEngine;
pub use engine::FrontierEngineConfig;
pub use optimizer::sweep;
pub use resample::ResampleConfig;
pub use resample::resample;
pub use stats::portfolio_statistics;
pub use trim::efficient_branch;
pub use trim::efficient_start;
pub use types::FrontierCurve;
pub use types::FrontierPoint;
pub use types::MomentEstimate;
pub use types::PortfolioStats;
pub use types::PriceHistory;

/// Annualization factor for daily moment estimates.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
