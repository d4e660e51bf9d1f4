//! # Efficient Frontier
//!
//! $$
//! \min_{\mathbf{w}} \sqrt{\mathbf{w}^\top \Sigma \mathbf{w}}
//! \quad \text{s.t.} \quad \mu^\top \mathbf{w} = r^\*, \ \mathbf{1}^\top \mathbf{w} = 1, \ \mathbf{w} \ge 0
//! $$
//!
//! Markowitz efficient-frontier construction for a fixed basket of assets:
//! annualized moment estimation from daily price history, optional Monte-Carlo
//! resampling of the estimates, a constrained minimum-volatility solve per
//! target return, and extraction of the efficient branch of the resulting curve.
//!
//! ## Modules
//!
//! | Module            | Description                                                              |
//! |-------------------|--------------------------------------------------------------------------|
//! | [`frontier`]      | Moment estimation, resampling, the per-target sweep and frontier trimming. |
//! | [`visualization`] | Plotly chart of the raw frontier points and the efficient branch.         |
//!
//! ## Example Usage
//!
//! ```rust
//! use efficient_frontier::frontier::{FrontierEngine, FrontierEngineConfig};
//!
//! let config = FrontierEngineConfig {
//!   min_return: 0.09,
//!   max_return: 0.20,
//!   sample_count: 50,
//!   ..Default::default()
//! };
//! let engine = FrontierEngine::new(config);
//! let curve = engine.compute(&prices)?;
//! let (rets, vols) = curve.efficient_pairs();
//! ```
//!
//! ## Parallelism
//!
//! The per-target solves and the resampler's per-path simulations are
//! independent and run on `rayon`; result ordering follows the target grid.

pub mod frontier;
pub mod visualization;
