//! # Moment Resampler
//!
//! $$
//! (\mu, \Sigma) \mapsto \Big(\tfrac{1}{P}\sum_p \hat\mu^{(p)}, \ \tfrac{1}{P}\sum_p \hat\Sigma^{(p)}\Big),
//! \qquad \hat\mu^{(p)}, \hat\Sigma^{(p)} \sim \mathcal{N}(\mu, \Sigma)^{\otimes m}
//! $$
//!
//! Monte-Carlo smoothing of a moment estimate: each path draws a synthetic
//! return sample from the fitted multivariate normal and re-estimates its
//! moments; the path estimates are averaged elementwise. The draw comes from
//! the already-fitted distribution rather than the historical observations,
//! so the procedure inherits the input moments exactly and only damps the
//! estimation-noise sensitivity of downstream solves.

use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use impl_new_derive::ImplNew;
use ndarray::Array1;
use ndarray::Array2;
use rand::prelude::*;
use rayon::prelude::*;
use statrs::distribution::MultivariateNormal;
use tracing::debug;

use super::data::column_moments;
use super::types::MomentEstimate;

/// Path and sample-size configuration for [`resample`].
#[derive(ImplNew, Clone, Copy, Debug)]
pub struct ResampleConfig {
  /// Number of simulated re-estimation paths.
  pub paths: usize,
  /// Draws per path; the default is one trading year.
  pub sample_size: usize,
}

impl Default for ResampleConfig {
  fn default() -> Self {
    Self {
      paths: 50,
      sample_size: 252,
    }
  }
}

/// Average re-estimated moments over simulated return paths.
pub fn resample(estimate: &MomentEstimate, config: &ResampleConfig) -> Result<MomentEstimate> {
  if config.paths == 0 {
    bail!("resampling needs at least one path");
  }
  if config.sample_size < 2 {
    bail!(
      "resampling sample size must be at least 2 for a sample covariance, got {}",
      config.sample_size
    );
  }

  let n = estimate.asset_count();
  let mvn = MultivariateNormal::new(
    estimate.expected_returns().to_vec(),
    estimate.covariance().iter().copied().collect(),
  )
  .map_err(|e| anyhow!("covariance matrix is not a valid normal covariance: {e}"))?;

  debug!(
    paths = config.paths,
    sample_size = config.sample_size,
    "resampling moment estimate"
  );

  let path_moments: Vec<(Array1<f64>, Array2<f64>)> = (0..config.paths)
    .into_par_iter()
    .map(|_| {
      let mut rng = thread_rng();
      let mut draws = Array2::<f64>::zeros((config.sample_size, n));

      for k in 0..config.sample_size {
        let sample = mvn.sample(&mut rng);
        for a in 0..n {
          draws[[k, a]] = sample[a];
        }
      }

      column_moments(&draws)
    })
    .collect();

  let mut mean = Array1::<f64>::zeros(n);
  let mut cov = Array2::<f64>::zeros((n, n));
  for (path_mean, path_cov) in &path_moments {
    mean += path_mean;
    cov += path_cov;
  }
  let scale = 1.0 / config.paths as f64;

  MomentEstimate::new(mean * scale, cov * scale)
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
  fn rejects_zero_paths() {
    let config = ResampleConfig::new(0, 252);
    assert!(resample(&uncorrelated(), &config).is_err());
  }

  #[test]
  fn rejects_degenerate_sample_size() {
    let config = ResampleConfig::new(10, 1);
    assert!(resample(&uncorrelated(), &config).is_err());
  }

  #[test]
  fn output_keeps_shape_and_symmetry() {
    let config = ResampleConfig::new(5, 64);
    let out = resample(&uncorrelated(), &config).unwrap();

    assert_eq!(out.asset_count(), 2);
    assert_abs_diff_eq!(
      out.covariance()[[0, 1]],
      out.covariance()[[1, 0]],
      epsilon = 1e-15
    );
  }

  #[test]
  fn single_path_mean_obeys_law_of_large_numbers() {
    let est = uncorrelated();
    let config = ResampleConfig::new(1, 40_000);
    let out = resample(&est, &config).unwrap();

    // Sample-mean standard error is at most 0.3 / 200 = 0.0015 per asset.
    assert_abs_diff_eq!(out.expected_returns()[0], 0.10, epsilon = 0.02);
    assert_abs_diff_eq!(out.expected_returns()[1], 0.20, epsilon = 0.02);
  }

  #[test]
  fn averaged_moments_stay_near_the_inputs() {
    let est = uncorrelated();
    let out = resample(&est, &ResampleConfig::default()).unwrap();

    assert_abs_diff_eq!(out.covariance()[[0, 0]], 0.04, epsilon = 0.01);
    assert_abs_diff_eq!(out.covariance()[[1, 1]], 0.09, epsilon = 0.015);
    assert_abs_diff_eq!(out.covariance()[[0, 1]], 0.0, epsilon = 0.01);
  }
}
