//! # Visualization
//!
//! $$
//! \{(\sigma_k, r^\*_k)\}_{k=1}^{K} \mapsto \text{frontier chart}
//! $$
//!
//! Plotly rendering of a frontier sweep: raw target points as markers, the
//! trimmed efficient branch as a line, volatility on the x-axis.

use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;
use plotly::common::Line;
use plotly::common::Marker;
use plotly::common::Mode;
use plotly::layout::Axis;

use crate::frontier::FrontierCurve;

/// Build the frontier chart without showing it.
pub fn frontier_plot(curve: &FrontierCurve) -> Plot {
  let (raw_rets, raw_vols) = curve.raw_pairs();
  let (eff_rets, eff_vols) = curve.efficient_pairs();

  let raw = Scatter::new(raw_vols, raw_rets)
    .mode(Mode::Markers)
    .marker(Marker::new().size(5))
    .name("targets");

  let efficient = Scatter::new(eff_vols, eff_rets)
    .mode(Mode::Lines)
    .line(Line::new().width(1.0))
    .name("efficient frontier");

  let layout = Layout::new()
    .x_axis(Axis::new().title("Expected Volatility"))
    .y_axis(Axis::new().title("Expected Return"));

  let mut plot = Plot::new();
  plot.add_trace(raw);
  plot.add_trace(efficient);
  plot.set_layout(layout);
  plot
}

/// Build and open the frontier chart.
pub fn plot_frontier(curve: &FrontierCurve) {
  frontier_plot(curve).show();
}
