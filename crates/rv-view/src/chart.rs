//! Bar chart layout.
//!
//! [`build`] turns a metric slice into a [`ChartScene`]: bars, axis ticks,
//! and titles positioned in a fixed 600×300 logical canvas with a top-left
//! origin. Every call lays the scene out from scratch — the redraw policy
//! is a full clear-and-rebuild per data change, with no diffing.

use rv_types::RiskMetric;

use crate::scale::{format_percent, BandScale, LinearScale};

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 300.0;

/// Fixed margins around the plot area, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGINS: Margins = Margins {
    top: 20.0,
    right: 30.0,
    bottom: 40.0,
    left: 60.0,
};

pub const PLOT_WIDTH: f64 = CANVAS_WIDTH - MARGINS.left - MARGINS.right;
pub const PLOT_HEIGHT: f64 = CANVAS_HEIGHT - MARGINS.top - MARGINS.bottom;

/// Fractional padding between bands.
const BAND_PADDING: f64 = 0.1;
/// Vertical headroom so the tallest bar never touches the top edge.
const HEADROOM: f64 = 1.2;
const TICK_COUNT: usize = 5;

pub const X_AXIS_TITLE: &str = "Risk Metric";
pub const Y_AXIS_TITLE: &str = "Value (%)";

/// One positioned bar, in plot coordinates (origin at the plot's top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A tick mark on one axis: a position along that axis plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// A fully laid-out chart, ready to paint.
///
/// An empty scene (the result of building from no data) paints nothing;
/// painting it over a previous chart clears it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartScene {
    pub bars: Vec<Bar>,
    /// Band-center label positions along the bottom axis.
    pub x_ticks: Vec<AxisTick>,
    /// Percent-formatted tick positions down the left axis.
    pub y_ticks: Vec<AxisTick>,
    pub x_title: String,
    pub y_title: String,
}

impl ChartScene {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Lay out the chart for the given metrics.
///
/// The vertical domain is `[0, max(value) * 1.2]` mapped inverted onto the
/// plot height; the horizontal layout is one equal-width band per metric in
/// input order. Empty input yields the empty scene.
pub fn build(metrics: &[RiskMetric]) -> ChartScene {
    if metrics.is_empty() {
        return ChartScene::default();
    }

    let names: Vec<String> = metrics.iter().map(|m| m.metric.clone()).collect();
    let x = BandScale::new(names, (0.0, PLOT_WIDTH), BAND_PADDING);

    let max_value = metrics.iter().map(|m| m.value).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, max_value * HEADROOM), (PLOT_HEIGHT, 0.0));

    let bars = metrics
        .iter()
        .filter_map(|m| {
            let top = y.scale(m.value);
            Some(Bar {
                label: m.metric.clone(),
                value: m.value,
                x: x.position(&m.metric)?,
                y: top,
                width: x.bandwidth(),
                height: PLOT_HEIGHT - top,
            })
        })
        .collect();

    let x_ticks = metrics
        .iter()
        .filter_map(|m| {
            Some(AxisTick {
                position: x.band_center(&m.metric)?,
                label: m.metric.clone(),
            })
        })
        .collect();

    let y_ticks = y
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick {
            position: y.scale(value),
            label: format_percent(value),
        })
        .collect();

    ChartScene {
        bars,
        x_ticks,
        y_ticks,
        x_title: X_AXIS_TITLE.to_string(),
        y_title: Y_AXIS_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn metric(name: &str, value: f64) -> RiskMetric {
        RiskMetric::new(name, value)
    }

    #[test]
    fn plot_area_is_canvas_minus_margins() {
        assert_close(PLOT_WIDTH, 510.0);
        assert_close(PLOT_HEIGHT, 240.0);
    }

    #[test]
    fn empty_input_builds_empty_scene() {
        let scene = build(&[]);
        assert!(scene.is_empty());
        assert_eq!(scene, ChartScene::default());
    }

    #[test]
    fn bar_heights_are_proportional_under_headroom() {
        // Domain upper bound = 20 * 1.2 = 24, plot height 240:
        // B fills 20/24 of the plot (200 units), A fills 10/24 (100 units).
        let scene = build(&[metric("A", 10.0), metric("B", 20.0)]);

        assert_eq!(scene.bars.len(), 2);
        let a = &scene.bars[0];
        let b = &scene.bars[1];
        assert_eq!(a.label, "A");
        assert_eq!(b.label, "B");
        assert_close(a.height, 100.0);
        assert_close(b.height, 200.0);
        assert_close(a.y, 140.0);
        assert_close(b.y, 40.0);

        // The tallest bar still leaves the headroom gap at the top.
        let max_height = scene.bars.iter().map(|bar| bar.height).fold(0.0, f64::max);
        assert_close(max_height, b.height);
        assert!(b.y > 0.0);
    }

    #[test]
    fn bars_sit_on_the_baseline() {
        let scene = build(&[metric("VaR", 0.05), metric("CVaR", 0.07)]);
        for bar in &scene.bars {
            assert_close(bar.y + bar.height, PLOT_HEIGHT);
        }
    }

    #[test]
    fn bars_follow_input_order_left_to_right() {
        let scene = build(&[metric("CVaR", 0.07), metric("VaR", 0.05)]);
        assert!(scene.bars[0].x < scene.bars[1].x);
        assert_eq!(scene.bars[0].label, "CVaR");
    }

    #[test]
    fn x_ticks_sit_at_band_centers() {
        let scene = build(&[metric("VaR", 0.05), metric("CVaR", 0.07)]);
        assert_eq!(scene.x_ticks.len(), 2);
        for (tick, bar) in scene.x_ticks.iter().zip(&scene.bars) {
            assert_eq!(tick.label, bar.label);
            assert_close(tick.position, bar.x + bar.width / 2.0);
        }
    }

    #[test]
    fn y_ticks_are_percent_formatted_within_the_plot() {
        let scene = build(&[metric("VaR", 0.05), metric("CVaR", 0.07)]);
        assert!(!scene.y_ticks.is_empty());
        assert_eq!(scene.y_ticks[0].label, "0.0%");
        for tick in &scene.y_ticks {
            assert!(tick.position >= 0.0 && tick.position <= PLOT_HEIGHT);
        }
    }

    #[test]
    fn rebuild_from_identical_data_is_idempotent() {
        let data = vec![metric("VaR", 0.05), metric("CVaR", 0.07)];
        assert_eq!(build(&data), build(&data));
    }

    #[test]
    fn all_zero_values_yield_flat_bars() {
        let scene = build(&[metric("A", 0.0), metric("B", 0.0)]);
        for bar in &scene.bars {
            assert_close(bar.height, 0.0);
        }
    }

    #[test]
    fn axis_titles_are_set_for_non_empty_scenes() {
        let scene = build(&[metric("VaR", 0.05)]);
        assert_eq!(scene.x_title, "Risk Metric");
        assert_eq!(scene.y_title, "Value (%)");
    }
}
