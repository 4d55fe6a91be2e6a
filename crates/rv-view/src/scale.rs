//! Band and linear scales.
//!
//! Semantics follow the d3 scale conventions the original dashboard was
//! designed around: a categorical band scale with fractional padding and a
//! linear scale with 1/2/5×10^k tick increments. Both are plain value types
//! with no rendering dependencies.

/// Categorical band scale: maps each category to an equal-width band along
/// a continuous range, with a fixed fractional padding between bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// Build a scale over `domain` spanning `range`, with `padding` as both
    /// the inner and outer fractional padding (0.0 ≤ padding < 1.0).
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = domain.len() as f64;
        // Inner and outer padding are equal, bands centered in the range.
        let step = (r1 - r0) / f64::max(1.0, n - padding + 2.0 * padding);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Self {
            domain,
            step,
            bandwidth,
            start,
        }
    }

    /// Leading edge of the band for `name`, or `None` if it is not in the
    /// domain.
    pub fn position(&self, name: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == name)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Midpoint of the band for `name`.
    pub fn band_center(&self, name: &str) -> Option<f64> {
        self.position(name).map(|p| p + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Linear scale from a numeric domain to a numeric range. Inverted ranges
/// are allowed (and used for the vertical axis, where the drawing origin is
/// at the top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range. A degenerate domain maps
    /// everything to the start of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Roughly `count` evenly spaced, round-valued ticks covering the
    /// domain, using the 1/2/5×10^k increment rule.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };

        if !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let step = tick_increment(lo, hi, count);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

// Thresholds for rounding a raw step to 1, 2, 5, or 10 times a power of
// ten: sqrt(50), sqrt(10), sqrt(2).
const E10: f64 = 7.071067811865476;
const E5: f64 = 3.1622776601683795;
const E2: f64 = 1.4142135623730951;

fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let step = (hi - lo) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Format a unitless ratio as a percentage with one decimal place,
/// e.g. `0.05` → `"5.0%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
