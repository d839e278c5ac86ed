//! Curve sampling for the plot surface.
//!
//! Evaluates a parsed expression at evenly spaced points over an
//! x-range. Non-finite values are dropped so asymptotes and domain
//! gaps break the curve instead of spiking it, and markup that does
//! not compile yields no curve at all.

use crate::eval::{self, Expr};

/// Default plot window, matching the classic graphing view.
pub const DEFAULT_X_START: f64 = -10.0;
pub const DEFAULT_X_END: f64 = 10.0;
/// Default sample count across the window.
pub const DEFAULT_STEPS: usize = 100;

/// The x-window and resolution to sample over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub x_start: f64,
    pub x_end: f64,
    pub steps: usize,
}

impl Default for SampleRange {
    fn default() -> Self {
        Self {
            x_start: DEFAULT_X_START,
            x_end: DEFAULT_X_END,
            steps: DEFAULT_STEPS,
        }
    }
}

impl SampleRange {
    /// A range with a specific window, keeping the default resolution.
    pub const fn new(x_start: f64, x_end: f64) -> Self {
        Self {
            x_start,
            x_end,
            steps: DEFAULT_STEPS,
        }
    }

    /// Override the sample count.
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

/// Sample `expr` across the range, dropping non-finite points.
pub fn sample(expr: &Expr, range: SampleRange) -> Vec<(f64, f64)> {
    if range.steps < 2 {
        return Vec::new();
    }
    let span = range.x_end - range.x_start;
    let mut points = Vec::with_capacity(range.steps);
    for i in 0..range.steps {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / (range.steps - 1) as f64;
        let x = range.x_start + t * span;
        let y = expr.eval(x);
        if y.is_finite() {
            points.push((x, y));
        }
    }
    points
}

/// Compile the editor's markup and sample it in one step.
///
/// `None` when the markup does not parse or produces no finite points;
/// the "no curve drawn" degradation for mid-edit state.
pub fn curve_for(markup: &str, range: SampleRange) -> Option<Vec<(f64, f64)>> {
    let expr = eval::compile(markup).ok()?;
    let points = sample(&expr, range);
    (!points.is_empty()).then_some(points)
}
