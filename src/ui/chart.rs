use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph};

use crate::app::Model;

/// Render the plot, or a placeholder when there is no curve.
pub fn render(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(curve) = model.curve.as_deref() else {
        let placeholder = Paragraph::new("no curve")
            .style(Style::default().add_modifier(Modifier::DIM))
            .centered()
            .block(Block::bordered());
        frame.render_widget(placeholder, area);
        return;
    };

    let x_bounds = [model.range.x_start, model.range.x_end];
    let y_bounds = y_bounds_for(curve);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(curve);

    let chart = Chart::new(vec![dataset])
        .block(Block::bordered())
        .x_axis(
            Axis::default()
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds))
                .style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(chart, area);
}

/// Vertical bounds with a little headroom so the curve never hugs the
/// frame. A flat curve still gets a non-degenerate window.
fn y_bounds_for(curve: &[(f64, f64)]) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, y) in curve {
        min = min.min(y);
        max = max.max(y);
    }
    if !min.is_finite() || !max.is_finite() {
        return [-10.0, 10.0];
    }
    let pad = ((max - min) * 0.05).max(0.5);
    [min - pad, max + pad]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = f64::midpoint(bounds[0], bounds[1]);
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_bounds_padded() {
        let [lo, hi] = y_bounds_for(&[(0.0, -1.0), (1.0, 1.0)]);
        assert!(lo < -1.0);
        assert!(hi > 1.0);
    }

    #[test]
    fn test_y_bounds_flat_curve() {
        let [lo, hi] = y_bounds_for(&[(0.0, 2.0), (1.0, 2.0)]);
        assert!(hi - lo >= 1.0);
        assert!(lo < 2.0 && 2.0 < hi);
    }

    #[test]
    fn test_axis_labels_span_bounds() {
        let labels = axis_labels([-10.0, 10.0]);
        assert_eq!(labels, vec!["-10.0", "0.0", "10.0"]);
    }
}
