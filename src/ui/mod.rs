//! Terminal rendering.
//!
//! The screen is three stacked surfaces: the expression bar with the
//! structural cursor, the plot, and a status line that doubles as the
//! toast area. All of them read the model; none of them mutate it.

mod chart;
mod expression;
mod status;

use ratatui::prelude::*;

use crate::app::Model;

/// Render the full frame from the current model.
pub fn view(model: &Model, frame: &mut Frame) {
    let _scope = crate::perf::scope("ui.view");

    let [expression_area, chart_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    expression::render(model, frame, expression_area);
    chart::render(model, frame, chart_area);
    status::render(model, frame, status_area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::graph::SampleRange;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_view_shows_expression() {
        let model = Model::with_expression(SampleRange::default(), "1 + 2");
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| view(&model, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("1 + 2"));
    }

    #[test]
    fn test_view_empty_model() {
        let model = Model::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| view(&model, frame)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("no curve"));
    }

    #[test]
    fn test_view_tiny_terminal_does_not_panic() {
        let model = Model::with_expression(SampleRange::default(), "x");
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal.draw(|frame| view(&model, frame)).unwrap();
    }

    #[test]
    fn test_view_shows_toast() {
        let mut model = Model::default();
        model.show_toast(crate::app::ToastLevel::Error, "result is undefined");
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| view(&model, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("result is undefined"));
    }
}
