use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

/// Render the status line. An active toast takes over the whole line.
pub fn render(model: &Model, frame: &mut Frame, area: Rect) {
    if let Some((message, level)) = model.active_toast() {
        let (prefix, style) = match level {
            ToastLevel::Info => (
                "[info]",
                Style::default().bg(Color::DarkGray).fg(Color::White),
            ),
            ToastLevel::Warning => (
                "[warn]",
                Style::default().bg(Color::Yellow).fg(Color::Black),
            ),
            ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
        };
        let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
        frame.render_widget(toast, area);
        return;
    }

    let points = model.curve.as_ref().map_or(0, Vec::len);
    let slot_hint = if model.session.cursor_in_empty_slot() {
        " [fill slot]"
    } else {
        ""
    };
    let status = format!(
        " x: [{}, {}]  steps: {}  points: {}{}  Alt+s/c/t/r/f/l: functions  Enter: evaluate  Esc: quit",
        model.range.x_start, model.range.x_end, model.range.steps, points, slot_hint
    );
    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn row_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_status_shows_window() {
        let model = Model::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render(&model, frame, frame.area()))
            .unwrap();
        assert!(row_text(&terminal).contains("x: [-10, 10]"));
    }

    #[test]
    fn test_empty_slot_hint() {
        let mut model = Model::default();
        model.session.insert_template("sin").unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal
            .draw(|frame| render(&model, frame, frame.area()))
            .unwrap();
        assert!(row_text(&terminal).contains("[fill slot]"));

        model.session.insert_char('x');
        terminal
            .draw(|frame| render(&model, frame, frame.area()))
            .unwrap();
        assert!(!row_text(&terminal).contains("[fill slot]"));
    }

    #[test]
    fn test_toast_replaces_status() {
        let mut model = Model::default();
        model.show_toast(ToastLevel::Warning, "nesting limit reached");
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render(&model, frame, frame.area()))
            .unwrap();
        let text = row_text(&terminal);
        assert!(text.contains("[warn] nesting limit reached"));
        assert!(!text.contains("Enter: evaluate"));
    }
}
