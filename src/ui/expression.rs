use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use crate::app::Model;

/// Render the expression bar with the cursor as a reverse-video cell.
///
/// The cursor sits between characters, so it is drawn over the
/// character to its right, or over a trailing space at the end.
pub fn render(model: &Model, frame: &mut Frame, area: Rect) {
    let text: Vec<char> = model.session.current_text().chars().collect();
    let cursor = model.session.cursor_position().min(text.len());

    let before: String = text[..cursor].iter().collect();
    let at = text.get(cursor).copied().unwrap_or(' ');
    let after: String = text.get(cursor + 1..).unwrap_or_default().iter().collect();

    let line = Line::from(vec![
        Span::raw(before),
        Span::styled(at.to_string(), Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]);

    let bar = Paragraph::new(line).block(Block::bordered().title(" f(x) "));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::graph::SampleRange;

    #[test]
    fn test_cursor_cell_is_reversed() {
        let mut model = Model::with_expression(SampleRange::default(), "xy");
        model.session.move_cursor(crate::editor::Direction::Left);
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| render(&model, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        // border at x=0, "x" at x=1, cursor over "y" at x=2
        assert_eq!(buffer[(2, 1)].symbol(), "y");
        assert!(buffer[(2, 1)].style().add_modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(1, 1)].style().add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_cursor_at_end_draws_over_space() {
        let model = Model::with_expression(SampleRange::default(), "x");
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| render(&model, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer[(2, 1)].style().add_modifier.contains(Modifier::REVERSED));
    }
}
