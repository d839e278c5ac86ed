use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Message;

/// Map a terminal event to a message, if it means anything.
pub fn handle_event(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            handle_key(key)
        }
        _ => None,
    }
}

/// Characters accepted verbatim into the expression.
fn is_plain_input(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '(' | ')' | ' ')
}

fn handle_key(key: &KeyEvent) -> Option<Message> {
    // Alt-letter chords insert whole function templates.
    if key.modifiers.contains(KeyModifiers::ALT) {
        let name = match key.code {
            KeyCode::Char('s') => "sin",
            KeyCode::Char('c') => "cos",
            KeyCode::Char('t') => "tan",
            KeyCode::Char('r') => "sqrt",
            KeyCode::Char('f') => "frac",
            KeyCode::Char('l') => "log",
            _ => return None,
        };
        return Some(Message::InsertTemplate(name));
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('u') => Some(Message::Clear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Left => Some(Message::MoveLeft),
        KeyCode::Right => Some(Message::MoveRight),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Enter => Some(Message::Evaluate),
        KeyCode::Char('^') => Some(Message::InsertExponent),
        KeyCode::Char(op @ ('+' | '-' | '*' | '/')) => Some(Message::InsertOperator(op)),
        KeyCode::Char(ch) if is_plain_input(ch) => Some(Message::InsertChar(ch)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_digits_and_letters_insert() {
        assert_eq!(
            handle_event(&press(KeyCode::Char('7'), KeyModifiers::NONE)),
            Some(Message::InsertChar('7'))
        );
        assert_eq!(
            handle_event(&press(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Message::InsertChar('x'))
        );
    }

    #[test]
    fn test_operators_are_padded_inserts() {
        assert_eq!(
            handle_event(&press(KeyCode::Char('+'), KeyModifiers::NONE)),
            Some(Message::InsertOperator('+'))
        );
        assert_eq!(
            handle_event(&press(KeyCode::Char('/'), KeyModifiers::NONE)),
            Some(Message::InsertOperator('/'))
        );
    }

    #[test]
    fn test_caret_inserts_exponent() {
        assert_eq!(
            handle_event(&press(KeyCode::Char('^'), KeyModifiers::NONE)),
            Some(Message::InsertExponent)
        );
    }

    #[test]
    fn test_alt_chords_insert_templates() {
        assert_eq!(
            handle_event(&press(KeyCode::Char('s'), KeyModifiers::ALT)),
            Some(Message::InsertTemplate("sin"))
        );
        assert_eq!(
            handle_event(&press(KeyCode::Char('f'), KeyModifiers::ALT)),
            Some(Message::InsertTemplate("frac"))
        );
    }

    #[test]
    fn test_plain_s_is_just_a_letter() {
        assert_eq!(
            handle_event(&press(KeyCode::Char('s'), KeyModifiers::NONE)),
            Some(Message::InsertChar('s'))
        );
    }

    #[test]
    fn test_navigation_and_editing_keys() {
        assert_eq!(
            handle_event(&press(KeyCode::Left, KeyModifiers::NONE)),
            Some(Message::MoveLeft)
        );
        assert_eq!(
            handle_event(&press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Message::Backspace)
        );
        assert_eq!(
            handle_event(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Message::Evaluate)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            handle_event(&press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Message::Quit)
        );
        assert_eq!(
            handle_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(handle_event(&press(KeyCode::F(5), KeyModifiers::NONE)), None);
        assert_eq!(
            handle_event(&press(KeyCode::Char('{'), KeyModifiers::NONE)),
            None,
            "braces are structural and never typed directly"
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&Event::Key(key)), None);
    }
}
