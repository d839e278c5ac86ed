//! Structural cursor movement.
//!
//! Movement is rule-ordered: the first rule matching the character(s)
//! adjacent to the cursor in the direction of travel wins, and every
//! branch ends with the cursor clamped into range. Template tokens,
//! exponent markers and slot boundaries are hopped as wholes; only
//! unstructured text moves one character at a time.

use super::braces::{find_matching_brace, span_ending_at};
use super::buffer::InputBuffer;
use super::template::{template_starting_at, TEMPLATES};

/// Direction of cursor travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Move the cursor one structural step in `direction`.
pub fn move_cursor(buffer: &mut InputBuffer, direction: Direction) {
    let target = match direction {
        Direction::Right => step_right(buffer),
        Direction::Left => step_left(buffer),
    };
    buffer.set_cursor(target);
}

fn step_right(buffer: &InputBuffer) -> usize {
    let c = buffer.cursor();
    let Some(ch) = buffer.char_at(c) else {
        return c; // already at the end
    };

    match ch {
        // On a template's leading backslash: land inside its first
        // editable slot, hopping a subscript span (log's base) whole.
        '\\' => {
            if let Some(template) = template_starting_at(buffer, c) {
                let open = c + template.token_len() - 1;
                if template.has_subscript()
                    && let Some(close) = find_matching_brace(buffer, open)
                    && buffer.char_at(close + 1) == Some('{')
                {
                    return close + 2;
                }
                return c + template.token_len();
            }
            c + 1
        }
        // On the exponent marker: land inside the exponent slot.
        '^' if buffer.char_at(c + 1) == Some('{') => c + 2,
        '}' => {
            match buffer.char_at(c + 1) {
                // Closing brace chased by an exponent: enter it.
                Some('^') if buffer.char_at(c + 2) == Some('{') => c + 3,
                // Slot boundary (numerator→denominator): enter the second slot.
                Some('{') => c + 2,
                _ => c + 1,
            }
        }
        // A bare opening brace: skip the whole slot content.
        '{' if !token_ends_here(buffer, c) => next_brace_from(buffer, c + 1)
            .map_or(c + 1, |i| i + 1),
        _ => c + 1,
    }
}

fn step_left(buffer: &InputBuffer) -> usize {
    let c = buffer.cursor();
    if c == 0 {
        return 0;
    }
    let Some(ch) = buffer.char_at(c - 1) else {
        return c - 1;
    };

    match ch {
        '{' => {
            // Stepping off a template's first brace: land before the
            // leading token (this also hops `^{` and `\log_{` wholes).
            if let Some(template) = TEMPLATES
                .iter()
                .find(|t| buffer.token_ends_at(c - 1, t.token))
            {
                return c - template.token_len();
            }
            // Stepping off the value slot of a subscripted token:
            // the whole token, subscript span included, is one hop.
            if c >= 2
                && buffer.char_at(c - 2) == Some('}')
                && let Some(span) = span_ending_at(buffer, c - 2)
                && let Some(template) = TEMPLATES
                    .iter()
                    .find(|t| t.has_subscript() && buffer.token_ends_at(span.open, t.token))
            {
                return span.open + 1 - template.token_len();
            }
            // Slot boundary going left: land just inside the first slot.
            if c >= 2 && buffer.char_at(c - 2) == Some('}') {
                return c - 2;
            }
            // Bare opening brace: boundary-scan fallback.
            if c >= 2 {
                prev_brace_from(buffer, c - 2).map_or(c - 1, |i| i + 1)
            } else {
                c - 1
            }
        }
        // Stepping off a closing brace lands just inside it.
        '}' => c - 1,
        _ => c - 1,
    }
}

/// Whether any template token has its trailing `{` at `pos`.
fn token_ends_here(buffer: &InputBuffer, pos: usize) -> bool {
    TEMPLATES.iter().any(|t| buffer.token_ends_at(pos, t.token))
}

fn next_brace_from(buffer: &InputBuffer, from: usize) -> Option<usize> {
    (from..buffer.len()).find(|&i| matches!(buffer.char_at(i), Some('{' | '}')))
}

fn prev_brace_from(buffer: &InputBuffer, from: usize) -> Option<usize> {
    if buffer.is_empty() {
        return None;
    }
    (0..=from.min(buffer.len() - 1))
        .rev()
        .find(|&i| matches!(buffer.char_at(i), Some('{' | '}')))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf_at(text: &str, cursor: usize) -> InputBuffer {
        let mut b = InputBuffer::from_text(text);
        b.set_cursor(cursor);
        b
    }

    #[test]
    fn test_right_over_template_token() {
        let mut b = buf_at("\\sin{x}", 0);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 5);
    }

    #[test]
    fn test_right_over_log_token_skips_subscript() {
        // the base slot travels with the token; land in the value slot
        //               0         1
        //               012345678901
        let mut b = buf_at("\\log_{10}{x}", 0);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 10);
    }

    #[test]
    fn test_right_over_incomplete_log_falls_back_to_base_slot() {
        let mut b = buf_at("\\log_{10}", 0);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 6);
    }

    #[test]
    fn test_left_out_of_log_value_slot_skips_subscript() {
        let mut b = buf_at("\\log_{10}{x}", 10);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn test_right_on_caret_enters_exponent() {
        //               012345
        let mut b = buf_at("x^{2}", 1);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 3);
    }

    #[test]
    fn test_right_on_close_followed_by_caret() {
        //               0123456789
        let mut b = buf_at("\\sin{x}^{2}", 6);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 9);
    }

    #[test]
    fn test_right_over_slot_boundary() {
        //               0         1
        //               01234567890
        let mut b = buf_at("\\frac{a}{b}", 7);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 9);
    }

    #[test]
    fn test_right_over_bare_close_brace() {
        let mut b = buf_at("\\sin{x} + 1", 6);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 7);
    }

    #[test]
    fn test_right_over_bare_open_brace_skips_slot() {
        //               01234
        let mut b = buf_at("{ab}c", 0);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 4);
    }

    #[test]
    fn test_right_plain_step() {
        let mut b = buf_at("1+2", 0);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_right_at_end_is_clamped() {
        let mut b = buf_at("x", 1);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_left_off_template_brace_lands_before_token() {
        let mut b = buf_at("\\sin{x}", 5);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn test_left_off_exponent_brace_skips_caret() {
        let mut b = buf_at("x^{2}", 3);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_left_over_slot_boundary() {
        //               0         1
        //               01234567890
        let mut b = buf_at("\\frac{a}{b}", 9);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 7);
    }

    #[test]
    fn test_left_off_close_brace_lands_inside() {
        let mut b = buf_at("\\sin{x}", 7);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 6);
    }

    #[test]
    fn test_left_plain_step() {
        let mut b = buf_at("1+2", 2);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_left_at_start_is_clamped() {
        let mut b = buf_at("x", 0);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn test_round_trip_through_sin() {
        let mut b = buf_at("\\sin{x}", 0);
        move_cursor(&mut b, Direction::Right);
        assert_eq!(b.cursor(), 5);
        move_cursor(&mut b, Direction::Left);
        assert_eq!(b.cursor(), 0);
    }
}
