//! Brace matching over the input buffer.
//!
//! Matching is innermost-consistent: starting from a bracket, the match
//! is the *first* position where the running depth returns to zero, never
//! a later brace of an unrelated pair. Unbalanced input yields `None`
//! rather than an error; callers fall back to plain character edits.

use super::buffer::InputBuffer;

/// A balanced `{...}` region, identified by its bracket indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceSpan {
    /// Index of the opening `{`.
    pub open: usize,
    /// Index of the matching `}`.
    pub close: usize,
}

impl BraceSpan {
    /// Whether `cursor` (a gap position) lies inside the span.
    ///
    /// A cursor sitting just before the closing brace counts as inside;
    /// one sitting on the opening brace does not.
    pub const fn contains_cursor(&self, cursor: usize) -> bool {
        self.open < cursor && cursor <= self.close
    }

    /// Whether the region between the brackets holds no non-whitespace.
    pub fn is_empty_slot(&self, buffer: &InputBuffer) -> bool {
        (self.open + 1..self.close)
            .all(|i| buffer.char_at(i).is_some_and(char::is_whitespace))
    }
}

/// Find the bracket balancing the one at `position`.
///
/// A `{` is matched by scanning forward, a `}` by scanning backward; any
/// other character (or an exhausted buffer) yields `None`. The returned
/// index is the first zero-crossing of the depth counter, so for any
/// balanced pair `find_matching_brace` is an involution.
pub fn find_matching_brace(buffer: &InputBuffer, position: usize) -> Option<usize> {
    match buffer.char_at(position)? {
        '{' => {
            let mut depth = 0i32;
            for i in position..buffer.len() {
                match buffer.char_at(i) {
                    Some('{') => depth += 1,
                    Some('}') => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        '}' => {
            let mut depth = 0i32;
            for i in (0..=position).rev() {
                match buffer.char_at(i) {
                    Some('}') => depth += 1,
                    Some('{') => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        _ => None,
    }
}

/// Resolve the span whose closing brace sits at `close`.
pub fn span_ending_at(buffer: &InputBuffer, close: usize) -> Option<BraceSpan> {
    if buffer.char_at(close) != Some('}') {
        return None;
    }
    find_matching_brace(buffer, close).map(|open| BraceSpan { open, close })
}

/// Resolve the span whose opening brace sits at `open`.
pub fn span_starting_at(buffer: &InputBuffer, open: usize) -> Option<BraceSpan> {
    if buffer.char_at(open) != Some('{') {
        return None;
    }
    find_matching_brace(buffer, open).map(|close| BraceSpan { open, close })
}

/// The innermost span whose brackets surround the gap at `cursor`, i.e.
/// the slot the cursor is editing inside, if any.
pub fn enclosing_span(buffer: &InputBuffer, cursor: usize) -> Option<BraceSpan> {
    // Walk left for the nearest unclosed `{`, then match it forward.
    let mut depth = 0i32;
    for i in (0..cursor.min(buffer.len())).rev() {
        match buffer.char_at(i) {
            Some('}') => depth += 1,
            Some('{') => {
                if depth == 0 {
                    return span_starting_at(buffer, i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Count the brace pairs opening at depth zero within `start..end`.
///
/// Nested pairs inside an outer pair are not counted; a two-slot
/// template body therefore counts as exactly two pairs no matter what
/// its slots contain. Returns `None` when the region is unbalanced.
pub fn top_level_pair_count(buffer: &InputBuffer, start: usize, end: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut pairs = 0usize;
    for i in start..end.min(buffer.len()) {
        match buffer.char_at(i) {
            Some('{') => {
                if depth == 0 {
                    pairs += 1;
                }
                depth += 1;
            }
            Some('}') => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    (depth == 0).then_some(pairs)
}
