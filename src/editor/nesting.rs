//! Nesting depth accounting for cap-gated templates.
//!
//! Insertion of a fraction or exponent is refused once the cursor
//! already sits inside [`MAX_NESTING_DEPTH`] ancestor units of the same
//! template; this keeps the rendered markup readable and bounds the
//! structures the recognizer has to walk.

use super::braces::find_matching_brace;
use super::buffer::InputBuffer;
use super::template::FunctionTemplate;

pub use super::template::MAX_NESTING_DEPTH;

/// Count the ancestor units of `template` enclosing the gap at `cursor`.
///
/// Scans left-to-right; every occurrence of the template's token is
/// resolved to its full unit span (both slots for two-slot templates)
/// and counted when the cursor falls strictly inside it. Occurrences
/// with unbalanced braces are skipped rather than reported.
pub fn depth_of(buffer: &InputBuffer, template: &FunctionTemplate, cursor: usize) -> usize {
    let mut depth = 0;
    for open in 0..buffer.len() {
        if buffer.char_at(open) != Some('{') || !buffer.token_ends_at(open, template.token) {
            continue;
        }
        let Some(unit_close) = unit_close_index(buffer, open, template) else {
            continue;
        };
        // Gap positions: just inside the first brace up to the gap
        // before the final closing brace's successor are "inside".
        if open < cursor && cursor <= unit_close {
            depth += 1;
        }
    }
    depth
}

/// Whether inserting `template` at `cursor` would exceed the cap.
pub fn at_nesting_limit(buffer: &InputBuffer, template: &FunctionTemplate, cursor: usize) -> bool {
    template.nesting_limited && depth_of(buffer, template, cursor) >= MAX_NESTING_DEPTH
}

/// The index of the closing brace ending the whole unit whose first
/// slot opens at `open`.
fn unit_close_index(
    buffer: &InputBuffer,
    open: usize,
    template: &FunctionTemplate,
) -> Option<usize> {
    let first_close = find_matching_brace(buffer, open)?;
    if template.slots == 2 {
        if buffer.char_at(first_close + 1) != Some('{') {
            return None;
        }
        find_matching_brace(buffer, first_close + 1)
    } else {
        Some(first_close)
    }
}
