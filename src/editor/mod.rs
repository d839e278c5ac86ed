//! Structural editor for single-line LaTeX-style math markup.
//!
//! The editor treats bracketed function units (`\sin{...}`,
//! `\frac{...}{...}`, `^{...}`) as atomic structures: they are inserted
//! whole, navigated across as wholes, and deleted as wholes, while the
//! content *inside* a slot is edited character by character. One
//! [`EditorSession`] exists per editing surface; collaborators observe
//! it through [`EditorSession::current_text`] and
//! [`EditorSession::rendered_display`] and never mutate the buffer
//! directly.

mod braces;
mod buffer;
mod navigate;
mod nesting;
mod template;

pub use braces::{find_matching_brace, BraceSpan};
pub use buffer::InputBuffer;
pub use navigate::Direction;
pub use nesting::{at_nesting_limit, depth_of, MAX_NESTING_DEPTH};
pub use template::{
    complete_unit_ending_at, empty_unit_at, match_template, template_named, FunctionTemplate,
    UnitMatch, EXPONENT, TEMPLATES,
};

use braces::enclosing_span;
use thiserror::Error;

/// Marker spliced into [`EditorSession::rendered_display`] at the cursor.
pub const CURSOR_MARKER: char = '|';

/// A rejected edit. Never fatal: the buffer and cursor are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Inserting would nest a gated template past [`MAX_NESTING_DEPTH`].
    #[error("nesting limit of {MAX_NESTING_DEPTH} reached for {template}")]
    NestingLimit { template: &'static str },
    /// No template with the requested name is registered.
    #[error("unknown template `{0}`")]
    UnknownTemplate(String),
}

/// One editing session: buffer, cursor, and a change counter.
///
/// Every mutating operation runs to completion synchronously and bumps
/// [`EditorSession::revision`] when it changed anything; subscribers
/// (the render surface, the curve evaluator) compare revisions after
/// each operation instead of being called from inside one another.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    buffer: InputBuffer,
    revision: u64,
}

impl EditorSession {
    /// A fresh session with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session seeded with `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: InputBuffer::from_text(text),
            revision: 0,
        }
    }

    /// Full buffer contents.
    pub fn current_text(&self) -> String {
        self.buffer.text()
    }

    /// Current clamped cursor index.
    pub const fn cursor_position(&self) -> usize {
        self.buffer.cursor()
    }

    /// Buffer contents with the cursor marker spliced in.
    ///
    /// Recomputed on every call; never mutates state.
    pub fn rendered_display(&self) -> String {
        let mut out = String::with_capacity(self.buffer.len() + 1);
        for (i, ch) in self.buffer.text().chars().enumerate() {
            if i == self.buffer.cursor() {
                out.push(CURSOR_MARKER);
            }
            out.push(ch);
        }
        if self.buffer.cursor() >= self.buffer.len() {
            out.push(CURSOR_MARKER);
        }
        out
    }

    /// Monotonic change counter; moves whenever an operation mutated
    /// the buffer or cursor.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Insert a plain character at the cursor. No structural checks.
    pub fn insert_char(&mut self, ch: char) {
        let pos = self.buffer.cursor();
        let mut tmp = [0u8; 4];
        self.buffer.insert(pos, ch.encode_utf8(&mut tmp));
        self.buffer.set_cursor(pos + 1);
        self.touch();
    }

    /// Insert a binary operator padded with spaces (cosmetic only).
    pub fn insert_operator(&mut self, op: char) {
        let pos = self.buffer.cursor();
        let text = format!(" {op} ");
        self.buffer.insert(pos, &text);
        self.buffer.set_cursor(pos + 3);
        self.touch();
    }

    /// Splice in the named template's empty skeleton and land the
    /// cursor inside its first empty slot.
    ///
    /// # Errors
    ///
    /// [`EditError::NestingLimit`] when a gated template is already
    /// nested [`MAX_NESTING_DEPTH`] deep at the cursor;
    /// [`EditError::UnknownTemplate`] for unregistered names. Either
    /// way the buffer and cursor are unchanged.
    pub fn insert_template(&mut self, name: &str) -> Result<(), EditError> {
        let template =
            template_named(name).ok_or_else(|| EditError::UnknownTemplate(name.to_string()))?;
        self.splice_template(template)
    }

    /// Insert the exponent shorthand `^{}`, cursor inside the slot.
    ///
    /// # Errors
    ///
    /// [`EditError::NestingLimit`] once exponents are nested
    /// [`MAX_NESTING_DEPTH`] deep at the cursor.
    pub fn insert_exponent(&mut self) -> Result<(), EditError> {
        self.splice_template(&EXPONENT)
    }

    fn splice_template(&mut self, template: &'static FunctionTemplate) -> Result<(), EditError> {
        let pos = self.buffer.cursor();
        if at_nesting_limit(&self.buffer, template, pos) {
            return Err(EditError::NestingLimit {
                template: template.name,
            });
        }
        self.buffer.insert(pos, &template.skeleton());
        // Land inside the first empty slot at or after the insertion
        // point; fall back to the end when none is found.
        let landing = self
            .buffer
            .find_pair_from(pos, '{', '}')
            .map_or(self.buffer.len(), |i| i + 1);
        self.buffer.set_cursor(landing);
        self.touch();
        Ok(())
    }

    /// Delete backward from the cursor, structurally.
    ///
    /// Priority order:
    /// 1. a still-empty, just-inserted unit at the cursor is removed
    ///    whole (token through final brace);
    /// 2. the structural braces of a slot are protected; backspacing
    ///    against an opening brace is a no-op;
    /// 3. a complete unit ending at the cursor is removed whole;
    /// 4. anything else is a plain single-character delete.
    ///
    /// A unit is therefore always left intact, edited inside, or
    /// removed whole; its delimiters are never stripped one at a time.
    pub fn backspace(&mut self) {
        let c = self.buffer.cursor();
        if c == 0 {
            return;
        }

        if let Some(unit) = empty_unit_at(&self.buffer, c) {
            self.buffer.remove(unit.start, unit.len());
            self.buffer.set_cursor(unit.start);
            self.touch();
            return;
        }

        match self.buffer.char_at(c - 1) {
            // An opening brace behind the cursor is always structural:
            // deleting it would orphan the slot. Required braces of an
            // unfilled argument may never be deleted.
            Some('{') => {}
            Some('}') => {
                if let Some(unit) = complete_unit_ending_at(&self.buffer, c) {
                    self.buffer.remove(unit.start, unit.len());
                    self.buffer.set_cursor(unit.start);
                } else {
                    // Unbalanced or malformed: fall back to a plain,
                    // unstructured delete.
                    self.delete_one(c);
                }
                self.touch();
            }
            Some(_) => {
                self.delete_one(c);
                self.touch();
            }
            None => {}
        }
    }

    /// Move the cursor one structural step.
    pub fn move_cursor(&mut self, direction: Direction) {
        let before = self.buffer.cursor();
        navigate::move_cursor(&mut self.buffer, direction);
        if self.buffer.cursor() != before {
            self.touch();
        }
    }

    /// Empty the buffer and reset the cursor.
    pub fn clear(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.buffer.clear();
        self.touch();
    }

    /// Replace the whole buffer, cursor at the end. Used by
    /// evaluate-in-place.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = InputBuffer::from_text(text);
        self.touch();
    }

    /// Whether the cursor currently sits inside an empty slot.
    pub fn cursor_in_empty_slot(&self) -> bool {
        enclosing_span(&self.buffer, self.buffer.cursor())
            .is_some_and(|span| span.is_empty_slot(&self.buffer))
    }

    fn delete_one(&mut self, c: usize) {
        self.buffer.remove(c - 1, 1);
        self.buffer.set_cursor(c - 1);
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.buffer.clamp_cursor();
    }

    #[cfg(test)]
    fn set_cursor(&mut self, pos: usize) {
        self.buffer.set_cursor(pos);
    }
}
