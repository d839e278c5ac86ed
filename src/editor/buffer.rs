/// A single-line character buffer with a clamped cursor index.
///
/// The cursor denotes the gap *before* the character at its index, so
/// valid positions range over `0..=len()`. All structural editing logic
/// works in character positions; the buffer owns the only mutable copy
/// of the text and re-clamps the cursor after every length change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl InputBuffer {
    /// Create an empty buffer with the cursor at 0.
    pub const fn new() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
        }
    }

    /// Create a buffer from existing text, cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    /// Number of characters in the buffer.
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer holds no characters.
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The current cursor position, always in `0..=len()`.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `pos`, clamped into range.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.chars.len());
    }

    /// Force the cursor back into `0..=len()`.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.chars.len());
    }

    /// The character at `idx`, if in range.
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    /// Insert `text` at character position `pos`.
    ///
    /// `pos` must be in `0..=len()`; callers uphold this.
    pub fn insert(&mut self, pos: usize, text: &str) {
        debug_assert!(pos <= self.chars.len());
        self.chars.splice(pos..pos, text.chars());
    }

    /// Remove `count` characters starting at `pos`.
    ///
    /// `pos + count` must not exceed `len()`; callers uphold this.
    pub fn remove(&mut self, pos: usize, count: usize) {
        debug_assert!(pos + count <= self.chars.len());
        self.chars.drain(pos..pos + count);
        self.clamp_cursor();
    }

    /// Drop all content and reset the cursor.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// The full buffer contents as a string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Whether the characters ending at `end` (inclusive) spell `token`.
    ///
    /// Used by template recognition: `token_ends_at(4, "\\sin{")` is true
    /// for the buffer `\sin{x}` because positions 0..=4 hold the token.
    pub fn token_ends_at(&self, end: usize, token: &str) -> bool {
        let token_len = token.chars().count();
        if token_len == 0 || end + 1 < token_len || end >= self.chars.len() {
            return false;
        }
        let start = end + 1 - token_len;
        self.chars[start..=end].iter().copied().eq(token.chars())
    }

    /// Find the first occurrence of the two-character pair `a`,`b` at or
    /// after `from`. Returns the index of `a`.
    pub fn find_pair_from(&self, from: usize, a: char, b: char) -> Option<usize> {
        let mut i = from;
        while i + 1 < self.chars.len() {
            if self.chars[i] == a && self.chars[i + 1] == b {
                return Some(i);
            }
            i += 1;
        }
        None
    }
}
