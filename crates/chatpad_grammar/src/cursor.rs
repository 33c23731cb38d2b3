//! Scan position over preprocessed text.

/// A forward-only position in the text being tokenized.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Cursor<'t> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns the unread text.
    #[must_use]
    pub fn rest(&self) -> &'t str {
        &self.text[self.pos..]
    }

    /// Returns the byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once all text has been read.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Moves forward `len` bytes, stopping at the end of the text.
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.text.len());
    }
}
