use crate::input::CursorMove;

/// Text typed into the search field, edited at a cursor.
///
/// Kept as chars so the cursor is a plain index; `cursor <= chars.len()`
/// holds after every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    chars: Vec<char>,
    cursor: usize,
}

impl SearchQuery {
    pub fn insert(&mut self, character: char) {
        self.chars.insert(self.cursor, character);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(self.chars.len()),
            CursorMove::Start => 0,
            CursorMove::End => self.chars.len(),
        };
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Trimmed, lowercased query used to match library items
    #[must_use]
    pub fn needle(&self) -> String {
        self.chars
            .iter()
            .collect::<String>()
            .trim()
            .to_lowercase()
    }

    /// At most `width` chars around the cursor, split at the cursor.
    /// The window scrolls so the cursor stays inside it.
    #[must_use]
    pub fn visible(&self, width: usize) -> (String, String) {
        let width = width.max(1);
        let len = self.chars.len();
        // The slot after the last char is where the cursor sits at the end
        let start = self
            .cursor
            .saturating_sub(width - 1)
            .min((len + 1).saturating_sub(width));
        let end = (start + width).min(len);
        let collect = |range: std::ops::Range<usize>| -> String {
            self.chars
                .get(range)
                .map(|chars| chars.iter().collect())
                .unwrap_or_default()
        };
        (collect(start..self.cursor), collect(self.cursor..end))
    }
}
