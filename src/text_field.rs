/// Keys of the on-screen symbol keyboard, in display order
pub const KEYBOARD_SYMBOLS: [char; 8] = ['[', ']', '(', ')', ',', '∞', '+', '-'];

/// Single-line editable text with a cursor and an optional selection.
/// Positions count chars, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    chars: Vec<char>,
    cursor: usize,
    anchor: Option<usize>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let chars: Vec<char> = value.chars().collect();
        Self {
            cursor: chars.len(),
            chars,
            anchor: None,
        }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected char range, start first
    pub fn selection(&self) -> Option<(usize, usize)> {
        match self.anchor {
            Some(anchor) if anchor != self.cursor => {
                Some((anchor.min(self.cursor), anchor.max(self.cursor)))
            }
            _ => None,
        }
    }

    /// Insert at the cursor, replacing the selection if any.
    /// The cursor ends up right after the inserted text.
    pub fn insert_str(&mut self, text: &str) {
        let (start, end) = self.selection().unwrap_or((self.cursor, self.cursor));
        let inserted: Vec<char> = text.chars().collect();
        let len = inserted.len();

        self.chars.splice(start..end, inserted);
        self.cursor = start + len;
        self.anchor = None;
    }

    pub fn write(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Symbol keyboard press
    pub fn insert_symbol(&mut self, symbol: char) {
        self.write(symbol);
    }

    pub fn backspace(&mut self) {
        if let Some((start, end)) = self.selection() {
            self.chars.drain(start..end);
            self.cursor = start;
        } else if self.cursor > 0 {
            self.chars.remove(self.cursor - 1);
            self.cursor -= 1;
        }
        self.anchor = None;
    }

    pub fn delete(&mut self) {
        if let Some((start, end)) = self.selection() {
            self.chars.drain(start..end);
            self.cursor = start;
        } else if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
        self.anchor = None;
    }

    /// Move the cursor; with `extend` the selection grows from where it was
    pub fn move_left(&mut self, extend: bool) {
        self.begin_move(extend);
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self, extend: bool) {
        self.begin_move(extend);
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self, extend: bool) {
        self.begin_move(extend);
        self.cursor = 0;
    }

    pub fn end(&mut self, extend: bool) {
        self.begin_move(extend);
        self.cursor = self.chars.len();
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn begin_move(&mut self, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_appends() {
        let mut field = TextField::new();
        for c in "[2,5]".chars() {
            field.write(c);
        }
        assert_eq!(field.value(), "[2,5]");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn test_symbol_inserts_at_cursor() {
        let mut field = TextField::with_value("(3,)");
        field.move_left(false);
        field.insert_symbol('+');
        field.insert_symbol('∞');

        assert_eq!(field.value(), "(3,+∞)");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn test_symbol_replaces_selection() {
        let mut field = TextField::with_value("(2,5)");
        field.move_left(false);
        field.move_left(true);
        field.move_left(true);
        assert_eq!(field.selection(), Some((2, 4)));

        field.insert_symbol(']');
        assert_eq!(field.value(), "(2])");
        // cursor lands one past the start of the replaced range
        assert_eq!(field.cursor(), 3);
        assert_eq!(field.selection(), None);
    }

    #[test]
    fn test_select_all_then_type() {
        let mut field = TextField::with_value("wrong");
        field.select_all();
        field.insert_symbol('[');
        assert_eq!(field.value(), "[");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = TextField::with_value("(-∞,4]");
        field.backspace();
        assert_eq!(field.value(), "(-∞,4");

        field.home(false);
        field.delete();
        assert_eq!(field.value(), "-∞,4");

        field.home(false);
        field.backspace();
        assert_eq!(field.value(), "-∞,4");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_backspace_removes_selection() {
        let mut field = TextField::with_value("[1,2]");
        field.home(false);
        field.end(true);
        field.backspace();
        assert!(field.is_empty());
    }

    #[test]
    fn test_moving_without_extend_drops_selection() {
        let mut field = TextField::with_value("abc");
        field.select_all();
        field.move_left(false);
        assert_eq!(field.selection(), None);
    }

    #[test]
    fn test_keyboard_symbols() {
        assert!(KEYBOARD_SYMBOLS.contains(&'∞'));
        assert_eq!(KEYBOARD_SYMBOLS.len(), 8);
    }
}
