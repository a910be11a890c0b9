//! Single-line editable text with a cursor

/// Edit operation applied to a focused text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
}

/// Text value plus cursor position.
///
/// The cursor is a char index, not a byte offset, so multi-byte input
/// (file names with accents, etc.) edits correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Create a field with the cursor after the last character
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True for empty or whitespace-only input
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        let len = self.value.chars().count();
        match edit {
            FieldEdit::Insert(c) => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            FieldEdit::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_offset(self.cursor - 1);
                    self.value.remove(at);
                    self.cursor -= 1;
                }
            }
            FieldEdit::Delete => {
                if self.cursor < len {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
            }
            FieldEdit::Left => self.cursor = self.cursor.saturating_sub(1),
            FieldEdit::Right => self.cursor = (self.cursor + 1).min(len),
            FieldEdit::Home => self.cursor = 0,
            FieldEdit::End => self.cursor = len,
            FieldEdit::Clear => {
                self.value.clear();
                self.cursor = 0;
            }
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextField {
        let mut field = TextField::default();
        for c in text.chars() {
            field.apply(FieldEdit::Insert(c));
        }
        field
    }

    #[test]
    fn test_typing_appends() {
        let field = typed("abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = typed("ac");
        field.apply(FieldEdit::Left);
        field.apply(FieldEdit::Insert('b'));
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = typed("abcd");
        field.apply(FieldEdit::Backspace);
        assert_eq!(field.value(), "abc");

        field.apply(FieldEdit::Home);
        field.apply(FieldEdit::Delete);
        assert_eq!(field.value(), "bc");

        field.apply(FieldEdit::Backspace);
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = typed("café");
        field.apply(FieldEdit::Backspace);
        assert_eq!(field.value(), "caf");
        field.apply(FieldEdit::Insert('é'));
        field.apply(FieldEdit::Left);
        field.apply(FieldEdit::Insert('x'));
        assert_eq!(field.value(), "cafxé");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = TextField::new("ab");
        field.apply(FieldEdit::Right);
        assert_eq!(field.cursor(), 2);
        field.apply(FieldEdit::Home);
        field.apply(FieldEdit::Left);
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_is_blank() {
        assert!(TextField::new("   ").is_blank());
        assert!(TextField::default().is_blank());
        assert!(!TextField::new(" x ").is_blank());
    }
}
