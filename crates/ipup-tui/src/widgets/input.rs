//! Single-line text input rendering

use ipup_app::text_field::TextField;
use ratatui::text::{Line, Span};

use crate::theme::styles;

/// Render `field` after `label`, highlighting the cursor cell when focused.
///
/// The cursor sits on a trailing blank when it is past the last character.
pub fn input_line<'a>(label: &'a str, field: &'a TextField, focused: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(label, styles::text_secondary())];

    if !focused {
        spans.push(Span::styled(field.value(), styles::text_primary()));
        return Line::from(spans);
    }

    let value = field.value();
    let split = value
        .char_indices()
        .nth(field.cursor())
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    let (before, rest) = value.split_at(split);
    let mut rest_chars = rest.chars();
    let under = rest_chars.next();
    let after = rest_chars.as_str();

    spans.push(Span::styled(before, styles::text_bright_bold()));
    match under {
        Some(c) => spans.push(Span::styled(c.to_string(), styles::cursor())),
        None => spans.push(Span::styled(" ", styles::cursor())),
    }
    spans.push(Span::styled(after, styles::text_bright_bold()));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipup_app::text_field::FieldEdit;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_unfocused_shows_value_only() {
        let field = TextField::new("/ip4/127.0.0.1/tcp/5001");
        let line = input_line("API ", &field, false);
        assert_eq!(text(&line), "API /ip4/127.0.0.1/tcp/5001");
    }

    #[test]
    fn test_focused_at_end_appends_cursor_cell() {
        let field = TextField::new("abc");
        let line = input_line("", &field, true);
        assert_eq!(text(&line), "abc ");
        assert_eq!(line.spans[2].style, styles::cursor());
    }

    #[test]
    fn test_focused_cursor_highlights_char_under_it() {
        let mut field = TextField::new("héllo");
        field.apply(FieldEdit::Home);
        field.apply(FieldEdit::Right);

        let line = input_line("", &field, true);
        assert_eq!(line.spans[1].content, "h");
        assert_eq!(line.spans[2].content, "é");
        assert_eq!(line.spans[3].content, "llo");
    }
}
