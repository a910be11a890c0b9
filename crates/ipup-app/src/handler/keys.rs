//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use crate::text_field::FieldEdit;

/// Convert key events to messages based on the focused input
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => return Some(Message::Quit),
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrevious),
        InputKey::CharCtrl('k') if state.is_connected() => {
            return Some(Message::ToggleKeepFilename)
        }
        _ => {}
    }

    match state.focus {
        Focus::Address => handle_key_text_field(Focus::Address, key, Message::Connect),
        Focus::FilePath => handle_key_text_field(Focus::FilePath, key, Message::SubmitUpload),
        Focus::KeepFilename => handle_key_checkbox(key),
    }
}

/// Editing keys edit the field; Enter submits it
fn handle_key_text_field(field: Focus, key: InputKey, submit: Message) -> Option<Message> {
    let edit = match key {
        InputKey::Enter => return Some(submit),
        InputKey::Char(c) => FieldEdit::Insert(c),
        InputKey::Backspace => FieldEdit::Backspace,
        InputKey::Delete => FieldEdit::Delete,
        InputKey::Left => FieldEdit::Left,
        InputKey::Right => FieldEdit::Right,
        InputKey::Home | InputKey::CharCtrl('a') => FieldEdit::Home,
        InputKey::End | InputKey::CharCtrl('e') => FieldEdit::End,
        InputKey::CharCtrl('u') => FieldEdit::Clear,
        _ => return None,
    };
    Some(Message::FieldInput { field, edit })
}

fn handle_key_checkbox(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleKeepFilename),
        _ => None,
    }
}
