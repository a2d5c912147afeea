use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that apply regardless of the active view.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Esc, _) | (KeyCode::Backspace, _) => Some(AppMessage::GoBack),
            (KeyCode::Char('R'), _) => Some(AppMessage::ReloadRoutes),
            (KeyCode::Char('x'), _) => Some(AppMessage::DismissError),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_global_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(InputHandler::handle_key(ctrl_c), Some(AppMessage::Quit)));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(InputHandler::handle_key(esc), Some(AppMessage::GoBack)));

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(InputHandler::handle_key(plain_c).is_none());
    }
}
