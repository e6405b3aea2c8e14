use super::*;

impl App {
    pub(in crate::tui_shell) fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.finish(PickerExit::Cancelled);
                None
            }
            KeyCode::Char('c') if ctrl => {
                self.finish(PickerExit::Cancelled);
                None
            }
            KeyCode::Enter => self.confirm(),
            KeyCode::Up => {
                self.move_up();
                None
            }
            KeyCode::Char('k') if !ctrl => {
                self.move_up();
                None
            }
            KeyCode::Down => {
                self.move_down();
                None
            }
            KeyCode::Char('j') if !ctrl => {
                self.move_down();
                None
            }
            KeyCode::Char('R') => self.request_fetch(),
            KeyCode::Char('r') if !self.input.focused => self.request_fetch(),
            KeyCode::Tab => {
                self.input.toggle_focus();
                None
            }
            _ => {
                if self.input.handle_key(key) {
                    self.refilter();
                    self.clamp_cursor();
                }
                None
            }
        }
    }
}
