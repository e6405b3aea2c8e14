use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) const PLACEHOLDER: &str = "Type to search tabs...";
const CHAR_LIMIT: usize = 100;

/// Single-line query editor. `cursor` counts chars, not bytes.
#[derive(Debug)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
    pub(super) focused: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            buf: String::new(),
            cursor: 0,
            focused: true,
        }
    }
}

impl Input {
    pub(super) fn value(&self) -> &str {
        &self.buf
    }

    pub(super) fn toggle_focus(&mut self) {
        self.focused = !self.focused;
    }

    /// Applies an editing key. Returns true when the text changed.
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('a') if ctrl => self.home(),
            KeyCode::Char('e') if ctrl => self.end(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char(c)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => false,
        }
    }

    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.buf
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }

    pub(super) fn clear(&mut self) -> bool {
        let changed = !self.buf.is_empty();
        self.buf.clear();
        self.cursor = 0;
        changed
    }

    pub(super) fn insert_char(&mut self, c: char) -> bool {
        if self.char_len() >= CHAR_LIMIT {
            return false;
        }
        let at = self.byte_at(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
        true
    }

    pub(super) fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
        true
    }

    pub(super) fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
        true
    }

    fn move_left(&mut self) -> bool {
        self.cursor = self.cursor.saturating_sub(1);
        false
    }

    fn move_right(&mut self) -> bool {
        self.cursor = (self.cursor + 1).min(self.char_len());
        false
    }

    fn home(&mut self) -> bool {
        self.cursor = 0;
        false
    }

    fn end(&mut self) -> bool {
        self.cursor = self.char_len();
        false
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/input_tests.rs"]
mod tests;
