//! Modal dialogs: free-text prompts and messages.

use distview_core::Parameter;

#[derive(Debug)]
pub enum ModalState {
    None,
    TextInput(TextInputModal),
    Message(MessageModal),
}

/// What a confirmed text prompt is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    SetAxisLimits,
    EditParameter(Parameter),
}

#[derive(Debug)]
pub struct TextInputModal {
    pub title: String,
    pub prompt: String,
    pub value: String,
    /// Cursor position in characters
    pub cursor_pos: usize,
    pub action: ModalAction,
}

impl TextInputModal {
    pub fn new(title: &str, prompt: &str, default_value: &str, action: ModalAction) -> Self {
        let value = default_value.to_string();
        let cursor_pos = value.chars().count();
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            value,
            cursor_pos,
            action,
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor_pos);
        self.value.insert(index, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let index = self.byte_index(self.cursor_pos);
            self.value.remove(index);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.len() {
            let index = self.byte_index(self.cursor_pos);
            self.value.remove(index);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.len();
    }
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_editing() {
        let mut modal = TextInputModal::new("t", "p", "-1,1", ModalAction::SetAxisLimits);
        assert_eq!(modal.cursor_pos, 4);

        modal.backspace();
        modal.insert_char('5');
        assert_eq!(modal.value, "-1,5");

        modal.move_cursor_home();
        modal.delete();
        assert_eq!(modal.value, "1,5");

        modal.move_cursor_left();
        assert_eq!(modal.cursor_pos, 0);
        modal.move_cursor_end();
        modal.move_cursor_right();
        assert_eq!(modal.cursor_pos, 3);
    }

    #[test]
    fn test_multibyte_input() {
        let mut modal = TextInputModal::new("t", "p", "σ", ModalAction::SetAxisLimits);
        modal.insert_char('2');
        assert_eq!(modal.value, "σ2");
        modal.move_cursor_left();
        modal.backspace();
        assert_eq!(modal.value, "2");
    }
}
