//! Keybindings matching utilities.
//!
//! Converts key events to the string form used in `keybindings.yaml` and
//! checks them against configured bindings.

use crate::config::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

impl KeybindingsConfig {
    /// Convert a key event to its binding string.
    ///
    /// Examples:
    /// - `Char('a')` -> "a"
    /// - `Char('c')` with ctrl -> "ctrl+c"
    /// - `Char('J')` with shift -> "shift+j"
    /// - `Char('+')` with shift -> "+" (shift is implied by the character)
    /// - `BackTab` -> "shift+tab"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(c) => {
                if key.shift && c.is_uppercase() {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if key.shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::BackTab => {
                parts.push("shift");
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return String::new(),
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if a key event matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }
}
