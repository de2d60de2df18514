//! Keyboard event type used by components.
//!
//! Wraps crossterm's `KeyEvent` so components and tests deal in plain
//! modifier flags instead of bitsets.

pub use crossterm::event::KeyCode;

#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }

    /// Shift+Tab arrives as `BackTab` from most terminals.
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::BackTab) || (matches!(self.code, KeyCode::Tab) && self.shift)
    }
}

impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}
