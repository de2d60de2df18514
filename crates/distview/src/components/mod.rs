pub mod controls;
pub mod menu_bar;
pub mod plot;
pub mod status_bar;

use crossterm::event::MouseEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::actions::AppAction;
use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// Request app exit
    Exit,
    /// Event produced an action for the app to perform
    Dispatch(AppAction),
}

/// Trait for components that can handle input and render
pub trait Component {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult;

    fn handle_mouse(&mut self, _mouse: &MouseEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
