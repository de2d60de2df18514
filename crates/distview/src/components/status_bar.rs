use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{ERROR_COLOR, HELP_COLOR, base_style};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str =
    "F10/m: menu | j/k: select | h/l: adjust | e: type value | r: reset | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.as_str()),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(Span::raw(status.as_str()))
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR)))
        };

        let paragraph = Paragraph::new(content)
            .style(base_style(&state.theme))
            .block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
