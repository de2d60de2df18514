use ratatui::{
    Frame,
    layout::Constraint,
    style::Color,
    widgets::{Paragraph, Wrap},
};

use crate::event::{AppKeyEvent, KeyCode};
use crate::state::MessageModal;

use super::ModalResult;
use super::helpers::{key_hints, render_modal_frame};

const MODAL_WIDTH: u16 = 50;
const MODAL_MIN_HEIGHT: u16 = 6;

pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    let message_lines = modal.message.chars().count() / (MODAL_WIDTH as usize - 4) + 1;
    let height = (MODAL_MIN_HEIGHT + message_lines as u16).min(frame.area().height.saturating_sub(2));

    let border_color = if modal.is_error {
        Color::Red
    } else {
        Color::Green
    };

    let chunks = render_modal_frame(
        frame,
        &modal.title,
        (MODAL_WIDTH, height),
        border_color,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Help text
        ],
    );

    let message = Paragraph::new(modal.message.as_str()).wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[1]);

    let help = key_hints(&[
        ("[Enter]", Color::Green, "or"),
        ("[Esc]", Color::Yellow, "to dismiss"),
    ]);
    frame.render_widget(help, chunks[2]);
}

pub fn handle_message_key(key: &AppKeyEvent) -> ModalResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}
