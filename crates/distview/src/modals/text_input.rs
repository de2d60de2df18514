use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::event::{AppKeyEvent, KeyCode};
use crate::state::TextInputModal;

use super::ModalResult;
use super::helpers::{input_line, key_hints, render_modal_frame};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 9;

pub fn render_text_input_modal(frame: &mut Frame, modal: &TextInputModal, accent: Color) {
    let chunks = render_modal_frame(
        frame,
        &modal.title,
        (MODAL_WIDTH, MODAL_HEIGHT),
        accent,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Help text
        ],
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        modal.prompt.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(prompt, chunks[1]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(chunks[2]);
    frame.render_widget(input_block, chunks[2]);
    let line = input_line(&modal.value, modal.cursor_pos, input_inner.width as usize);
    frame.render_widget(Paragraph::new(line), input_inner);

    let help = key_hints(&[
        ("[Enter]", Color::Green, "Confirm"),
        ("[Esc]", Color::Yellow, "Cancel"),
    ]);
    frame.render_widget(help, chunks[3]);
}

pub fn handle_text_input_key(key: &AppKeyEvent, modal: &mut TextInputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Confirmed(modal.action, modal.value.clone()),
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Delete => {
            modal.delete();
            ModalResult::Continue
        }
        KeyCode::Left => {
            modal.move_cursor_left();
            ModalResult::Continue
        }
        KeyCode::Right => {
            modal.move_cursor_right();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.move_cursor_home();
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.move_cursor_end();
            ModalResult::Continue
        }
        KeyCode::Char(c) if !key.ctrl() => {
            modal.insert_char(c);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;

    #[test]
    fn test_typing_and_confirm() {
        let mut modal = TextInputModal::new("t", "p", "", ModalAction::SetAxisLimits);
        for c in "-5,5".chars() {
            handle_text_input_key(&AppKeyEvent::new(KeyCode::Char(c)), &mut modal);
        }
        assert_eq!(
            handle_text_input_key(&AppKeyEvent::new(KeyCode::Enter), &mut modal),
            ModalResult::Confirmed(ModalAction::SetAxisLimits, "-5,5".to_string())
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut modal = TextInputModal::new("t", "p", "1", ModalAction::SetAxisLimits);
        assert_eq!(
            handle_text_input_key(&AppKeyEvent::new(KeyCode::Esc), &mut modal),
            ModalResult::Cancelled
        );
    }
}
