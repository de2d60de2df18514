//! Rendering pieces shared by the text-input and message modals.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
};

use super::centered_rect;

/// One line of an input field, scrolled so the cursor stays visible.
///
/// `width` is the inner width of the field. One cell goes to the leading
/// pad and one to the cursor block past the end of the text.
pub fn input_line(value: &str, cursor_pos: usize, width: usize) -> Line<'static> {
    let chars: Vec<char> = value.chars().collect();
    let visible = width.saturating_sub(2).max(1);

    let start = if chars.len() < visible {
        0
    } else {
        let end = (cursor_pos.saturating_sub(visible / 2) + visible).min(chars.len() + 1);
        end.saturating_sub(visible)
    };
    let end = (start + visible).min(chars.len());

    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let mut spans = vec![Span::raw(" ")];
    for (i, c) in chars[start..end].iter().enumerate() {
        let span = if start + i == cursor_pos {
            Span::styled(c.to_string(), cursor_style)
        } else {
            Span::raw(c.to_string())
        };
        spans.push(span);
    }
    if cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

/// Clear a centred area, draw a titled border around it and split the
/// inside vertically.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    size: (u16, u16),
    border_color: Color,
    constraints: &[Constraint],
) -> Rc<[Rect]> {
    let area = centered_rect(size.0, size.1, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner)
}

/// `[Enter] Confirm  [Esc] Cancel` style hint line.
pub fn key_hints(hints: &[(&str, Color, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, color, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(*color)));
        spans.push(Span::raw(format!(" {desc}")));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_short_value_is_not_scrolled() {
        let line = input_line("-10,10", 3, 20);
        assert_eq!(text(&line), " -10,10");
        // pad plus one span per char
        assert_eq!(line.spans.len(), 7);
        assert_eq!(line.spans[4].style.bg, Some(Color::White));
    }

    #[test]
    fn test_cursor_at_end_adds_block() {
        let line = input_line("ab", 2, 20);
        assert_eq!(text(&line), " ab ");
        assert_eq!(line.spans[3].style.bg, Some(Color::White));
    }

    #[test]
    fn test_long_value_keeps_cursor_visible() {
        let value = "-1000000000000000,1000000000000000000";
        let len = value.chars().count();

        let line = input_line(value, len, 15);
        let shown = text(&line);
        assert!(shown.chars().count() <= 15);
        assert!(shown.ends_with("000 "));

        let line = input_line(value, 0, 15);
        assert!(text(&line).starts_with(" -100"));
        assert_eq!(line.spans[1].style.bg, Some(Color::White));
    }

    #[test]
    fn test_key_hints_layout() {
        let hints = key_hints(&[
            ("[Enter]", Color::Green, "Confirm"),
            ("[Esc]", Color::Yellow, "Cancel"),
        ]);
        let expected = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Confirm"),
            Span::raw("  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]);
        assert_eq!(hints, expected);
    }
}
