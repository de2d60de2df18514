//! The dropdown menu bar: "X-Axis Range", "View" and "Edit".
//!
//! Open/close state, highlight and hit-testing live in the core
//! [`MenuBar`]; this component maps terminal input onto it and draws it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use distview_core::{Bounds, ConfigurationError, ItemDescriptor, MenuBar, Point};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Component, EventResult};
use crate::actions::AppAction;
use crate::config::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, Overlay, Overlays};
use crate::util::styles::{highlight_style, panel_style};
use crate::util::{to_bounds, to_rect};

pub struct MenuBarView {
    bar: MenuBar<AppAction>,
    /// Top-level window as of the last render
    window: Bounds,
}

impl MenuBarView {
    /// Build the three menus, binding every overlay toggle to its flag.
    pub fn new(overlays: &Overlays) -> Result<Self, ConfigurationError> {
        let mut bar = MenuBar::new();

        bar.add_menu(
            "X-Axis Range",
            [
                (
                    "Set Manual Limits…",
                    ItemDescriptor::command(AppAction::PromptAxisLimits),
                ),
                (
                    "Reset to Auto",
                    ItemDescriptor::command(AppAction::ResetAxisLimits),
                ),
            ],
        )?;

        let view_items = Overlay::LINES
            .into_iter()
            .map(|overlay| (overlay.view_label(), overlay_toggle(overlays, overlay)))
            .chain([
                (
                    "Reload Theme".to_string(),
                    ItemDescriptor::command(AppAction::ReloadTheme),
                ),
                (
                    "Reset Parameters".to_string(),
                    ItemDescriptor::command(AppAction::ResetParameters),
                ),
            ]);
        bar.add_menu("View", view_items)?;

        let edit_items = Overlay::ALL
            .into_iter()
            .map(|overlay| (overlay.label(), overlay_toggle(overlays, overlay)));
        bar.add_menu("Edit", edit_items)?;

        Ok(Self {
            bar,
            window: Bounds::default(),
        })
    }

    pub fn bar(&self) -> &MenuBar<AppAction> {
        &self.bar
    }

    pub fn is_open(&self) -> bool {
        self.bar.open_index().is_some()
    }

    pub fn close(&mut self) {
        self.bar.close_all();
    }

    /// Record the window size so popups can be placed before the next draw.
    pub fn set_window(&mut self, window: Rect) {
        self.window = to_bounds(window);
    }

    fn dispatch(action: Option<AppAction>) -> EventResult {
        action.map_or(EventResult::Handled, EventResult::Dispatch)
    }

    /// Draw the open menu's item panel, if any. Call after the body so the
    /// panel sits on top.
    pub fn render_popup(&self, frame: &mut Frame, state: &AppState) {
        let Some(index) = self.bar.open_index() else {
            return;
        };
        let menu = &self.bar.menus()[index];
        let Some(panel) = menu.panel_bounds(self.window) else {
            return;
        };
        let area = to_rect(panel, frame.area());
        if area.is_empty() {
            return;
        }

        let theme = &state.theme;
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent.into()))
            .style(panel_style(theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = menu
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let indicator = match item.checked() {
                    Some(true) => "[x] ",
                    Some(false) => "[ ] ",
                    None => "    ",
                };
                let style = if i == menu.highlighted() {
                    highlight_style(theme)
                } else {
                    panel_style(theme)
                };
                let text = format!("{indicator}{}", item.label());
                let pad = (inner.width as usize).saturating_sub(text.chars().count());
                Line::from(Span::styled(format!("{text}{}", " ".repeat(pad)), style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn overlay_toggle(overlays: &Overlays, overlay: Overlay) -> ItemDescriptor<AppAction> {
    ItemDescriptor::toggle(overlays.flag(overlay).clone())
        .with_action(AppAction::OverlayChanged(overlay))
}

impl Component for MenuBarView {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let bindings = &state.keybindings;

        if !self.is_open() {
            if KeybindingsConfig::matches(key, &bindings.global.open_menu) {
                self.bar.open_adjacent(true, self.window);
                return EventResult::Handled;
            }
            return EventResult::NotHandled;
        }

        let menu = &bindings.menu;
        if KeybindingsConfig::matches(key, &menu.close) {
            self.bar.close_all();
        } else if KeybindingsConfig::matches(key, &menu.next_menu) {
            self.bar.open_adjacent(true, self.window);
        } else if KeybindingsConfig::matches(key, &menu.prev_menu) {
            self.bar.open_adjacent(false, self.window);
        } else if KeybindingsConfig::matches(key, &menu.down) {
            self.bar.highlight_next();
        } else if KeybindingsConfig::matches(key, &menu.up) {
            self.bar.highlight_prev();
        } else if KeybindingsConfig::matches(key, &menu.activate) {
            return Self::dispatch(self.bar.activate_highlighted());
        }
        // An open menu swallows every other key
        EventResult::Handled
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, _state: &mut AppState) -> EventResult {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return EventResult::NotHandled;
        };
        let point = Point::new(mouse.column, mouse.row);

        if let Some(index) = self.bar.header_at(point) {
            self.bar.toggle_open(index, self.window);
            return EventResult::Handled;
        }
        if let Some((menu, item)) = self.bar.item_at(point, self.window) {
            return Self::dispatch(self.bar.activate(menu, item));
        }
        if self.bar.contains(point, self.window) {
            // Panel border
            return EventResult::Handled;
        }
        if self.is_open() {
            self.bar.close_all();
            return EventResult::Handled;
        }
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.window = to_bounds(frame.area());
        self.bar.layout(to_bounds(area));

        let theme = &state.theme;
        let open = self.bar.open_index();
        let mut spans = vec![Span::raw(" ")];
        for (i, menu) in self.bar.menus().iter().enumerate() {
            let style = if open == Some(i) {
                highlight_style(theme)
            } else {
                panel_style(theme)
            };
            spans.push(Span::styled(format!(" {} ", menu.label()), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(panel_style(theme)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeybindingsConfig, Theme, ThemeSource};
    use crate::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn setup() -> (MenuBarView, AppState) {
        let state = AppState::new(
            Theme::builtin().unwrap(),
            ThemeSource::Builtin,
            KeybindingsConfig::default(),
        );
        let mut view = MenuBarView::new(&state.overlays).unwrap();
        view.set_window(Rect::new(0, 0, 80, 24));
        view.bar.layout(Bounds::new(0, 0, 80, 1));
        (view, state)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_menus_and_items() {
        let (view, _) = setup();
        let labels: Vec<&str> = view.bar().menus().iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["X-Axis Range", "View", "Edit"]);
        assert_eq!(view.bar().menus()[1].items().len(), 6);
        assert_eq!(view.bar().menus()[2].items().len(), 7);
    }

    #[test]
    fn test_view_and_edit_share_flags() {
        let (mut view, state) = setup();
        // Edit > Median
        view.bar.toggle_open(2, view.window);
        let action = view.bar.activate(2, 1);
        assert_eq!(action, Some(AppAction::OverlayChanged(Overlay::Median)));
        assert!(state.overlays.is_shown(Overlay::Median));
        assert_eq!(view.bar().menus()[1].items()[1].checked(), Some(true));
        // Toggles keep the panel open
        assert_eq!(view.bar().open_index(), Some(2));
    }

    #[test]
    fn test_keyboard_navigation() {
        let (mut view, mut state) = setup();
        let key = |code| AppKeyEvent::new(code);

        assert_eq!(
            view.handle_key(&key(KeyCode::Down), &mut state),
            EventResult::NotHandled
        );
        view.handle_key(&key(KeyCode::F(10)), &mut state);
        assert_eq!(view.bar().open_index(), Some(0));

        view.handle_key(&key(KeyCode::Right), &mut state);
        assert_eq!(view.bar().open_index(), Some(1));

        // View > Reload Theme is the fifth entry
        for _ in 0..4 {
            view.handle_key(&key(KeyCode::Down), &mut state);
        }
        assert_eq!(
            view.handle_key(&key(KeyCode::Enter), &mut state),
            EventResult::Dispatch(AppAction::ReloadTheme)
        );
        assert!(!view.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let (mut view, mut state) = setup();
        view.handle_key(&AppKeyEvent::new(KeyCode::Char('m')), &mut state);
        assert!(view.is_open());
        view.handle_key(&AppKeyEvent::new(KeyCode::Esc), &mut state);
        assert!(!view.is_open());
    }

    #[test]
    fn test_mouse_opens_and_activates() {
        let (mut view, mut state) = setup();
        // "X-Axis Range" header spans columns 1..15
        assert_eq!(view.handle_mouse(&click(3, 0), &mut state), EventResult::Handled);
        assert_eq!(view.bar().open_index(), Some(0));

        // First item row sits below the top border of the panel at y = 1
        assert_eq!(
            view.handle_mouse(&click(4, 2), &mut state),
            EventResult::Dispatch(AppAction::PromptAxisLimits)
        );
        assert!(!view.is_open());
    }

    #[test]
    fn test_click_outside_closes() {
        let (mut view, mut state) = setup();
        view.handle_mouse(&click(3, 0), &mut state);
        assert_eq!(view.handle_mouse(&click(70, 20), &mut state), EventResult::Handled);
        assert!(!view.is_open());
        assert_eq!(
            view.handle_mouse(&click(70, 20), &mut state),
            EventResult::NotHandled
        );
    }

    #[test]
    fn test_renders_headers_and_popup() {
        let (mut view, state) = setup();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        view.bar.toggle_open(1, view.window);
        terminal
            .draw(|frame| {
                view.render(frame, Rect::new(0, 0, 80, 1), &state);
                view.render_popup(frame, &state);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..80).map(|x| buffer[(x, y)].symbol()).collect() };
        assert!(row(0).contains(" X-Axis Range   View   Edit "));
        assert!(row(2).contains("[x] Show Mean Line"));
        assert!(row(3).contains("[ ] Show Median Line"));
    }
}
