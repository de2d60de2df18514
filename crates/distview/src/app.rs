use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind, MouseEvent, MouseEventKind};
use distview_core::ConfigurationError;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::actions::AppAction;
use crate::components::{
    Component, EventResult, controls::ControlsPanel, menu_bar::MenuBarView, plot::PlotView,
    status_bar::StatusBar,
};
use crate::config::{KeybindingsConfig, Theme, ThemeSource};
use crate::event::AppKeyEvent;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::state::{AppState, MessageModal, ModalAction, ModalState, TextInputModal};
use crate::util::styles::base_style;

/// Upper bound on how long the loop blocks waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Width of the parameter panel in columns.
const CONTROLS_WIDTH: u16 = 32;

pub struct App {
    state: AppState,
    menu_bar: MenuBarView,
    controls: ControlsPanel,
    plot: PlotView,
    status_bar: StatusBar,
}

impl App {
    pub fn new(
        theme: Theme,
        theme_source: ThemeSource,
        keybindings: KeybindingsConfig,
    ) -> Result<Self, ConfigurationError> {
        let state = AppState::new(theme, theme_source, keybindings);
        let menu_bar = MenuBarView::new(&state.overlays)?;

        Ok(Self {
            state,
            menu_bar,
            controls: ControlsPanel::new(),
            plot: PlotView::new(),
            status_bar: StatusBar::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = self
                .controls
                .next_tick_in(Instant::now())
                .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }
            if !self.modal_open() {
                self.controls.tick(Instant::now(), &mut self.state);
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        frame.render_widget(
            Block::default().style(base_style(&self.state.theme)),
            frame.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Menu bar
                Constraint::Min(0),    // Body
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        self.menu_bar.render(frame, chunks[0], &self.state);
        self.controls.render(frame, body[0], &self.state);
        self.plot.render(frame, body[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Overlays, topmost last
        self.menu_bar.render_popup(frame, &self.state);
        render_modal(frame, &self.state);
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(&AppKeyEvent::from(key_event));
            }
            Event::Mouse(mouse) => self.handle_mouse_event(&mouse),
            Event::Resize(width, height) => {
                self.menu_bar.close();
                self.menu_bar
                    .set_window(ratatui::layout::Rect::new(0, 0, width, height));
            }
            _ => {}
        }
    }

    fn modal_open(&self) -> bool {
        !matches!(self.state.modal, ModalState::None)
    }

    fn handle_key_event(&mut self, key: &AppKeyEvent) {
        self.route_key(key);
        // A modal takes the pointer; the matching release never reaches the sliders
        if self.modal_open() {
            self.controls.release();
        }
    }

    fn route_key(&mut self, key: &AppKeyEvent) {
        // Handle modal first if active
        if self.modal_open() {
            match handle_modal_key(key, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.state.modal = ModalState::None;
                    self.handle_modal_result(action, value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // An open menu owns the keyboard
        if self.menu_bar.is_open() {
            let result = self.menu_bar.handle_key(key, &mut self.state);
            self.apply_event_result(result);
            return;
        }

        let global = &self.state.keybindings.global;
        if KeybindingsConfig::matches(key, &global.quit) {
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(key, &global.reset) {
            self.dispatch(AppAction::ResetParameters);
            return;
        }
        if KeybindingsConfig::matches(key, &global.cancel) {
            self.state.clear_error();
            self.state.status_message = None;
            return;
        }

        let result = self.menu_bar.handle_key(key, &mut self.state);
        if result != EventResult::NotHandled {
            self.apply_event_result(result);
            return;
        }

        let result = self.controls.handle_key(key, &mut self.state);
        self.apply_event_result(result);
    }

    fn handle_mouse_event(&mut self, mouse: &MouseEvent) {
        if self.modal_open() {
            if matches!(mouse.kind, MouseEventKind::Up(_)) {
                self.controls.release();
            }
            return;
        }

        let result = self.menu_bar.handle_mouse(mouse, &mut self.state);
        if result != EventResult::NotHandled {
            // A press consumed by the menu still ends any slider hold
            self.controls.release();
            self.apply_event_result(result);
            return;
        }

        let result = self.controls.handle_mouse(mouse, &mut self.state);
        self.apply_event_result(result);
    }

    fn apply_event_result(&mut self, result: EventResult) {
        match result {
            EventResult::Exit => self.state.exit = true,
            EventResult::Dispatch(action) => self.dispatch(action),
            EventResult::Handled | EventResult::NotHandled => {}
        }
    }

    /// Perform an action produced by a menu item or a global key.
    fn dispatch(&mut self, action: AppAction) {
        tracing::debug!(?action, "dispatch");
        match action {
            AppAction::PromptAxisLimits => {
                let current = self
                    .state
                    .manual_xlim
                    .map(|limits| limits.to_string())
                    .unwrap_or_default();
                self.state.modal = ModalState::TextInput(TextInputModal::new(
                    "Set X-Axis Limits",
                    "Enter x-axis min,max (e.g. -10,10):",
                    &current,
                    ModalAction::SetAxisLimits,
                ));
            }
            AppAction::ResetAxisLimits => {
                self.state.reset_axis_limits();
                self.state.set_status("X-axis range reset to auto");
            }
            AppAction::OverlayChanged(overlay) => {
                let shown = self.state.overlays.is_shown(overlay);
                let verb = if shown { "shown" } else { "hidden" };
                self.state.set_status(format!("{} {verb}", overlay.label()));
            }
            AppAction::ReloadTheme => match self.state.reload_theme() {
                Ok(()) => {
                    let source = self.state.theme_source.to_string();
                    self.state
                        .set_status(format!("Theme reloaded from {source}"));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "theme reload failed");
                    self.state.modal =
                        ModalState::Message(MessageModal::error("Theme Error", &e.to_string()));
                }
            },
            AppAction::ResetParameters => {
                self.state.reset_parameters();
                self.state.set_status("Parameters reset");
            }
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: String) {
        match action {
            ModalAction::SetAxisLimits => match self.state.apply_axis_limits(&value) {
                Ok(()) => {
                    let limits = self.state.x_bounds();
                    self.state.set_status(format!(
                        "X-axis range set to {}..{}",
                        limits[0], limits[1]
                    ));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rejected axis limits");
                    self.state.modal =
                        ModalState::Message(MessageModal::error("Invalid Input", &e.to_string()));
                }
            },
            ModalAction::EditParameter(parameter) => {
                let parsed = self.state.slider(parameter).parse_entry(&value);
                match parsed {
                    Ok(v) => {
                        if let Err(e) = self.state.set_parameter(parameter, v) {
                            self.state.set_error(e.to_string());
                        }
                    }
                    Err(msg) => self.state.set_error(msg),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::state::Overlay;
    use distview_core::Parameter;

    fn app() -> App {
        App::new(
            Theme::builtin().unwrap(),
            ThemeSource::Builtin,
            KeybindingsConfig::default(),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(&AppKeyEvent::new(code));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);
    }

    #[test]
    fn test_manual_axis_limits_via_menu() {
        let mut app = app();
        app.dispatch(AppAction::PromptAxisLimits);
        type_text(&mut app, "-3,7");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.state().modal, ModalState::None));
        assert_eq!(app.state().x_bounds(), [-3.0, 7.0]);

        app.dispatch(AppAction::ResetAxisLimits);
        assert!(app.state().manual_xlim.is_none());
    }

    #[test]
    fn test_invalid_axis_limits_keep_previous() {
        let mut app = app();
        app.state.apply_axis_limits("-1,1").unwrap();

        app.dispatch(AppAction::PromptAxisLimits);
        // Prefilled with the current limits
        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "5,2");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.state().modal, ModalState::Message(_)));
        assert_eq!(app.state().x_bounds(), [-1.0, 1.0]);

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.state().modal, ModalState::None));
    }

    #[test]
    fn test_typed_parameter_value() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "2.5");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().pdf.params().mean, 2.5);
    }

    #[test]
    fn test_unparseable_entry_is_reported_and_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().pdf.params().mean, 0.0);
        assert!(app.state().error_message.is_some());
    }

    #[test]
    fn test_menu_toggle_from_keyboard() {
        let mut app = app();
        // Open the bar, move to Edit, highlight Range (last item)
        press(&mut app, KeyCode::F(10));
        press(&mut app, KeyCode::Left);
        for _ in 0..6 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.state().overlays.is_shown(Overlay::Range));
        assert_eq!(
            app.state().status_message.as_deref(),
            Some("Range (Min, Max) shown")
        );
        // Quit key is swallowed while the menu is open
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.state().exit);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);
    }

    #[test]
    fn test_reset_key() {
        let mut app = app();
        app.state.set_parameter(Parameter::Skew, 4.0).unwrap();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().pdf.params().skew, 0.0);
    }

    fn click(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_mouse_event(&MouseEvent {
            kind,
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
    }

    /// Cell of the `n`th `[+]` stepper on screen, top to bottom.
    fn plus_stepper(app: &mut App, n: usize) -> (u16, u16) {
        use ratatui::{Terminal, backend::TestBackend};

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut found = Vec::new();
        for y in 0..40 {
            for x in 0..118 {
                let cells: String = (x..x + 3).map(|cx| buffer[(cx, y)].symbol()).collect();
                if cells == "[+]" {
                    found.push((x + 1, y));
                }
            }
        }
        found[n]
    }

    #[test]
    fn test_hold_stops_when_modal_opens() {
        use crossterm::event::MouseButton;

        let mut app = app();
        let (x, y) = plus_stepper(&mut app, 2);

        click(&mut app, MouseEventKind::Down(MouseButton::Left), x, y);
        assert_eq!(app.state().pdf.params().skew, 0.5);
        assert!(app.controls.next_tick_in(Instant::now()).is_some());

        // Edit prompt opens while the button is still down
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.state().modal, ModalState::TextInput(_)));
        assert!(app.controls.next_tick_in(Instant::now()).is_none());

        click(&mut app, MouseEventKind::Up(MouseButton::Left), x, y);
        app.controls
            .tick(Instant::now() + Duration::from_secs(2), &mut app.state);
        assert_eq!(app.state().pdf.params().skew, 0.5);
    }

    #[test]
    fn test_release_under_modal_ends_hold() {
        use crossterm::event::MouseButton;

        let mut app = app();
        let (x, y) = plus_stepper(&mut app, 0);
        click(&mut app, MouseEventKind::Down(MouseButton::Left), x, y);
        // Modal raised by something other than a key, e.g. a theme error
        app.state.modal = ModalState::Message(MessageModal::error("Theme Error", "bad"));

        click(&mut app, MouseEventKind::Up(MouseButton::Left), x, y);
        assert!(app.controls.next_tick_in(Instant::now()).is_none());
        assert!((app.state().pdf.params().mean - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_draws_full_layout() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..120).map(|x| buffer[(x, y)].symbol()).collect() };
        assert!(row(0).contains("X-Axis Range"));
        assert!(row(1).contains("Parameters"));
        assert!(row(39).contains("q: quit"));
    }
}
