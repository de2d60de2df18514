//! Parameter sliders with steppers, free-text entry and press-and-hold.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use distview_core::Parameter;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::config::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction, ModalState, StepDirection, TextInputModal};
use crate::util::hold::HoldRepeat;
use crate::util::styles::{focused_block, panel_style};

/// Rows used by one slider: label, track, value, spacer.
const SLIDER_ROWS: u16 = 4;
const STEPPER_WIDTH: u16 = 3;

/// Where one slider's hit targets were last drawn.
#[derive(Debug, Clone, Copy)]
struct SliderLayout {
    parameter: Parameter,
    minus: Rect,
    track: Rect,
    plus: Rect,
    value: Rect,
}

#[derive(Default)]
pub struct ControlsPanel {
    layouts: Vec<SliderLayout>,
    hold: HoldRepeat<(Parameter, StepDirection)>,
    dragging: Option<Parameter>,
}

impl ControlsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long until the held stepper fires again.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.hold.time_until_next(now)
    }

    /// Stop any press-and-hold repeat or track drag.
    pub fn release(&mut self) {
        self.hold.stop();
        self.dragging = None;
    }

    /// Run any repeats that are due.
    pub fn tick(&mut self, now: Instant, state: &mut AppState) {
        if let Some(((parameter, direction), count)) = self.hold.poll(now) {
            for _ in 0..count {
                step(state, parameter, direction);
            }
        }
    }

    fn layout_at(&self, position: Position) -> Option<(SliderLayout, Target)> {
        self.layouts.iter().find_map(|layout| {
            let target = if layout.minus.contains(position) {
                Target::Step(StepDirection::Decrease)
            } else if layout.plus.contains(position) {
                Target::Step(StepDirection::Increase)
            } else if layout.track.contains(position) {
                Target::Track
            } else if layout.value.contains(position) {
                Target::Value
            } else {
                return None;
            };
            Some((*layout, target))
        })
    }

    fn render_slider(&mut self, frame: &mut Frame, area: Rect, state: &AppState, index: usize) {
        let slider = &state.sliders[index];
        let theme = &state.theme;
        let focused = state.focused_slider == index;

        let label_row = Rect::new(area.x, area.y, area.width, 1);
        let track_row = Rect::new(area.x, area.y + 1, area.width, 1);
        let value_row = Rect::new(area.x, area.y + 2, area.width, 1);

        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            panel_style(theme).add_modifier(Modifier::BOLD)
        } else {
            panel_style(theme)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{marker}{}", slider.label()),
                label_style,
            ))),
            label_row,
        );

        let minus = Rect::new(track_row.x, track_row.y, STEPPER_WIDTH, 1).intersection(track_row);
        let plus = Rect::new(
            track_row.right().saturating_sub(STEPPER_WIDTH),
            track_row.y,
            STEPPER_WIDTH,
            1,
        )
        .intersection(track_row);
        let track = Rect::new(
            minus.right() + 1,
            track_row.y,
            track_row.width.saturating_sub(2 * STEPPER_WIDTH + 2),
            1,
        );

        let filled = ((slider.fraction() * track.width as f64).round() as u16).min(track.width);
        let accent = Style::default().fg(theme.accent.into()).bg(theme.panel.into());
        let button = Style::default()
            .fg(theme.text.into())
            .bg(theme.accent.into())
            .add_modifier(Modifier::BOLD);
        let track_line = Line::from(vec![
            Span::styled("[-]", button),
            Span::styled(" ", panel_style(theme)),
            Span::styled("━".repeat(filled as usize), accent),
            Span::styled(
                "─".repeat(track.width.saturating_sub(filled) as usize),
                panel_style(theme),
            ),
            Span::styled(" ", panel_style(theme)),
            Span::styled("[+]", button),
        ]);
        frame.render_widget(Paragraph::new(track_line), track_row);

        let text = slider.display();
        let value_width = (text.chars().count() as u16 + 2).min(value_row.width);
        let value = Rect::new(
            value_row.x + value_row.width.saturating_sub(value_width) / 2,
            value_row.y,
            value_width,
            1,
        );
        let value_style = if focused {
            Style::default()
                .fg(theme.accent.into())
                .bg(theme.panel.into())
                .add_modifier(Modifier::BOLD)
        } else {
            panel_style(theme)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {text} "), value_style))),
            value,
        );

        self.layouts.push(SliderLayout {
            parameter: slider.parameter,
            minus,
            track,
            plus,
            value,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    Step(StepDirection),
    Track,
    Value,
}

fn step(state: &mut AppState, parameter: Parameter, direction: StepDirection) {
    if let Err(e) = state.step_parameter(parameter, direction) {
        state.set_error(e.to_string());
    }
}

fn set_from_track(state: &mut AppState, parameter: Parameter, track: Rect, column: u16) {
    let span = track.width.saturating_sub(1).max(1) as f64;
    let fraction = column.saturating_sub(track.x) as f64 / span;
    let value = state.slider(parameter).value_at_fraction(fraction);
    if let Err(e) = state.set_parameter(parameter, value) {
        state.set_error(e.to_string());
    }
}

/// Prompt for a typed value for `parameter`.
pub fn open_edit_modal(state: &mut AppState, parameter: Parameter) {
    let slider = state.slider(parameter);
    let prompt = format!(
        "{} ({} to {}):",
        slider.label(),
        slider.min,
        slider.max
    );
    let modal = TextInputModal::new(
        &format!("Edit {}", slider.label()),
        &prompt,
        &slider.display(),
        ModalAction::EditParameter(parameter),
    );
    state.modal = ModalState::TextInput(modal);
}

impl Component for ControlsPanel {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let bindings = &state.keybindings.controls;
        let parameter = state.focused_parameter();

        if KeybindingsConfig::matches(key, &bindings.next) {
            state.focus_next();
        } else if KeybindingsConfig::matches(key, &bindings.prev) {
            state.focus_prev();
        } else if KeybindingsConfig::matches(key, &bindings.increase) {
            step(state, parameter, StepDirection::Increase);
        } else if KeybindingsConfig::matches(key, &bindings.decrease) {
            step(state, parameter, StepDirection::Decrease);
        } else if KeybindingsConfig::matches(key, &bindings.edit) {
            open_edit_modal(state, parameter);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, state: &mut AppState) -> EventResult {
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Any new press cancels a running repeat
                self.release();

                let Some((layout, target)) = self.layout_at(position) else {
                    return EventResult::NotHandled;
                };
                if let Some(index) = state
                    .sliders
                    .iter()
                    .position(|s| s.parameter == layout.parameter)
                {
                    state.focused_slider = index;
                }

                match target {
                    Target::Step(direction) => {
                        step(state, layout.parameter, direction);
                        self.hold
                            .start((layout.parameter, direction), Instant::now());
                    }
                    Target::Track => {
                        set_from_track(state, layout.parameter, layout.track, mouse.column);
                        self.dragging = Some(layout.parameter);
                    }
                    Target::Value => open_edit_modal(state, layout.parameter),
                }
                EventResult::Handled
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(parameter) = self.dragging else {
                    return EventResult::NotHandled;
                };
                if let Some(layout) = self.layouts.iter().find(|l| l.parameter == parameter) {
                    set_from_track(state, parameter, layout.track, mouse.column);
                }
                EventResult::Handled
            }
            MouseEventKind::Up(_) => {
                let was_active = self.hold.is_active() || self.dragging.is_some();
                self.release();
                if was_active {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.layouts.clear();

        let block = focused_block(" Parameters ", true, &state.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let inner = Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        );
        for index in 0..state.sliders.len() {
            let y = inner.y + index as u16 * SLIDER_ROWS;
            if y + 3 > inner.bottom() {
                break;
            }
            let slot = Rect::new(inner.x, y, inner.width, SLIDER_ROWS.min(inner.bottom() - y));
            self.render_slider(frame, slot, state, index);
        }
    }
}
