use std::collections::HashSet;

use crate::error::ConfigurationError;
use crate::geometry::{Bounds, Point};

use super::item::{ItemDescriptor, ItemKind, MenuItem};

/// Rows between a header's bottom edge and its popup. On a cell grid the
/// panel sits directly under the header row.
const POPUP_OFFSET_Y: u16 = 0;

/// Columns reserved in front of every item label for the `[x] ` indicator.
const INDICATOR_WIDTH: u16 = 4;

/// Whether a menu's item panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    /// Open with the panel's top-left corner relative to the top-level window
    Open { popup: Point },
}

/// One header in the bar and its dropdown panel.
#[derive(Debug, Clone)]
pub struct Menu<A> {
    label: String,
    items: Vec<MenuItem<A>>,
    header: Bounds,
    state: MenuState,
    highlighted: usize,
}

impl<A: Clone> Menu<A> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    /// Where the header was last laid out, in absolute cells.
    pub fn header(&self) -> Bounds {
        self.header
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    /// Index of the keyboard-highlighted item.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Panel size including a one-cell border.
    pub fn panel_size(&self) -> (u16, u16) {
        let widest = self
            .items
            .iter()
            .map(|item| item.label().chars().count() as u16)
            .max()
            .unwrap_or(0);
        (widest + INDICATOR_WIDTH + 2, self.items.len() as u16 + 2)
    }

    /// Absolute bounds of the open panel inside `window`.
    pub fn panel_bounds(&self, window: Bounds) -> Option<Bounds> {
        match self.state {
            MenuState::Closed => None,
            MenuState::Open { popup } => {
                let (width, height) = self.panel_size();
                Some(Bounds::new(
                    window.x.saturating_add(popup.x),
                    window.y.saturating_add(popup.y),
                    width,
                    height,
                ))
            }
        }
    }

    /// Hide the panel.
    pub fn hide(&mut self) {
        self.state = MenuState::Closed;
    }

    fn show_at(&mut self, popup: Point) {
        self.highlighted = 0;
        self.state = MenuState::Open { popup };
    }

    fn move_highlight(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % len
        } else {
            (self.highlighted + len - 1) % len
        };
    }
}

/// Where a popup opens: the header's bottom-left corner, relative to the
/// top-level window, pushed down by `offset_y`. A panel that would run past
/// the window's right edge is shifted left until it fits.
fn popup_origin(header: Bounds, window: Bounds, offset_y: u16, panel_width: u16) -> Point {
    let relative = window.relative(header.bottom_left());
    let x = relative.x.min(window.width.saturating_sub(panel_width));
    Point::new(x, relative.y.saturating_add(offset_y))
}

/// A row of dropdown menus where at most one panel is open at a time.
///
/// The action type `A` is what command items produce and what toggle items
/// produce after flipping their state. The host dispatches it.
#[derive(Debug, Clone)]
pub struct MenuBar<A> {
    menus: Vec<Menu<A>>,
}

impl<A: Clone> Default for MenuBar<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> MenuBar<A> {
    pub fn new() -> Self {
        Self { menus: Vec::new() }
    }

    /// Append a menu built from `(label, descriptor)` pairs in display order.
    ///
    /// Every descriptor is validated first; on error nothing is appended.
    pub fn add_menu<L, I>(&mut self, label: &str, items: I) -> Result<(), ConfigurationError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, ItemDescriptor<A>)>,
    {
        let mut seen = HashSet::new();
        let mut built = Vec::new();

        for (item_label, descriptor) in items {
            let item_label: String = item_label.into();
            if !seen.insert(item_label.clone()) {
                return Err(ConfigurationError::DuplicateMenuItem {
                    menu: label.to_string(),
                    item: item_label,
                });
            }
            let spec = descriptor.validate(label, &item_label)?;
            built.push(MenuItem::new(item_label, spec));
        }

        self.menus.push(Menu {
            label: label.to_string(),
            items: built,
            header: Bounds::default(),
            state: MenuState::Closed,
            highlighted: 0,
        });
        Ok(())
    }

    pub fn menus(&self) -> &[Menu<A>] {
        &self.menus
    }

    pub fn menu(&self, index: usize) -> Option<&Menu<A>> {
        self.menus.get(index)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Place the headers left to right inside `bar`, one cell apart.
    ///
    /// Each header is its label padded by a space on both sides.
    pub fn layout(&mut self, bar: Bounds) {
        let mut x = bar.x.saturating_add(1);
        for menu in &mut self.menus {
            let width = menu.label.chars().count() as u16 + 2;
            menu.header = Bounds::new(x, bar.y, width, bar.height.max(1));
            x = x.saturating_add(width + 1);
        }
    }

    /// Close every panel.
    pub fn close_all(&mut self) {
        for menu in &mut self.menus {
            menu.hide();
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.menus.iter().position(Menu::is_open)
    }

    /// Activate the header of menu `index`.
    ///
    /// A closed menu closes its siblings and opens below its header; an open
    /// menu closes. Returns whether the menu is open afterwards.
    pub fn toggle_open(&mut self, index: usize, window: Bounds) -> bool {
        let Some(menu) = self.menus.get(index) else {
            return false;
        };
        if menu.is_open() {
            self.menus[index].hide();
            return false;
        }

        self.close_all();
        let menu = &mut self.menus[index];
        let (panel_width, _) = menu.panel_size();
        let popup = popup_origin(menu.header, window, POPUP_OFFSET_Y, panel_width);
        menu.show_at(popup);
        true
    }

    /// Open the neighbour of the open menu, wrapping around. With nothing open
    /// the first menu opens.
    pub fn open_adjacent(&mut self, forward: bool, window: Bounds) {
        let len = self.menus.len();
        if len == 0 {
            return;
        }
        let next = match self.open_index() {
            Some(current) if forward => (current + 1) % len,
            Some(current) => (current + len - 1) % len,
            None => 0,
        };
        self.toggle_open(next, window);
    }

    pub fn highlight_next(&mut self) {
        if let Some(index) = self.open_index() {
            self.menus[index].move_highlight(true);
        }
    }

    pub fn highlight_prev(&mut self) {
        if let Some(index) = self.open_index() {
            self.menus[index].move_highlight(false);
        }
    }

    /// Activate item `item` of menu `menu`.
    ///
    /// Commands close the bar; toggles leave their panel open so several
    /// flags can be flipped in a row.
    pub fn activate(&mut self, menu: usize, item: usize) -> Option<A> {
        let target = self.menus.get(menu)?.items.get(item)?;
        let kind = target.kind();
        let action = target.activate();

        self.menus[menu].highlighted = item;
        if kind == ItemKind::Command {
            self.close_all();
        }
        action
    }

    pub fn activate_highlighted(&mut self) -> Option<A> {
        let index = self.open_index()?;
        let item = self.menus[index].highlighted;
        self.activate(index, item)
    }

    /// Menu whose header contains `point`.
    pub fn header_at(&self, point: Point) -> Option<usize> {
        self.menus.iter().position(|m| m.header.contains(point))
    }

    /// `(menu, item)` under `point` inside the open panel.
    pub fn item_at(&self, point: Point, window: Bounds) -> Option<(usize, usize)> {
        let index = self.open_index()?;
        let panel = self.menus[index].panel_bounds(window)?;
        if !panel.contains(point) {
            return None;
        }
        // Skip the top border row
        let row = point.y.checked_sub(panel.y + 1)? as usize;
        (row < self.menus[index].items.len()).then_some((index, row))
    }

    /// True when `point` is on a header or inside the open panel.
    pub fn contains(&self, point: Point, window: Bounds) -> bool {
        self.header_at(point).is_some()
            || self
                .open_index()
                .and_then(|i| self.menus[i].panel_bounds(window))
                .is_some_and(|panel| panel.contains(point))
    }
}
