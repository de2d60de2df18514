//! Tests for the dropdown menu bar
//!
//! These tests verify that:
//! - At most one menu is open after any sequence of header activations
//! - Item descriptors are validated when a menu is added
//! - Toggle items write through to flags shared with the host

use crate::error::ConfigurationError;
use crate::geometry::{Bounds, Point};
use crate::menu::{ItemDescriptor, ItemKind, MenuBar, MenuState, SharedFlag};

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Open,
    Redraw,
}

fn window() -> Bounds {
    Bounds::new(0, 0, 120, 40)
}

fn bar(menu_count: usize) -> MenuBar<Action> {
    let mut bar = MenuBar::new();
    for i in 0..menu_count {
        bar.add_menu(
            &format!("Menu{i}"),
            [("Open", ItemDescriptor::command(Action::Open))],
        )
        .unwrap();
    }
    bar.layout(Bounds::new(0, 0, 120, 1));
    bar
}

fn open_count(bar: &MenuBar<Action>) -> usize {
    bar.menus().iter().filter(|m| m.is_open()).count()
}

/// Test exclusivity over a long, irregular sequence of open requests
#[test]
fn test_at_most_one_menu_open() {
    let mut bar = bar(5);
    // Deterministic pseudo-random walk over menu indices
    let mut seed: u32 = 7;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let index = (seed >> 16) as usize % 5;
        let was_open = bar.menus()[index].is_open();

        let now_open = bar.toggle_open(index, window());

        assert_eq!(now_open, !was_open);
        assert!(open_count(&bar) <= 1);
        if now_open {
            assert_eq!(bar.open_index(), Some(index));
        }
    }
}

/// Test that opening a second menu closes the first
#[test]
fn test_opening_sibling_closes_open_menu() {
    let mut bar = bar(3);
    bar.toggle_open(0, window());
    bar.toggle_open(2, window());

    assert_eq!(bar.menus()[0].state(), MenuState::Closed);
    assert!(bar.menus()[2].is_open());

    bar.close_all();
    assert_eq!(open_count(&bar), 0);
}

/// Test that each popup opens under its own header
#[test]
fn test_popup_tracks_header() {
    let mut bar = bar(3);
    for index in 0..3 {
        bar.toggle_open(index, window());
        let header = bar.menus()[index].header();
        assert_eq!(
            bar.menus()[index].state(),
            MenuState::Open {
                popup: Point::new(header.x, header.bottom())
            }
        );
    }
}

/// Test that a toggle without a bound flag is rejected
#[test]
fn test_toggle_without_state_fails() {
    let mut bar: MenuBar<Action> = MenuBar::new();
    let result = bar.add_menu(
        "View",
        [("Grid", ItemDescriptor::new(ItemKind::Toggle).with_action(Action::Redraw))],
    );
    assert!(matches!(
        result,
        Err(ConfigurationError::InvalidMenuItem { ref item, .. }) if item == "Grid"
    ));
    assert!(bar.is_empty());
}

/// Test that a command carrying a flag is rejected
#[test]
fn test_command_with_state_fails() {
    let mut bar: MenuBar<Action> = MenuBar::new();
    let result = bar.add_menu(
        "File",
        [
            ("Open", ItemDescriptor::command(Action::Open)),
            (
                "Broken",
                ItemDescriptor::command(Action::Open).with_state(SharedFlag::new(false)),
            ),
        ],
    );
    assert!(result.is_err());
    assert!(bar.is_empty());
}

/// Test that duplicate labels within one menu are rejected
#[test]
fn test_duplicate_labels_fail() {
    let mut bar: MenuBar<Action> = MenuBar::new();
    let result = bar.add_menu(
        "File",
        [
            ("Open", ItemDescriptor::command(Action::Open)),
            ("Open", ItemDescriptor::command(Action::Redraw)),
        ],
    );
    assert_eq!(
        result,
        Err(ConfigurationError::DuplicateMenuItem {
            menu: "File".into(),
            item: "Open".into()
        })
    );
}

/// Test that a valid mix of commands and toggles is accepted in order
#[test]
fn test_valid_mix_succeeds() {
    let grid = SharedFlag::new(true);
    let mut bar: MenuBar<Action> = MenuBar::new();
    bar.add_menu(
        "View",
        [
            ("Grid", ItemDescriptor::toggle(grid.clone()).with_action(Action::Redraw)),
            ("Legend", ItemDescriptor::toggle(SharedFlag::new(false))),
            ("Open", ItemDescriptor::command(Action::Open)),
        ],
    )
    .unwrap();

    let labels: Vec<&str> = bar.menus()[0].items().iter().map(|i| i.label()).collect();
    assert_eq!(labels, ["Grid", "Legend", "Open"]);
    assert_eq!(bar.menus()[0].items()[0].checked(), Some(true));
    assert_eq!(bar.menus()[0].items()[2].checked(), None);
}

/// Test that two items bound to one flag stay in sync
#[test]
fn test_shared_flag_across_menus() {
    let mean_line = SharedFlag::new(true);
    let mut bar: MenuBar<Action> = MenuBar::new();
    bar.add_menu("View", [("Show Mean Line", ItemDescriptor::toggle(mean_line.clone()))])
        .unwrap();
    bar.add_menu("Edit", [("Mean", ItemDescriptor::toggle(mean_line.clone()))])
        .unwrap();

    assert_eq!(bar.activate(0, 0), None);
    assert!(!mean_line.get());
    assert_eq!(bar.menus()[1].items()[0].checked(), Some(false));

    bar.activate(1, 0);
    assert!(mean_line.get());
}

/// Test that commands produce their action on every activation
#[test]
fn test_command_repeats_action() {
    let mut bar = bar(1);
    for _ in 0..3 {
        bar.toggle_open(0, window());
        assert_eq!(bar.activate(0, 0), Some(Action::Open));
    }
}
