//! Keybindings configuration data structures.
//!
//! Defines the customizable keyboard shortcuts read from
//! `~/.distview/keybindings.yaml`. Missing sections fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Work everywhere outside modals
    pub global: GlobalBindings,
    /// Parameter slider panel
    pub controls: ControlBindings,
    /// Active while a dropdown is open
    pub menu: MenuBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub open_menu: Vec<String>,
    pub reset: Vec<String>,
    pub cancel: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            open_menu: vec!["f10".into(), "m".into()],
            reset: vec!["r".into()],
            cancel: vec!["esc".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlBindings {
    pub next: Vec<String>,
    pub prev: Vec<String>,
    pub increase: Vec<String>,
    pub decrease: Vec<String>,
    pub edit: Vec<String>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            next: vec!["j".into(), "down".into(), "tab".into()],
            prev: vec!["k".into(), "up".into(), "shift+tab".into()],
            increase: vec!["l".into(), "right".into(), "+".into()],
            decrease: vec!["h".into(), "left".into(), "-".into()],
            edit: vec!["e".into(), "enter".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuBindings {
    pub next_menu: Vec<String>,
    pub prev_menu: Vec<String>,
    pub down: Vec<String>,
    pub up: Vec<String>,
    pub activate: Vec<String>,
    pub close: Vec<String>,
}

impl Default for MenuBindings {
    fn default() -> Self {
        Self {
            next_menu: vec!["right".into(), "l".into()],
            prev_menu: vec!["left".into(), "h".into()],
            down: vec!["down".into(), "j".into()],
            up: vec!["up".into(), "k".into()],
            activate: vec!["enter".into(), " ".into()],
            close: vec!["esc".into(), "f10".into()],
        }
    }
}

impl KeybindingsConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings, falling back to defaults when the file is absent or malformed.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_saphyr::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed keybindings");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read keybindings");
                Self::default()
            }
        }
    }
}
