//! Theme loading.
//!
//! Theme files are keyed by widget style name, each style mapping colour
//! keys to a `[light, dark]` pair. Only the dark member is used. Entries
//! that are not colour pairs (radii, fonts, ...) are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use distview_core::ConfigurationError;
use serde::Deserialize;
use serde::de::IgnoredAny;

use super::color::Rgb;

/// Theme shipped with the binary.
pub const BUILTIN_THEME: &str = include_str!("../../assets/themes/green.json");

const DARK: usize = 1;

/// Resolved colours handed to every rendering component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Window background
    pub background: Rgb,
    /// Foreground text
    pub text: Rgb,
    /// Secondary panels and the plot face
    pub panel: Rgb,
    /// Curve, slider fill and focus accents
    pub accent: Rgb,
    /// Hovered or highlighted menu entries
    pub highlight: Rgb,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStyle {
    Entries(BTreeMap<String, RawEntry>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Pair(Vec<String>),
    Other(IgnoredAny),
}

type RawTheme = BTreeMap<String, RawStyle>;

impl Theme {
    /// The embedded green theme.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_json(BUILTIN_THEME, "<builtin>")
    }

    pub fn from_json(content: &str, origin: &str) -> Result<Self, ConfigurationError> {
        let raw: RawTheme =
            serde_json::from_str(content).map_err(|e| ConfigurationError::ThemeFile {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_raw(&raw)
    }

    pub fn from_yaml(content: &str, origin: &str) -> Result<Self, ConfigurationError> {
        let raw: RawTheme =
            serde_saphyr::from_str(content).map_err(|e| ConfigurationError::ThemeFile {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_raw(&raw)
    }

    /// Read a theme file, choosing the parser from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let origin = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigurationError::ThemeFile {
                path: origin.clone(),
                reason: e.to_string(),
            })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(&content, &origin),
            _ => Self::from_json(&content, &origin),
        }
    }

    fn from_raw(raw: &RawTheme) -> Result<Self, ConfigurationError> {
        let accent = dark_color(raw, "CTkButton", "fg_color")?;
        let highlight = match dark_color(raw, "CTkButton", "hover_color") {
            Err(ConfigurationError::MissingThemeKey { .. }) => accent,
            other => other?,
        };

        Ok(Self {
            background: dark_color(raw, "CTk", "fg_color")?,
            text: dark_color(raw, "CTkButton", "text_color")?,
            panel: dark_color(raw, "CTkFrame", "fg_color")?,
            accent,
            highlight,
        })
    }
}

fn dark_color(raw: &RawTheme, style: &str, key: &str) -> Result<Rgb, ConfigurationError> {
    let missing = || ConfigurationError::MissingThemeKey {
        style: style.to_string(),
        key: key.to_string(),
    };

    let Some(RawStyle::Entries(entries)) = raw.get(style) else {
        return Err(missing());
    };
    match entries.get(key) {
        Some(RawEntry::Pair(pair)) => pair
            .get(DARK)
            .ok_or_else(|| ConfigurationError::InvalidColor(format!("{style}.{key}: {pair:?}")))?
            .parse(),
        Some(RawEntry::Other(_)) => Err(ConfigurationError::InvalidColor(format!(
            "{style}.{key} is not a [light, dark] pair"
        ))),
        None => Err(missing()),
    }
}

/// Where the active theme came from, so it can be read again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    Builtin,
    File(PathBuf),
}

impl ThemeSource {
    /// Pick the theme file: an explicit path, else `theme.json`/`theme.yaml`
    /// in the data directory, else the built-in theme.
    pub fn resolve(explicit: Option<PathBuf>, data_dir: &Path) -> Self {
        if let Some(path) = explicit {
            return ThemeSource::File(path);
        }
        ["theme.json", "theme.yaml", "theme.yml"]
            .iter()
            .map(|name| data_dir.join(name))
            .find(|path| path.exists())
            .map(ThemeSource::File)
            .unwrap_or(ThemeSource::Builtin)
    }

    pub fn load(&self) -> Result<Theme, ConfigurationError> {
        match self {
            ThemeSource::Builtin => Theme::builtin(),
            ThemeSource::File(path) => Theme::load(path),
        }
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSource::Builtin => write!(f, "built-in theme"),
            ThemeSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
