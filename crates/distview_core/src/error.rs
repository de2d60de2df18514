use std::fmt;

/// Errors raised while reading configuration or user-supplied text.
///
/// These are caught where the text or file was read. They never reach the
/// distribution model or the menu state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Theme file could not be read or parsed
    ThemeFile { path: String, reason: String },
    /// A required `style.key` pair is absent from the theme
    MissingThemeKey { style: String, key: String },
    /// Colour string is neither `grayN` nor `#rrggbb`
    InvalidColor(String),
    /// Menu item kind and its bindings disagree
    InvalidMenuItem {
        menu: String,
        item: String,
        reason: &'static str,
    },
    /// Two items in one menu share a label
    DuplicateMenuItem { menu: String, item: String },
    /// Manual axis-limit text is malformed or empty
    InvalidAxisLimits { input: String, reason: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::ThemeFile { path, reason } => {
                write!(f, "cannot load theme {path}: {reason}")
            }
            ConfigurationError::MissingThemeKey { style, key } => {
                write!(f, "theme is missing {style}.{key}")
            }
            ConfigurationError::InvalidColor(value) => write!(
                f,
                "invalid colour {value:?}: expected grayN or six-digit hex #RRGGBB (short #RGB is not accepted)"
            ),
            ConfigurationError::InvalidMenuItem { menu, item, reason } => {
                write!(f, "invalid item {item:?} in menu {menu:?}: {reason}")
            }
            ConfigurationError::DuplicateMenuItem { menu, item } => {
                write!(f, "menu {menu:?} already has an item labelled {item:?}")
            }
            ConfigurationError::InvalidAxisLimits { input, reason } => {
                write!(f, "invalid axis limits {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// A shape parameter outside the domain the density is defined on.
#[derive(Debug, Clone, PartialEq)]
pub struct PreconditionViolation {
    pub parameter: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl PreconditionViolation {
    pub(crate) fn new(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self {
            parameter,
            value,
            reason,
        }
    }
}

impl fmt::Display for PreconditionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}: {}", self.parameter, self.value, self.reason)
    }
}

impl std::error::Error for PreconditionViolation {}
