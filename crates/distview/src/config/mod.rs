//! Configuration read at startup or typed by the user: theme files, colour
//! strings, keybindings and manual axis limits.
//!
//! Every failure here is a [`ConfigurationError`](distview_core::ConfigurationError)
//! reported at the point the text was read.

pub mod axis;
pub mod color;
pub mod keybindings;
pub mod theme;

pub use axis::AxisLimits;
pub use color::Rgb;
pub use keybindings::KeybindingsConfig;
pub use theme::{Theme, ThemeSource};
