//! Terminal distribution viewer.
//!
//! Four sliders shape an editable density from `distview_core`; the plot
//! redraws on every change. A dropdown menu bar switches statistic overlays
//! on and off, sets manual x-axis limits and reloads the colour theme.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod modals;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
