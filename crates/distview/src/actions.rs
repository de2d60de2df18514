//! Actions produced by menu items and dispatched by the app.

use crate::state::Overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Open the "min,max" prompt for manual x limits
    PromptAxisLimits,
    ResetAxisLimits,
    /// An overlay flag was flipped; the flag itself already holds the new value
    OverlayChanged(Overlay),
    ReloadTheme,
    ResetParameters,
}
