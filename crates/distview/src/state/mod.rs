mod app_state;
mod modal;
mod overlays;
mod slider;

pub use app_state::*;
pub use modal::*;
pub use overlays::*;
pub use slider::*;
