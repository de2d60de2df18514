pub mod hold;
pub mod styles;

use distview_core::Bounds;
use ratatui::layout::Rect;

/// Terminal area as core geometry.
pub fn to_bounds(rect: Rect) -> Bounds {
    Bounds::new(rect.x, rect.y, rect.width, rect.height)
}

/// Core geometry as a terminal area, clipped to `area`.
pub fn to_rect(bounds: Bounds, area: Rect) -> Rect {
    Rect::new(bounds.x, bounds.y, bounds.width, bounds.height).intersection(area)
}
