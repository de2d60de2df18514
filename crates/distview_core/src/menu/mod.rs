//! Dropdown menu state machine, independent of any rendering toolkit.
//!
//! A [`MenuBar`] holds [`Menu`]s, each with a header and an ordered list of
//! items. Items are either commands or toggles bound to a [`SharedFlag`]
//! owned by the host. Opening any menu first closes every other one.

mod bar;
mod item;

pub use bar::{Menu, MenuBar, MenuState};
pub use item::{ItemDescriptor, ItemKind, ItemSpec, MenuItem, SharedFlag};
