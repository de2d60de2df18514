use std::cell::Cell;
use std::rc::Rc;

use crate::error::ConfigurationError;

/// A boolean owned by the host application and flipped by toggle items.
///
/// Clones share one cell. The menu writes it only while handling an
/// activation, the host reads it whenever it redraws.
#[derive(Debug, Clone, Default)]
pub struct SharedFlag(Rc<Cell<bool>>);

impl SharedFlag {
    pub fn new(value: bool) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, value: bool) {
        self.0.set(value);
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        let value = !self.0.get();
        self.0.set(value);
        value
    }
}

/// The two kinds of menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Command,
    Toggle,
}

/// Unvalidated description of a menu item, as handed to [`MenuBar::add_menu`].
///
/// [`MenuBar::add_menu`]: super::MenuBar::add_menu
#[derive(Debug, Clone)]
pub struct ItemDescriptor<A> {
    pub kind: ItemKind,
    pub state: Option<SharedFlag>,
    pub action: Option<A>,
}

impl<A> ItemDescriptor<A> {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            state: None,
            action: None,
        }
    }

    pub fn command(action: A) -> Self {
        Self::new(ItemKind::Command).with_action(action)
    }

    pub fn toggle(state: SharedFlag) -> Self {
        Self::new(ItemKind::Toggle).with_state(state)
    }

    pub fn with_state(mut self, state: SharedFlag) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    pub(crate) fn validate(self, menu: &str, label: &str) -> Result<ItemSpec<A>, ConfigurationError> {
        let invalid = |reason| ConfigurationError::InvalidMenuItem {
            menu: menu.to_string(),
            item: label.to_string(),
            reason,
        };

        match (self.kind, self.state, self.action) {
            (ItemKind::Command, Some(_), _) => {
                Err(invalid("command items cannot bind a toggle state"))
            }
            (ItemKind::Command, None, None) => Err(invalid("command items need an action")),
            (ItemKind::Command, None, Some(action)) => Ok(ItemSpec::Command { action }),
            (ItemKind::Toggle, None, _) => Err(invalid("toggle items need a bound state")),
            (ItemKind::Toggle, Some(state), on_change) => Ok(ItemSpec::Toggle { state, on_change }),
        }
    }
}

/// A validated menu item.
#[derive(Debug, Clone)]
pub enum ItemSpec<A> {
    /// Produces its action on every activation
    Command { action: A },
    /// Flips `state`, then produces `on_change` if present
    Toggle {
        state: SharedFlag,
        on_change: Option<A>,
    },
}

/// A labelled entry in a menu's item panel.
#[derive(Debug, Clone)]
pub struct MenuItem<A> {
    label: String,
    spec: ItemSpec<A>,
}

impl<A: Clone> MenuItem<A> {
    pub(crate) fn new(label: String, spec: ItemSpec<A>) -> Self {
        Self { label, spec }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ItemKind {
        match self.spec {
            ItemSpec::Command { .. } => ItemKind::Command,
            ItemSpec::Toggle { .. } => ItemKind::Toggle,
        }
    }

    /// Current state of a toggle item, `None` for commands.
    pub fn checked(&self) -> Option<bool> {
        match &self.spec {
            ItemSpec::Command { .. } => None,
            ItemSpec::Toggle { state, .. } => Some(state.get()),
        }
    }

    /// Run the item and return the action the host should perform.
    ///
    /// A toggle flips its state before the on-change action is returned.
    pub fn activate(&self) -> Option<A> {
        match &self.spec {
            ItemSpec::Command { action } => Some(action.clone()),
            ItemSpec::Toggle { state, on_change } => {
                state.toggle();
                on_change.clone()
            }
        }
    }
}
