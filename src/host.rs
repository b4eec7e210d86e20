//! Collaborator interfaces the controller writes through.

use crate::registry::LayoutView;
use crate::state::DisplayMode;

/// Write access to the host UI.
///
/// `install_pointer_listener` / `remove_pointer_listener` need not be
/// idempotent; the controller tracks installation itself and calls each at
/// most once per activation.
pub trait ChromeHost: LayoutView {
    fn set_hidden(&mut self, node: Self::Node, hidden: bool);

    /// Root-level marker for the active mode; `None` clears it.
    fn set_mode_marker(&mut self, _mode: Option<DisplayMode>) {}

    fn install_pointer_listener(&mut self);

    fn remove_pointer_listener(&mut self);

    /// Sidebar docks, when the host has any.
    fn docks(&mut self) -> Option<&mut dyn DockHost> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dock {
    Left,
    Right,
}

impl Dock {
    pub const ALL: [Dock; 2] = [Dock::Left, Dock::Right];
}

pub trait DockHost {
    fn collapse(&mut self, dock: Dock);
    fn expand(&mut self, dock: Dock);
    fn is_collapsed(&self, dock: Dock) -> bool;
}
