//! Shared crate-wide constants.

/// Default distance from an anchor edge within which the pointer counts as
/// near. Units are whatever the host measures geometry in.
pub const DEFAULT_EDGE_THRESHOLD: u16 = 20;

/// Edge threshold used by the console workspace, in terminal cells.
pub const CONSOLE_EDGE_THRESHOLD: u16 = 1;

/// Locator selectors for the managed chrome elements.
pub mod selectors {
    pub const RIBBON: &str = ".workspace-ribbon";
    pub const TAB_HEADER: &str = ".mod-root .workspace-tabs .workspace-tab-header-container";
    pub const TITLE_BAR: &str = ".titlebar";
    pub const STATUS_BAR: &str = ".status-bar";
}

/// Marker names the host attaches to its root while a mode is active.
pub mod markers {
    pub const ZEN_MODE: &str = "zen-mode";
    pub const FULL_SCREEN_MODE: &str = "full-screen-mode";
}

pub mod config {
    pub const APP_DIR: &str = "chrome-reveal";
    pub const FILENAME: &str = "settings.json";
}
