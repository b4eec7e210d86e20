//! Edge-proximity auto-hide for workspace chrome.
//!
//! While full-screen or zen mode is active, a [`ChromeController`] hides the
//! managed chrome elements and reveals each one when the pointer approaches
//! the viewport edge it is anchored to. The decision logic lives in
//! [`proximity::evaluate`] and talks to the host only through the
//! [`LayoutView`] and [`ChromeHost`] traits; [`Workspace`] is the terminal
//! host shipped with the crate.

pub mod app;
pub mod constants;
pub mod controller;
pub mod drivers;
pub mod edge;
pub mod event_loop;
pub mod host;
pub mod keybindings;
pub mod log_buffer;
pub mod proximity;
pub mod registry;
pub mod settings;
pub mod state;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod workspace;

pub use controller::{ChromeController, ChromeOptions};
pub use edge::{Edge, Pointer};
pub use host::{ChromeHost, Dock, DockHost};
pub use proximity::{Transition, VisibilityCommand};
pub use registry::{ElementName, LayoutView, Locator, ManagedElement, ModeSets, Registry};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use state::{DisplayMode, ModeState, Reveal};
pub use workspace::{ChromeNode, Workspace, WorkspaceLayout};
