//! Mode transitions and pointer dispatch.

use tracing::{debug, trace};

use crate::edge::Pointer;
use crate::host::{ChromeHost, Dock};
use crate::proximity::{self, Transition};
use crate::registry::{ElementName, Registry, resolve_element};
use crate::state::{DisplayMode, ModeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeOptions {
    /// Whether full mode hides the status bar.
    pub hide_status_bar: bool,
    /// Collapse expanded sidebar docks while a mode is active.
    pub collapse_docks: bool,
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            hide_status_bar: true,
            collapse_docks: false,
        }
    }
}

/// Owns the single [`ModeState`] and every transition of it.
///
/// The host is passed into each call rather than owned, so an application can
/// keep its workspace and controller as sibling fields.
#[derive(Debug)]
pub struct ChromeController {
    state: ModeState,
    registry: Registry,
    options: ChromeOptions,
    listener_installed: bool,
    collapsed_docks: Vec<Dock>,
}

impl Default for ChromeController {
    fn default() -> Self {
        Self::new(Registry::default(), ChromeOptions::default())
    }
}

impl ChromeController {
    pub fn new(mut registry: Registry, options: ChromeOptions) -> Self {
        registry.set_full_screen_member(ElementName::StatusBar, options.hide_status_bar);
        Self {
            state: ModeState::new(),
            registry,
            options,
            listener_installed: false,
            collapsed_docks: Vec::new(),
        }
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn listener_installed(&self) -> bool {
        self.listener_installed
    }

    /// Enters full (`zen == false`) or zen mode.
    ///
    /// Already in the requested mode: no-op. In the other sub-mode: full
    /// deactivation first.
    pub fn activate<H: ChromeHost + ?Sized>(&mut self, host: &mut H, zen: bool) {
        if self.state.is_active() {
            if self.state.is_zen() == zen {
                debug!(mode = %self.state.mode(), "activate ignored, mode already active");
                return;
            }
            self.deactivate(host);
        }

        self.state = ModeState::entered(zen);
        let mut hidden = 0usize;
        for element in self.registry.active_set(zen) {
            if let Some(node) = resolve_element(&*host, element) {
                host.set_hidden(node, true);
                hidden += 1;
            }
        }
        host.set_mode_marker(Some(self.state.mode()));
        if self.options.collapse_docks {
            self.collapse_docks(host);
        }
        if !self.listener_installed {
            host.install_pointer_listener();
            self.listener_installed = true;
        }
        debug!(mode = %self.state.mode(), hidden, "chrome mode activated");
    }

    /// Leaves any active mode, restoring every managed element.
    pub fn deactivate<H: ChromeHost + ?Sized>(&mut self, host: &mut H) {
        if !self.state.is_active() {
            debug!("deactivate ignored, no mode active");
            return;
        }
        let previous = self.state.mode();
        for element in self.registry.elements() {
            if let Some(node) = resolve_element(&*host, element) {
                host.set_hidden(node, false);
            }
        }
        host.set_mode_marker(None);
        self.expand_docks(host);
        if self.listener_installed {
            host.remove_pointer_listener();
            self.listener_installed = false;
        }
        self.state = ModeState::new();
        debug!(mode = %previous, "chrome mode deactivated");
    }

    /// Command entry point: leave the active mode, or enter the requested one.
    pub fn toggle<H: ChromeHost + ?Sized>(&mut self, host: &mut H, zen: bool) {
        if self.state.is_active() {
            self.deactivate(host);
        } else {
            self.activate(host, zen);
        }
    }

    /// Startup hook, run once the host layout is ready.
    pub fn activate_from_preference<H: ChromeHost + ?Sized>(
        &mut self,
        host: &mut H,
        mode: DisplayMode,
    ) {
        match mode {
            DisplayMode::Normal => {}
            DisplayMode::Zen => self.toggle(host, true),
            DisplayMode::Full => self.toggle(host, false),
        }
    }

    /// Applies a start-mode change made in settings to the running session.
    pub fn apply_preference_change<H: ChromeHost + ?Sized>(
        &mut self,
        host: &mut H,
        mode: DisplayMode,
    ) {
        match mode {
            DisplayMode::Normal => self.deactivate(host),
            DisplayMode::Zen => self.activate(host, true),
            DisplayMode::Full => self.activate(host, false),
        }
    }

    /// Changes whether full mode hides the status bar, applying it at once
    /// when full mode is active.
    pub fn set_hide_status_bar<H: ChromeHost + ?Sized>(&mut self, host: &mut H, hide: bool) {
        if self.options.hide_status_bar == hide {
            return;
        }
        self.options.hide_status_bar = hide;
        self.registry.set_full_screen_member(ElementName::StatusBar, hide);
        if self.state.is_active() && !self.state.is_zen() {
            if let Some(node) = self.registry.resolve(&*host, ElementName::StatusBar) {
                host.set_hidden(node, hide);
            }
            if !hide && self.state.revealed_element() == Some(ElementName::StatusBar) {
                self.state.clear_reveal();
            }
        }
        debug!(hide, "status bar option changed");
    }

    /// Pointer-move listener body.
    pub fn handle_pointer_move<H: ChromeHost + ?Sized>(&mut self, host: &mut H, pointer: Pointer) {
        if !self.state.is_active() {
            return;
        }
        let Transition { state, commands } =
            proximity::evaluate(pointer, &self.state, &self.registry, &*host);
        for cmd in &commands {
            trace!(
                element = %cmd.element,
                hidden = cmd.hidden,
                x = pointer.x,
                y = pointer.y,
                "proximity"
            );
            host.set_hidden(cmd.node, cmd.hidden);
        }
        self.state = state;
    }

    fn collapse_docks<H: ChromeHost + ?Sized>(&mut self, host: &mut H) {
        let Some(docks) = host.docks() else {
            return;
        };
        for dock in Dock::ALL {
            if !docks.is_collapsed(dock) {
                docks.collapse(dock);
                if !self.collapsed_docks.contains(&dock) {
                    self.collapsed_docks.push(dock);
                }
            }
        }
    }

    fn expand_docks<H: ChromeHost + ?Sized>(&mut self, host: &mut H) {
        if self.collapsed_docks.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.collapsed_docks);
        if let Some(docks) = host.docks() {
            for dock in pending {
                docks.expand(dock);
            }
        }
    }
}
