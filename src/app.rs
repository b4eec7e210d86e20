//! Glue between terminal input, the chrome controller and persisted settings.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind, MouseEventKind};
use tracing::{info, warn};

use crate::controller::ChromeController;
use crate::drivers::InputDriver;
use crate::drivers::console::ConsoleOutputDriver;
use crate::edge::Pointer;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::keybindings::{Action, KeyBindings};
use crate::log_buffer::LogHandle;
use crate::settings::{Settings, SettingsStore};
use crate::state::DisplayMode;
use crate::ui::{UiFrame, rect};
use crate::workspace::Workspace;

pub struct App {
    workspace: Workspace,
    controller: ChromeController,
    settings: Settings,
    store: Option<SettingsStore>,
    keybindings: KeyBindings,
    log: Option<LogHandle>,
}

impl App {
    pub fn new(
        workspace: Workspace,
        controller: ChromeController,
        settings: Settings,
        store: Option<SettingsStore>,
    ) -> Self {
        Self {
            workspace,
            controller,
            settings,
            store,
            keybindings: KeyBindings::default(),
            log: None,
        }
    }

    /// Status bar shows the newest line of `log` when set.
    pub fn with_log(mut self, log: LogHandle) -> Self {
        self.log = Some(log);
        self
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn controller(&self) -> &ChromeController {
        &self.controller
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the startup preference once the workspace has its final size.
    pub fn start(&mut self, mode: DisplayMode) {
        self.controller
            .activate_from_preference(&mut self.workspace, mode);
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                match self.keybindings.action_for_key(key) {
                    Some(action) => self.perform(action),
                    None => ControlFlow::Continue,
                }
            }
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                    let pointer = Pointer::from(mouse);
                    self.workspace.set_pointer(pointer);
                    self.controller
                        .handle_pointer_move(&mut self.workspace, pointer);
                }
                ControlFlow::Continue
            }
            Event::Resize(cols, rows) => {
                self.workspace.resize(rect(0, 0, *cols, *rows));
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    pub fn perform(&mut self, action: Action) -> ControlFlow {
        info!(command = action.command_id(), "{action}");
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::ToggleFullScreen => self.controller.toggle(&mut self.workspace, false),
            Action::ToggleZen => self.controller.toggle(&mut self.workspace, true),
            Action::CycleModeAtStart => {
                self.settings.mode_at_start = self.settings.mode_at_start.cycle();
                self.persist();
                self.controller
                    .apply_preference_change(&mut self.workspace, self.settings.mode_at_start);
            }
            Action::ToggleHideStatusBar => {
                self.settings.hide_status_bar = !self.settings.hide_status_bar;
                self.persist();
                self.controller
                    .set_hide_status_bar(&mut self.workspace, self.settings.hide_status_bar);
            }
        }
        ControlFlow::Continue
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.save(&self.settings) {
            warn!(error = %err, "settings not saved");
        }
    }

    pub fn status_line(&self) -> String {
        let detail = self
            .log
            .as_ref()
            .and_then(LogHandle::last_line)
            .unwrap_or_else(|| {
                let hint = |action| self.keybindings.combos_for(action).join("/");
                format!(
                    "{} full  {} zen  {} quit",
                    hint(Action::ToggleFullScreen),
                    hint(Action::ToggleZen),
                    hint(Action::Quit)
                )
            });
        format!(" {} | {detail} ", self.controller.mode())
    }

    pub fn render(&self, frame: &mut UiFrame<'_>) {
        self.workspace.render(frame, &self.status_line());
    }

    fn flush_pointer_capture<D: InputDriver>(&mut self, driver: &mut D) {
        if let Some(enabled) = self.workspace.take_pointer_capture_change()
            && let Err(err) = driver.set_mouse_capture(enabled)
        {
            warn!(error = %err, enabled, "could not change mouse capture");
        }
    }
}

/// Drives `app` until it quits, redrawing once per tick.
pub fn run_app<D: InputDriver>(
    output: &mut ConsoleOutputDriver,
    driver: D,
    app: &mut App,
    poll_interval: Duration,
) -> io::Result<()> {
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.run(|driver, event| {
        let flow = match event {
            Some(evt) => app.handle_event(&evt),
            None => {
                output.draw(|mut frame| app.render(&mut frame))?;
                ControlFlow::Continue
            }
        };
        app.flush_pointer_capture(driver);
        Ok(flow)
    })
}
