use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;
use tracing::{Level, info, warn};

use chrome_reveal::app::{App, run_app};
use chrome_reveal::constants::CONSOLE_EDGE_THRESHOLD;
use chrome_reveal::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use chrome_reveal::keybindings::KeyBindings;
use chrome_reveal::log_buffer::{LogHandle, set_global_log};
use chrome_reveal::ui::rect;
use chrome_reveal::{
    ChromeController, DisplayMode, Registry, SettingsStore, Workspace, tracing_sub,
};

const SAMPLE_DOCUMENT: &str = indoc! {"
    # notes.md

    While full screen or zen mode is active, move the pointer to an edge
    of the terminal to bring back the chrome anchored there. Move away to
    hide it again.

    Start mode and status bar changes are saved immediately.

    Keys:
"};

#[derive(Parser, Debug)]
#[command(
    name = "chrome-reveal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal workspace whose chrome auto-hides in full screen and zen modes",
    after_help = indoc! {"
        Settings are stored as JSON with the keys modeAtStart, hideStatusBar
        and collapseDocks. Missing keys use their defaults.
    "}
)]
struct Cli {
    /// Settings file. Defaults to the platform configuration directory.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Mode to enter at start, overriding the saved preference.
    #[arg(long, value_name = "MODE")]
    mode: Option<DisplayMode>,

    /// Distance from an edge, in cells, that counts as near.
    #[arg(long, value_name = "CELLS", default_value_t = CONSOLE_EDGE_THRESHOLD)]
    threshold: u16,

    /// Lay out the workspace without a title bar.
    #[arg(long)]
    no_title_bar: bool,

    /// Log verbosity for the status bar feed.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log = LogHandle::default();
    set_global_log(log.clone());
    tracing_sub::init_default(cli.log_level);

    let store = match cli.settings {
        Some(path) => Some(SettingsStore::new(path)),
        None => match SettingsStore::default_location() {
            Ok(store) => Some(store),
            Err(err) => {
                warn!(error = %err, "settings will not be persisted");
                None
            }
        },
    };
    let settings = store
        .as_ref()
        .map(SettingsStore::load_or_default)
        .unwrap_or_default();

    let controller = ChromeController::new(
        Registry::standard(cli.threshold),
        settings.chrome_options(),
    );
    let (cols, rows) = crossterm::terminal::size()?;
    let mut workspace = Workspace::new(rect(0, 0, cols, rows));
    workspace.set_title_bar_present(!cli.no_title_bar);
    let keys = KeyBindings::default().help_lines();
    workspace.set_document(
        SAMPLE_DOCUMENT
            .lines()
            .map(str::to_string)
            .chain(keys.into_iter().map(|line| format!("  {line}"))),
    );

    let mut app = App::new(workspace, controller, settings, store).with_log(log);
    app.start(cli.mode.unwrap_or(settings.mode_at_start));
    info!(mode = %app.controller().mode(), threshold = cli.threshold, "workspace ready");

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let result = run_app(
        &mut output,
        ConsoleInputDriver::new(),
        &mut app,
        Duration::from_millis(16),
    );
    let restored = output.exit();
    settle(result, restored)
}

/// An error from the run loop wins over a failure to restore the terminal.
fn settle(run: io::Result<()>, restored: io::Result<()>) -> io::Result<()> {
    if let Err(err) = &restored
        && run.is_err()
    {
        warn!(error = %err, "terminal not restored");
    }
    run.and(restored)
}
