use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chrome_reveal::ui::{UiFrame, rect};
use chrome_reveal::{
    ChromeController, ChromeHost, ChromeNode, ChromeOptions, DisplayMode, DockHost, LayoutView,
    Pointer, Registry, Workspace,
};
use clap::Parser;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

#[derive(Parser, Debug)]
#[command(
    name = "reveal-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Feeds synthetic pointer streams through the proximity controller"
)]
struct BenchCli {
    /// How long to run the benchmark.
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        default_value_t = 3.0
    )]
    duration_seconds: f64,

    /// Viewport width in cells.
    #[arg(long, default_value_t = 200)]
    cols: u16,

    /// Viewport height in cells.
    #[arg(long, default_value_t = 60)]
    rows: u16,

    /// Edge threshold in cells.
    #[arg(short = 't', long, default_value_t = 1)]
    threshold: u16,

    /// Run in zen mode instead of full screen.
    #[arg(long)]
    zen: bool,

    /// Render the workspace into an offscreen buffer every N pointer moves.
    /// Zero disables rendering.
    #[arg(long, value_name = "N", default_value_t = 0)]
    render_every: u64,
}

struct BenchConfig {
    duration: Duration,
    viewport: Rect,
    threshold: u16,
    zen: bool,
    render_every: u64,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(0.1..=600.0).contains(&cli.duration_seconds) {
            return Err("duration must be between 0.1 and 600 seconds".to_string());
        }
        if cli.cols < 8 || cli.rows < 8 {
            return Err("viewport must be at least 8x8 cells".to_string());
        }
        Ok(Self {
            duration: Duration::from_secs_f64(cli.duration_seconds),
            viewport: rect(0, 0, cli.cols, cli.rows),
            threshold: cli.threshold,
            zen: cli.zen,
            render_every: cli.render_every,
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    Ok(())
}

/// Workspace wrapper that counts visibility writes.
struct CountingHost {
    inner: Workspace,
    writes: u64,
}

impl LayoutView for CountingHost {
    type Node = ChromeNode;

    fn viewport(&self) -> Rect {
        self.inner.viewport()
    }

    fn query_one(&self, selector: &str) -> Option<ChromeNode> {
        self.inner.query_one(selector)
    }

    fn current_view_container(&self) -> Option<ChromeNode> {
        self.inner.current_view_container()
    }

    fn first_child(&self, node: ChromeNode) -> Option<ChromeNode> {
        self.inner.first_child(node)
    }

    fn bounding_rect(&self, node: ChromeNode) -> Rect {
        self.inner.bounding_rect(node)
    }

    fn is_hidden(&self, node: ChromeNode) -> bool {
        self.inner.is_hidden(node)
    }
}

impl ChromeHost for CountingHost {
    fn set_hidden(&mut self, node: ChromeNode, hidden: bool) {
        self.writes += 1;
        self.inner.set_hidden(node, hidden);
    }

    fn set_mode_marker(&mut self, mode: Option<DisplayMode>) {
        self.inner.set_mode_marker(mode);
    }

    fn install_pointer_listener(&mut self) {
        self.inner.install_pointer_listener();
    }

    fn remove_pointer_listener(&mut self) {
        self.inner.remove_pointer_listener();
    }

    fn docks(&mut self) -> Option<&mut dyn DockHost> {
        self.inner.docks()
    }
}

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let mut host = CountingHost {
        inner: Workspace::new(config.viewport),
        writes: 0,
    };
    let mut controller = ChromeController::new(
        Registry::standard(config.threshold),
        ChromeOptions::default(),
    );
    controller.activate(&mut host, config.zen);
    host.writes = 0;

    let mut buffer = Buffer::empty(config.viewport);
    let mut walk = PointerWalk::seeded_from_clock(config.viewport);
    let mut stats = BenchStats::new();

    while stats.elapsed() < config.duration {
        // Check the clock once per batch.
        for _ in 0..1024 {
            let pointer = walk.next_pointer();
            let was_revealed = controller.state().revealed().is_some();
            controller.handle_pointer_move(&mut host, pointer);
            stats.moves += 1;
            if !was_revealed && controller.state().revealed().is_some() {
                stats.reveals += 1;
            }
            if config.render_every > 0 && stats.moves % config.render_every == 0 {
                let mut frame = UiFrame::from_parts(config.viewport, &mut buffer);
                host.inner.render(&mut frame, "bench");
                stats.renders += 1;
            }
        }
    }
    stats.writes = host.writes;
    stats.mark_completed();
    stats
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    moves: u64,
    writes: u64,
    reveals: u64,
    renders: u64,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            moves: 0,
            writes: 0,
            reveals: 0,
            renders: 0,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let elapsed = self.elapsed().as_secs_f64();
        let per_second = |count: u64| {
            if elapsed > 0.0 {
                count as f64 / elapsed
            } else {
                0.0
            }
        };
        let writes_per_move = if self.moves > 0 {
            self.writes as f64 / self.moves as f64
        } else {
            0.0
        };

        indoc::formatdoc!(
            r#"
            Reveal bench completed ({mode}, {cols}x{rows}, threshold {threshold}).
            Duration: {elapsed:.2}s
            Pointer moves: {moves} (~{moves_per_sec:.0}/s)
            Visibility writes: {writes} ({writes_per_move:.4} per move)
            Reveals: {reveals} | Renders: {renders}
            "#,
            mode = if config.zen { "zen" } else { "full" },
            cols = config.viewport.width,
            rows = config.viewport.height,
            threshold = config.threshold,
            elapsed = elapsed,
            moves = self.moves,
            moves_per_sec = per_second(self.moves),
            writes = self.writes,
            writes_per_move = writes_per_move,
            reveals = self.reveals,
            renders = self.renders,
        )
    }
}

/// Random walk that mostly wanders the interior and periodically sweeps to
/// an edge, so both the fast path and the reveal path get exercised.
struct PointerWalk {
    state: u64,
    viewport: Rect,
    x: u16,
    y: u16,
}

impl PointerWalk {
    fn seeded_from_clock(viewport: Rect) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
            ^ 0xA5A5_A5A5_1234_5678;
        Self {
            state: seed,
            viewport,
            x: viewport.width / 2,
            y: viewport.height / 2,
        }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn step(value: u16, delta: u32, max: u16) -> u16 {
        match delta % 3 {
            0 => value.saturating_sub(1),
            1 => value.saturating_add(1).min(max.saturating_sub(1)),
            _ => value,
        }
    }

    fn next_pointer(&mut self) -> Pointer {
        let roll = self.next();
        if roll % 97 == 0 {
            match (roll >> 8) % 4 {
                0 => self.x = 0,
                1 => self.x = self.viewport.width.saturating_sub(1),
                2 => self.y = 0,
                _ => self.y = self.viewport.height.saturating_sub(1),
            }
        } else {
            let dx = self.next();
            let dy = self.next();
            self.x = Self::step(self.x, dx, self.viewport.width);
            self.y = Self::step(self.y, dy, self.viewport.height);
        }
        Pointer::new(self.x, self.y)
    }
}
