//! folio - a single-page portfolio in the terminal.
//!
//! ```text
//! main() -> TerminalSession::new() -> run() -> App + ui::draw
//! ```
//!
//! Every frame the loop drains terminal input, picks up the scene once the
//! loader finishes, queues a tick, lets the app work through its event
//! queue and then draws.

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_tui::app::App;
use folio_tui::cli::{Cli, VERSION};
use folio_tui::config::Settings;
use folio_tui::content::Content;
use folio_tui::dispatch::AppEvent;
use folio_tui::input::InputPump;
use folio_tui::models::SectionId;
use folio_tui::{scene, ui};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            warn!("{warning}");
        }
        return;
    }

    // Writing to stdout or stderr would corrupt the screen; no log it is.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!("Failed to create log dir {}: {e}", parent.display()));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!("Failed to open log file {}: {e}", candidate.display()));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: $DATA_LOCAL_DIR/folio/folio.log
    if let Some(data_dir) = dirs::data_local_dir() {
        candidates.push(data_dir.join("folio").join("folio.log"));
    }

    // Fallback: ./.folio/folio.log
    candidates.push(PathBuf::from(".folio").join("folio.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, the alternate screen and mouse capture are restored even after
/// an error or a panic.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let content = cli.load_content()?;
    let settings = cli.load_settings()?;
    info!(version = VERSION, reduced_motion = settings.reduced_motion, "starting folio");

    let mut session = TerminalSession::new()?;
    run(&mut session.terminal, content, settings, cli.section).await
}

async fn run<B>(
    terminal: &mut Terminal<B>,
    content: Content,
    settings: Settings,
    section: Option<String>,
) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let size = terminal.size()?;
    let mut app = App::new(content, settings, Rect::new(0, 0, size.width, size.height));

    if let Some(id) = section {
        if let Err(err) = id.parse::<SectionId>() {
            warn!("--section: {}", err);
        }
        app.push(AppEvent::Navigate(id));
    }

    let mut input = InputPump::new();
    let mut scene_rx = Some(scene::spawn_loader());
    let mut frames = tokio::time::interval(app.settings.tick);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    let result = loop {
        frames.tick().await;

        match input.drain() {
            Ok(events) => {
                for ev in events {
                    app.push(AppEvent::Input(ev));
                }
            }
            Err(err) => break Err(err.into()),
        }

        if let Some(rx) = scene_rx.as_mut() {
            match rx.try_recv() {
                Ok(scene) => {
                    app.push(AppEvent::SceneReady(scene));
                    scene_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    warn!("scene loader exited without a scene");
                    scene_rx = None;
                }
            }
        }

        let now = Instant::now();
        app.push(AppEvent::Tick(now.duration_since(last_frame)));
        last_frame = now;

        app.dispatch();

        if let Err(err) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(err.into());
        }
        if app.should_quit {
            break Ok(());
        }
    };

    app.shutdown();
    input.shutdown().await;
    result
}
