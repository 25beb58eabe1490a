//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
mod measure;
mod prompt;
pub mod status;
mod styles;

pub use layout::{render_layout, split_areas, ViewSettings};
pub use measure::CellMeasurer;
pub use prompt::{mirror_text, visible_range, PromptGeometry, PromptView};
pub use status::{format_clock, PlaybackStatus};
pub use styles::{ColorConfig, PrompterStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::engine::{Session, SessionParams};
use crate::model::{AppError, KeyAction};
use crate::source::{InputSource, LoadedText};
use constants::FALLBACK_SIZE;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    session: Session,
    settings: ViewSettings,
    key_bindings: KeyBindings,
    frame_interval: Duration,
    /// Terminal height used for the focus row. Width changes do not rewrap.
    height: u16,
    finish_logged: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        session: Session,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let styles = PrompterStyles::from_config(config, colors);
        let settings = ViewSettings::from_config(config, styles);
        Ok(Self::with_terminal(
            terminal,
            session,
            settings,
            frame_interval(config.frame_rate),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (Esc, q or Ctrl+C). Keeps running after the text has
    /// scrolled off so the reader decides when to leave.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        let mut last_frame = Instant::now();

        loop {
            if event::poll(self.frame_interval)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(()); // User quit
                        }
                    }
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
            }

            let now = Instant::now();
            let elapsed = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;
            self.tick(elapsed)?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        session: Session,
        settings: ViewSettings,
        frame_interval: Duration,
    ) -> Self {
        let height = match terminal.size() {
            Ok(size) if size.height > 0 => size.height,
            _ => FALLBACK_SIZE.1,
        };

        Self {
            terminal,
            session,
            settings,
            key_bindings: KeyBindings::default(),
            frame_interval,
            height,
            finish_logged: false,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::TogglePause) => {
                self.session.toggle_manual_pause();
                false
            }
            Some(KeyAction::ToggleMirror) => {
                self.settings.mirror = !self.settings.mirror;
                debug!(mirror = self.settings.mirror, "Mirror toggled");
                false
            }
            None => false,
        }
    }

    /// Track the new height. The layout keeps the width it was built with.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        if height > 0 {
            self.height = height;
        }
    }

    /// Advance the session by `elapsed_seconds` and redraw.
    fn tick(&mut self, elapsed_seconds: f64) -> Result<(), TuiError> {
        let focus_y = self.settings.geometry(self.height).focus_y();
        self.session.tick(elapsed_seconds, focus_y);

        if !self.finish_logged && self.session.is_finished() {
            self.finish_logged = true;
            info!(
                played_seconds = self.session.played_seconds(),
                target_seconds = self.session.total_duration_seconds(),
                "Prompt finished"
            );
        }

        self.draw()
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let session = &self.session;
        let settings = &self.settings;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, session, settings);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        session: Session,
        settings: ViewSettings,
    ) -> Self {
        Self::with_terminal(terminal, session, settings, frame_interval(60))
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Time between frames for `frame_rate` frames per second.
fn frame_interval(frame_rate: u32) -> Duration {
    Duration::from_secs(1) / frame_rate.max(1)
}

/// Derive session inputs from the configuration and the terminal size.
///
/// Text gets the width between the margins. Wrapping keeps a line only while it
/// measures strictly less than the limit, so the limit is one past the usable width.
pub fn session_params(
    config: &ResolvedConfig,
    size: (u16, u16),
    duration_seconds: f64,
) -> SessionParams {
    let (width, height) = size;
    let text_width = width.saturating_sub(config.margin.saturating_mul(2)).max(1);
    let prompt_height = if config.show_status {
        height.saturating_sub(constants::STATUS_BAR_HEIGHT)
    } else {
        height
    };
    let geometry = PromptGeometry::new(prompt_height, config.focus_ratio);

    SessionParams {
        max_width: f64::from(text_width) + 1.0,
        line_height: 1.0 + f64::from(config.line_spacing),
        total_duration_seconds: duration_seconds,
        pause_duration_seconds: config.pause_duration,
        focus_inset: geometry.lead_in(config.lead_in_ratio),
    }
}

/// Wrap, lay out and plan `text` for a terminal of `size`.
///
/// # Errors
///
/// Measurement or timing failures from [`Session::build`].
pub fn build_session(
    text: &str,
    config: &ResolvedConfig,
    size: (u16, u16),
    duration_seconds: f64,
) -> Result<Session, AppError> {
    let params = session_params(config, size, duration_seconds);
    Session::build(text, &params, &CellMeasurer)
}

/// Read `input` completely and build its session for a terminal of `size`.
///
/// # Errors
///
/// [`AppError::Input`] if the text cannot be read or is empty, otherwise the errors of
/// [`build_session`].
pub fn prepare_session(
    input: InputSource,
    config: &ResolvedConfig,
    size: (u16, u16),
    duration_seconds: f64,
) -> Result<(LoadedText, Session), AppError> {
    let loaded = input.load()?;
    let session = build_session(&loaded.text, config, size, duration_seconds)?;
    Ok((loaded, session))
}

/// Initialize and run the TUI application for an input source
///
/// The text is read and the session planned before the terminal enters raw mode, so
/// input and planning errors print normally. Terminal state is always restored on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    input_source: InputSource,
    duration_seconds: f64,
    config: ResolvedConfig,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let size = match crossterm::terminal::size() {
        Ok((width, height)) if width > 0 && height > 0 => (width, height),
        _ => FALLBACK_SIZE,
    };

    let (loaded, session) = prepare_session(input_source, &config, size, duration_seconds)?;
    info!(source = %loaded.name, width = size.0, height = size.1, "Starting prompter");

    let mut app = TuiApp::new(session, &config, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, shows the cursor and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(cursor::Show)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
