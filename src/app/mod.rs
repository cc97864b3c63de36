mod event_loop;
mod input;
mod render;
mod signals;
mod timer;

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::{
    cursor, execute,
    event::{self, Event},
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, Clear, ClearType},
};

use crate::collectors::{MetricSource, SysinfoSource};
use crate::model::{CONTENT_PADDING, DisplayState, Frame, UIState};
use crate::report::Telemetry;
use crate::view::{Presenter, measure_rows};

pub use input::{InputResult, handle_key};
pub use signals::{quit_signals, register_quit_flag};
pub use timer::{REFRESH_PERIOD, RefreshTimer};

/// Restore the terminal to normal mode. Safe to call multiple times.
pub fn restore_terminal() {
    let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Application state: the aggregator plus the single displayed frame.
pub struct App<S> {
    pub telemetry: Telemetry<S>,
    pub display: DisplayState,
    pub ui_state: UIState,
    pub timer: RefreshTimer,
    /// Terminal width the current frame was measured at.
    pub width: u16,
}

impl<S: MetricSource> App<S> {
    pub fn new(telemetry: Telemetry<S>, width: u16) -> Self {
        Self {
            telemetry,
            display: DisplayState::Uninitialized,
            ui_state: UIState::default(),
            timer: RefreshTimer::default(),
            width,
        }
    }

    /// Collect a new report, replace the displayed frame with it and
    /// return its text.
    pub fn refresh(&mut self) -> String {
        let text = self.telemetry.refresh().to_string();
        let rows = measure_rows(&text, self.width);
        self.display = DisplayState::Populated(Frame {
            text: text.clone(),
            rows,
            height: rows + CONTENT_PADDING,
            refreshed_at: Local::now().format("%H:%M:%S").to_string(),
        });
        self.ui_state.clamp(rows + CONTENT_PADDING);
        text
    }

    /// Timer callback; behaves exactly like [`App::refresh`].
    pub fn auto_refresh(&mut self, _elapsed: Duration) -> String {
        self.refresh()
    }

    /// Re-measure the current frame for a new terminal width.
    pub fn resize(&mut self, width: u16) {
        self.width = width;
        if let DisplayState::Populated(frame) = &mut self.display {
            frame.rows = measure_rows(&frame.text, width);
            frame.height = frame.rows + CONTENT_PADDING;
        }
        let height = self.content_height();
        self.ui_state.clamp(height);
    }

    /// Scrollable height of whatever is on screen, placeholder included:
    /// wrapped rows plus padding.
    pub fn content_height(&self) -> usize {
        match self.display.frame() {
            Some(frame) => frame.height,
            None => measure_rows(self.display.text(), self.width) + CONTENT_PADDING,
        }
    }
}

/// Run the terminal UI until quit. Sets up the terminal, shows the
/// placeholder, performs the startup refresh, then serves ticks and keys.
pub fn run(should_quit: Arc<AtomicBool>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), cursor::Hide)?;

    let (cols, _) = terminal::size()?;
    let mut app = App::new(Telemetry::new(SysinfoSource::new()), cols);
    tracing::info!(
        mount_path = %app.telemetry.mount_path().display(),
        period_secs = app.timer.period().as_secs(),
        "display ready"
    );

    draw(&mut app)?;
    app.refresh();
    app.timer.rearm(Instant::now());
    let mut needs_render = true;

    loop {
        if should_quit.load(Ordering::Relaxed) {
            tracing::info!("quit requested by signal");
            break;
        }

        if app.process_tick() {
            needs_render = true;
        }

        if needs_render {
            draw(&mut app)?;
            needs_render = false;
        }

        let timeout = app.timer.until_next(Instant::now());
        if event::poll(timeout.min(Duration::from_millis(100)))? {
            match event::read()? {
                Event::Key(key_event) => match input::handle_key(&mut app, key_event) {
                    Some(InputResult::Quit) => break,
                    Some(InputResult::Consumed) => needs_render = true,
                    None => {}
                },
                Event::Resize(cols, _) => {
                    app.resize(cols);
                    needs_render = true;
                }
                _ => {}
            }
        }
    }

    restore_terminal();
    Ok(())
}

fn draw<S: MetricSource>(app: &mut App<S>) -> io::Result<()> {
    if Presenter::render_size_guard()? {
        return Ok(());
    }
    render::render(app)
}
