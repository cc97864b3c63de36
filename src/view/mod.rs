mod header;
mod report;
mod shared;

use std::io::{self, Write};
use crossterm::{execute, cursor, queue, style::{Color, SetForegroundColor, ResetColor, Print}, terminal};

pub use header::TITLE;
pub use shared::{measure_rows, truncate_str, wrap_lines};

/// Minimum terminal dimensions for usable rendering.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 8;

/// Title row plus separator.
pub const HEADER_ROWS: u16 = 2;
/// Help line.
pub const FOOTER_ROWS: u16 = 1;

/// Which wrapped rows of the report are on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollPosition {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

pub struct Presenter;

impl Presenter {
    /// Check if the terminal is large enough. If not, render a "too small"
    /// message and return `true` (meaning "skip normal rendering").
    pub fn render_size_guard() -> io::Result<bool> {
        let (cols, rows) = terminal::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            let mut out = std::io::stdout();
            execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
            let msg = truncate_str(
                &format!(
                    "Terminal too small ({}x{}). Resize to at least {}x{}.",
                    cols, rows, MIN_COLS, MIN_ROWS
                ),
                cols as usize,
            );
            let y = rows / 2;
            let x = cols.saturating_sub(msg.chars().count() as u16) / 2;
            queue!(out, cursor::MoveTo(x, y), SetForegroundColor(Color::Yellow))?;
            write!(out, "{}", msg)?;
            queue!(out, ResetColor)?;
            out.flush()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Rows left for report text on a terminal `rows` high.
    pub fn viewport_rows(rows: u16) -> usize {
        usize::from(rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS))
    }

    pub fn render_header(out: &mut impl Write, time: &str, cols: u16) -> io::Result<()> {
        header::render_header(out, time, cols)
    }

    pub fn render_report(
        out: &mut impl Write,
        text: &str,
        cols: u16,
        offset: usize,
        viewport_rows: usize,
        padding: usize,
    ) -> io::Result<ScrollPosition> {
        report::render_report(out, text, cols, offset, viewport_rows, padding)
    }

    pub fn render_help(
        out: &mut impl Write,
        cols: u16,
        rows: u16,
        shown: ScrollPosition,
    ) -> io::Result<()> {
        let position = if shown.total > shown.last - shown.first {
            format!("  [{}-{}/{}]", shown.first + 1, shown.last, shown.total)
        } else {
            String::new()
        };
        let help = format!(
            "q: Quit | r: Refresh | ↑/↓ PgUp/PgDn: Scroll | auto every {}s{}",
            crate::app::REFRESH_PERIOD.as_secs(),
            position
        );
        let help = truncate_str(&help, cols.saturating_sub(1) as usize);
        queue!(
            out,
            cursor::MoveTo(1, rows.saturating_sub(1)),
            SetForegroundColor(Color::DarkGrey),
            Print(help),
            ResetColor
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_excludes_header_and_footer() {
        assert_eq!(Presenter::viewport_rows(24), 21);
        assert_eq!(Presenter::viewport_rows(2), 0);
    }

    #[test]
    fn help_shows_position_only_when_scrollable() {
        let mut buf = Vec::new();
        let all = ScrollPosition { first: 0, last: 10, total: 10 };
        Presenter::render_help(&mut buf, 120, 24, all).unwrap();
        let painted = String::from_utf8(buf).unwrap();
        assert!(painted.contains("r: Refresh"));
        assert!(!painted.contains("/10]"));

        let mut buf = Vec::new();
        let part = ScrollPosition { first: 5, last: 25, total: 40 };
        Presenter::render_help(&mut buf, 120, 24, part).unwrap();
        let painted = String::from_utf8(buf).unwrap();
        assert!(painted.contains("[6-25/40]"));
    }
}
