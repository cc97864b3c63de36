use std::io::{self, Write};
use crossterm::{
    cursor, queue,
    style::{Color, SetForegroundColor, SetBackgroundColor, ResetColor},
};

pub const TITLE: &str = "System Information Viewer";

pub fn render_header(out: &mut impl Write, time: &str, cols: u16) -> io::Result<()> {
    write!(out, "  ")?;
    queue!(out, SetBackgroundColor(Color::DarkBlue), SetForegroundColor(Color::White))?;
    write!(out, " {} ", TITLE)?;
    queue!(out, ResetColor)?;

    // Right-align the refresh time
    let time_str = format!("updated {} ", time);
    let col = (cols as usize).saturating_sub(time_str.chars().count());
    queue!(out, cursor::MoveTo(col as u16, 0), SetForegroundColor(Color::DarkGrey))?;
    write!(out, "{}", time_str)?;
    queue!(out, ResetColor)?;

    write!(out, "\r\n")?;
    let sep: String = "─".repeat(cols as usize);
    queue!(out, SetForegroundColor(Color::DarkGrey))?;
    write!(out, "{}\r\n", sep)?;
    queue!(out, ResetColor)?;

    Ok(())
}
