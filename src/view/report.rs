use std::io::{self, Write};
use crossterm::{queue, style::{Color, SetForegroundColor, ResetColor}};

use super::shared::{wrap_lines, write_section_header, writeln};
use super::ScrollPosition;

/// Paint the visible window of `text`, wrapped at `cols` and surrounded by
/// `padding` blank rows (half above, the rest below). Returns which rows
/// ended up on screen.
pub fn render_report(
    out: &mut impl Write,
    text: &str,
    cols: u16,
    offset: usize,
    viewport_rows: usize,
    padding: usize,
) -> io::Result<ScrollPosition> {
    let top = padding / 2;
    let mut rows = vec![String::new(); top];
    rows.extend(wrap_lines(text, cols));
    rows.resize(rows.len() + padding - top, String::new());
    let total = rows.len();
    let first = offset.min(total);

    for row in rows.iter().skip(first).take(viewport_rows) {
        if row.starts_with("===") {
            write_section_header(out, row)?;
        } else if row.contains("info retrieval failed:") {
            queue!(out, SetForegroundColor(Color::Yellow))?;
            writeln(out, row)?;
            queue!(out, ResetColor)?;
        } else {
            writeln(out, row)?;
        }
    }

    Ok(ScrollPosition {
        first,
        last: (first + viewport_rows).min(total),
        total,
    })
}
