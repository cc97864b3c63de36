use std::io::{self, Write};
use crossterm::{queue, style::{Attribute, SetAttribute}};

/// Truncate a string to at most `max_len` characters (not bytes), appending "..."
/// if truncated. Safe for multi-byte UTF-8.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(keep).collect();
        format!("{}...", truncated)
    }
}

/// Split `text` into display rows of at most `width` characters. Every
/// newline starts a new row and blank lines are kept.
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            rows.push(chunk.iter().collect());
        }
    }
    rows
}

/// Number of rows `text` occupies at `width`.
pub fn measure_rows(text: &str, width: u16) -> usize {
    wrap_lines(text, width).len()
}

pub fn writeln(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}\r\n", text)
}

pub fn write_section_header(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Bold))?;
    write!(out, "{}\r\n", text)?;
    queue!(out, SetAttribute(Attribute::Reset))?;
    Ok(())
}
