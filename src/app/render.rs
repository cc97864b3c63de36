use std::io::{self, Write};

use crossterm::{cursor::MoveTo, queue, terminal::{self, Clear, ClearType}};

use crate::collectors::MetricSource;
use crate::model::CONTENT_PADDING;
use crate::view::Presenter;

use super::App;

pub fn render<S: MetricSource>(app: &mut App<S>) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    if cols != app.width {
        app.resize(cols);
    }

    let mut out = io::stdout();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let time_str = app.display.refreshed_at().unwrap_or("...");
    Presenter::render_header(&mut out, time_str, cols)?;

    app.ui_state.viewport_rows = Presenter::viewport_rows(rows);
    app.ui_state.clamp(app.content_height());

    let shown = Presenter::render_report(
        &mut out,
        app.display.text(),
        cols,
        app.ui_state.scroll_offset,
        app.ui_state.viewport_rows,
        CONTENT_PADDING,
    )?;

    Presenter::render_help(&mut out, cols, rows, shown)?;
    out.flush()
}
