/// Text shown before the first report has been computed.
pub const PLACEHOLDER_TEXT: &str = "Press r to refresh system information";

/// Blank rows around the report text, one above and one below; part of
/// the frame height and of the scrollable extent.
pub const CONTENT_PADDING: usize = 2;

/// One rendered report as handed to the display surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub text: String,
    /// Wrapped row count of `text` at the width it was measured for.
    pub rows: usize,
    /// `rows` plus `CONTENT_PADDING`.
    pub height: usize,
    pub refreshed_at: String,
}

/// What the display surface currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DisplayState {
    #[default]
    Uninitialized,
    Populated(Frame),
}

impl DisplayState {
    pub fn text(&self) -> &str {
        match self {
            DisplayState::Uninitialized => PLACEHOLDER_TEXT,
            DisplayState::Populated(frame) => &frame.text,
        }
    }

    pub fn frame(&self) -> Option<&Frame> {
        match self {
            DisplayState::Uninitialized => None,
            DisplayState::Populated(frame) => Some(frame),
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, DisplayState::Populated(_))
    }

    pub fn refreshed_at(&self) -> Option<&str> {
        self.frame().map(|f| f.refreshed_at.as_str())
    }
}

// --- UI State ---

#[derive(Clone, Debug, Default)]
pub struct UIState {
    pub scroll_offset: usize,
    /// Rows available for report text; set by the renderer.
    pub viewport_rows: usize,
}

impl UIState {
    fn max_offset(&self, content_rows: usize) -> usize {
        content_rows.saturating_sub(self.viewport_rows)
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize, content_rows: usize) {
        self.scroll_offset = (self.scroll_offset + rows).min(self.max_offset(content_rows));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, content_rows: usize) {
        self.scroll_offset = self.max_offset(content_rows);
    }

    /// Keep the offset valid after the content or viewport changed size.
    pub fn clamp(&mut self, content_rows: usize) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset(content_rows));
    }
}
