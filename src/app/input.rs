use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::collectors::MetricSource;

use super::App;

/// Result of handling a key: Quit the app, or key was consumed (needs render).
/// None means the key was not handled.
#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    Quit,
    Consumed,
}

/// Handle a key event. Returns Some(Quit) to exit, Some(Consumed) if key was handled and
/// a render is needed, None if the key was not handled.
pub fn handle_key<S: MetricSource>(app: &mut App<S>, key_event: KeyEvent) -> Option<InputResult> {
    let KeyEvent { code, modifiers, kind, .. } = key_event;

    if kind == KeyEventKind::Release {
        return None;
    }
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputResult::Quit);
    }

    let content_height = app.content_height();
    let page = app.ui_state.viewport_rows.max(1);

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(InputResult::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => {
            tracing::debug!("manual refresh");
            app.refresh();
            Some(InputResult::Consumed)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.ui_state.scroll_up(1);
            Some(InputResult::Consumed)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.ui_state.scroll_down(1, content_height);
            Some(InputResult::Consumed)
        }
        KeyCode::PageUp => {
            app.ui_state.scroll_up(page);
            Some(InputResult::Consumed)
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.ui_state.scroll_down(page, content_height);
            Some(InputResult::Consumed)
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.ui_state.scroll_to_top();
            Some(InputResult::Consumed)
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.ui_state.scroll_to_bottom(content_height);
            Some(InputResult::Consumed)
        }
        _ => None,
    }
}
