//! Keyboard input dispatch.
//!
//! Up/Down (or Tab/BackTab) move focus through the form, text fields take
//! character input, sliders adjust with Left/Right (h/l also work), Enter
//! triggers an analysis from anywhere, Esc quits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Phase};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ignore everything while a run is in flight; the loop is synchronous,
    // so this only matters for events queued behind a slow fetch.
    if app.phase != Phase::Idle {
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Enter => app.trigger_analysis(),
        KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Left => app.adjust_focused_window(-1),
        KeyCode::Right => app.adjust_focused_window(1),
        KeyCode::Backspace => {
            if let Some(text) = app.focused_text_mut() {
                text.pop();
            }
        }
        KeyCode::Char(c) => handle_char(app, c),
        _ => {}
    }
}

fn handle_char(app: &mut AppState, c: char) {
    if app.focus.is_text() {
        if let Some(text) = app.focused_text_mut() {
            text.push(c);
        }
        return;
    }

    // Vim-style adjustment on sliders.
    match c {
        'h' => app.adjust_focused_window(-1),
        'l' => app.adjust_focused_window(1),
        'q' => app.running = false,
        _ => {}
    }
}
