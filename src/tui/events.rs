//! Event handling for the terminal browser
//!
//! Maps keyboard and mouse input to session events or browser actions.
//! The grid and the viewer have separate key maps; which one applies is
//! decided by the session's viewer cursor.

use super::state::UiState;
use crate::catalog::MediaType;
use crate::session::{Event, Session};
use crossterm::event::{
    self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Result of handling an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Continue running the event loop
    Continue,
    /// Forward to the session
    Session(Event),
    /// Open the current viewer item with the system handler
    OpenAsset,
    /// Leave the browser
    Quit,
    /// No action taken
    Ignored,
}

/// Dispatch a key press to the grid or viewer key map
pub fn handle_key(ui: &mut UiState, session: &Session, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignored;
    }

    // Global
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => return Action::Session(Event::ToggleSidebar),
        _ => {}
    }

    if session.cursor().is_open() {
        handle_viewer_key(key)
    } else {
        handle_grid_key(ui, session, key)
    }
}

fn handle_viewer_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Session(Event::Close),
        KeyCode::Left | KeyCode::Char('h') => Action::Session(Event::Previous),
        KeyCode::Right | KeyCode::Char('l') => Action::Session(Event::Next),
        KeyCode::Char('o') | KeyCode::Enter => Action::OpenAsset,
        _ => Action::Ignored,
    }
}

fn handle_grid_key(ui: &mut UiState, session: &Session, key: KeyEvent) -> Action {
    let len = session.filtered().len();

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Enter, _) => {
            if len == 0 {
                Action::Ignored
            } else {
                Action::Session(Event::OpenItem(ui.highlight))
            }
        }

        // Navigation
        (KeyCode::Up, _) => {
            ui.highlight_up();
            Action::Continue
        }
        (KeyCode::Down, _) => {
            ui.highlight_down(len);
            Action::Continue
        }
        (KeyCode::PageUp, _) => {
            ui.page_up();
            Action::Continue
        }
        (KeyCode::PageDown, _) => {
            ui.page_down(len);
            Action::Continue
        }
        (KeyCode::Home, _) => {
            ui.jump_to_start();
            Action::Continue
        }
        (KeyCode::End, _) => {
            ui.jump_to_end(len);
            Action::Continue
        }

        // Filters
        (KeyCode::Tab, _) => cycle_category(session, 1),
        (KeyCode::BackTab, _) => cycle_category(session, -1),
        (KeyCode::F(2), _) => toggle_type(session, MediaType::Image),
        (KeyCode::F(3), _) => toggle_type(session, MediaType::Pdf),

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if ui.query_clear() {
                search(ui)
            } else {
                Action::Ignored
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            ui.query_push(c);
            search(ui)
        }
        (KeyCode::Backspace, _) => {
            if ui.query_backspace() {
                search(ui)
            } else {
                Action::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if ui.query_delete() {
                search(ui)
            } else {
                Action::Ignored
            }
        }
        (KeyCode::Left, _) => {
            ui.query_cursor_left();
            Action::Continue
        }
        (KeyCode::Right, _) => {
            ui.query_cursor_right();
            Action::Continue
        }

        _ => Action::Ignored,
    }
}

fn search(ui: &UiState) -> Action {
    Action::Session(Event::SearchChanged(ui.query.clone()))
}

/// Select the category `step` positions away from the active one, wrapping
fn cycle_category(session: &Session, step: isize) -> Action {
    let categories = session.categories();
    if categories.len() < 2 {
        return Action::Ignored;
    }

    let active = &session.criteria().active_category;
    let current = categories.iter().position(|c| c == active).unwrap_or(0);
    let next = (current as isize + step).rem_euclid(categories.len() as isize) as usize;

    Action::Session(Event::CategorySelected(categories[next].clone()))
}

fn toggle_type(session: &Session, media_type: MediaType) -> Action {
    Action::Session(Event::TypeToggled(
        media_type,
        !session.type_enabled(media_type),
    ))
}

/// Handle mouse events
///
/// A left click on a control from the last draw sends its event. Grid rows
/// and scrolling only respond while the viewer is closed.
pub fn handle_mouse(ui: &mut UiState, session: &Session, mouse: MouseEvent) -> Action {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left)
        && let Some(event) = ui.target_at(mouse.column, mouse.row)
    {
        return Action::Session(event.clone());
    }

    if session.cursor().is_open() {
        return Action::Ignored;
    }

    let len = session.filtered().len();
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            ui.highlight_up();
            Action::Continue
        }
        MouseEventKind::ScrollDown => {
            ui.highlight_down(len);
            Action::Continue
        }
        MouseEventKind::Down(MouseButton::Left) => ui
            .row_at(mouse.column, mouse.row, len)
            .map_or(Action::Ignored, |index| {
                ui.highlight_at(index);
                Action::Session(Event::OpenItem(index))
            }),
        _ => Action::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    ui: &mut UiState,
    session: &Session,
    timeout: Duration,
) -> std::io::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::Continue);
    }

    let action = match event::read()? {
        TermEvent::Key(key) => handle_key(ui, session, key),
        TermEvent::Mouse(mouse) => handle_mouse(ui, session, mouse),
        TermEvent::Resize(_, _) => Action::Continue,
        _ => Action::Ignored,
    };

    Ok(action)
}
