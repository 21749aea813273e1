//! Terminal browser: render sink, layout and event loop

use super::error::{Result, UiError};
use super::events::{Action, poll_and_handle};
use super::state::{StatusMessage, UiState};
use super::theme::Theme;
use super::widgets::{CategoryNav, HelpBar, MediaGrid, SearchBar, StatusBar, ViewerModal};
use crate::render::{PageView, RenderSink, ViewOptions, project};
use crate::session::{Outcome, Session};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SIDEBAR_WIDTH: u16 = 24;

/// Render sink drawing into the alternate screen
pub struct TerminalSink {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    ui: UiState,
    restored: bool,
}

impl TerminalSink {
    /// Switch the terminal to raw mode and the alternate screen
    ///
    /// # Errors
    ///
    /// Returns `UiError::NotATerminal` when stdout is redirected, or an
    /// I/O error if the terminal cannot be configured.
    pub fn enter(ui: UiState, theme: Theme) -> Result<Self> {
        if !io::stdout().is_terminal() {
            return Err(UiError::NotATerminal);
        }
        let terminal = Self::setup_terminal()?;
        Ok(Self {
            terminal,
            theme,
            ui,
            restored: false,
        })
    }

    fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    fn cleanup_terminal() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Give the terminal back to the shell
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be reset.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        Self::cleanup_terminal()?;
        self.terminal.show_cursor()
    }

    pub const fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }
}

impl RenderSink for TerminalSink {
    fn render(&mut self, view: &PageView) -> io::Result<()> {
        let ui = &mut self.ui;
        let theme = &self.theme;
        self.terminal.draw(|frame| draw(frame, view, ui, theme))?;
        Ok(())
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        if !self.restored {
            let _ = Self::cleanup_terminal();
        }
    }
}

/// Lay out and draw one frame
pub fn draw(frame: &mut Frame, view: &PageView, ui: &mut UiState, theme: &Theme) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Categories + grid
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let search_bar = SearchBar::new(&ui.query, ui.query_cursor, theme).focused(view.viewer.is_none());
    frame.render_widget(search_bar, main_layout[0]);

    ui.targets.clear();
    let grid_area = if view.sidebar_open {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(main_layout[1]);
        let nav = CategoryNav::new(&view.categories, &view.type_toggles, theme);
        ui.targets = nav.click_targets(body[0]);
        frame.render_widget(nav, body[0]);
        body[1]
    } else {
        main_layout[1]
    };

    ui.grid_area = MediaGrid::inner_area(grid_area);
    ui.visible_height = usize::from(ui.grid_area.height).max(1);
    ui.clamp(view.grid.len());
    frame.render_widget(MediaGrid::new(view, ui, theme), grid_area);

    let status_bar = StatusBar::new(ui.status.as_ref(), theme).with_source(ui.source.as_deref());
    frame.render_widget(status_bar, main_layout[2]);

    let hints = if view.viewer.is_some() {
        HelpBar::viewer_hints()
    } else {
        HelpBar::grid_hints()
    };
    frame.render_widget(HelpBar::new(&hints, theme), main_layout[3]);

    // the modal covers the sidebar, so only its own controls stay clickable
    if let Some(viewer) = &view.viewer {
        ui.targets = ViewerModal::controls(area).click_targets();
        frame.render_widget(ViewerModal::new(viewer, theme), area);
    }
}

/// Apply an input action to the session and the UI chrome
pub fn dispatch(ui: &mut UiState, session: &mut Session, action: Action) {
    match action {
        Action::Session(event) => {
            tracing::debug!(?event, "dispatching");
            match session.handle(event) {
                Outcome::Refiltered => {
                    ui.clamp(session.filtered().len());
                    if let Some(index) = session.cursor().index() {
                        ui.highlight_at(index);
                    }
                }
                Outcome::Navigated => {
                    if let Some(index) = session.cursor().index() {
                        ui.highlight_at(index);
                    }
                }
                Outcome::Presentation | Outcome::Ignored => {}
            }
        }
        Action::OpenAsset => open_current(ui, session),
        Action::Quit => ui.should_exit = true,
        Action::Continue | Action::Ignored => {}
    }
}

/// Hand the open item to the system's default application
fn open_current(ui: &mut UiState, session: &Session) {
    let Some(item) = session.current_item() else {
        return;
    };
    let target = session.asset_url(item);

    ui.status = Some(match open::that(&target) {
        Ok(()) => {
            tracing::info!("Opened {target}");
            StatusMessage::info(format!("Opened {}", item.name))
        }
        Err(e) => {
            tracing::warn!("Failed to open {target}: {e}");
            StatusMessage::error(format!("Could not open {}: {e}", item.name))
        }
    });
}

/// Run the interactive browser until the user quits
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be driven.
pub fn run(mut session: Session, options: &ViewOptions) -> Result<Session> {
    let mut sink = TerminalSink::enter(UiState::from_session(&session), Theme::default())?;

    let result = event_loop(&mut sink, &mut session, options);
    sink.restore()?;

    result.map(|()| session)
}

fn event_loop(sink: &mut TerminalSink, session: &mut Session, options: &ViewOptions) -> Result<()> {
    while !sink.ui.should_exit {
        let view = project(session, options);
        sink.render(&view)?;

        let action = poll_and_handle(sink.ui_mut(), session, POLL_INTERVAL)?;
        dispatch(sink.ui_mut(), session, action);
    }
    Ok(())
}
