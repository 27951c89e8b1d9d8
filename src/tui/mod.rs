//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the user list,
//! and routes input to the table or the open alert.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ──▶ alert open? ──yes──▶ AlertSlot (dismiss)
//!                   │
//!                   no
//!                   ▼
//!             UserTable ──Activate──▶ UserRow::tap ──▶ (delegate | closure) ──▶ UserList
//! ```
//!
//! The loop never calls the owner directly when a button fires: the row's
//! own channels carry the tap back, which is the point of the exercise.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event (including resize). All pending events are drained before the
//! draw, so an activation may target a row the last frame didn't bind;
//! `UserTable::activate` rebinds the window for it.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::tui::component::EventHandler;
use crate::tui::components::{AlertSlot, TableEvent, UserList, UserTable, UserTableState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub title: String,
    pub status_message: String,
    pub table: UserTableState,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            title: config.title.clone(),
            status_message: String::new(),
            table: UserTableState::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut alerts = AlertSlot::default();
    let owner = UserList::new(
        config.users.clone(),
        Box::new(alerts.clone()),
        config.detail.clone(),
    );
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &owner, &mut tui, &mut alerts));
    ratatui::restore();

    info!("Exiting");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    owner: &UserList,
    tui: &mut TuiState,
    alerts: &mut AlertSlot,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, owner, tui, alerts))?;
            needs_redraw = false;
        }

        let mut next = poll_event_timeout(IDLE_POLL)?;
        if next.is_some() {
            needs_redraw = true;
        }

        // Drain all pending events before the next draw
        while let Some(event) = next {
            if handle_event(&event, owner, tui, alerts) == Flow::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

fn handle_event(event: &TuiEvent, owner: &UserList, tui: &mut TuiState, alerts: &mut AlertSlot) -> Flow {
    match event {
        TuiEvent::ForceQuit => return Flow::Quit,
        // Resize just needs a redraw
        TuiEvent::Resize => return Flow::Continue,
        _ => {}
    }

    // An open alert is modal
    if alerts.is_open() {
        alerts.handle_event(event);
        return Flow::Continue;
    }

    if matches!(event, TuiEvent::InputChar('q')) {
        return Flow::Quit;
    }

    let mut table = UserTable::new(&mut tui.table, owner);
    if let Some(TableEvent::Activate { position, button }) = table.handle_event(event) {
        if table.activate(position, button) {
            let name = owner
                .user(position)
                .and_then(|user| user.name.as_deref())
                .filter(|name| !name.is_empty())
                .unwrap_or("(unnamed)");
            info!("{} button tapped on row {}", button.label(), position);
            tui.status_message = format!("{} → {}", button.label(), name);
        } else {
            warn!("No row at position {} to activate", position);
        }
    }
    Flow::Continue
}
