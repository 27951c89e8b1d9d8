//! # User Table Component
//!
//! The list-rendering surface. Each frame it asks the owner how many users
//! there are and for a bound row per visible position, recycling rows through
//! a [`RowPool`] so scrolling rebinds instead of allocating.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `UserTableState` lives in `TuiState` (selection, scroll, row pool)
//! - `UserTable` is created each frame with borrowed state and owner
//!
//! ## Input
//!
//! | Input               | Effect                                  |
//! |---------------------|-----------------------------------------|
//! | ↑/↓, k/j            | Move selection                          |
//! | ←/→, Tab            | Move focus between the two buttons      |
//! | Enter               | Activate the focused button             |
//! | d / c               | Activate Delegate / Closure directly    |
//! | Click on a button   | Select that row and activate the button |

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use super::row_pool::RowPool;
use super::user_list::UserList;
use super::user_row::{ROW_HEIGHT, RowButton, UserRow};

/// Persistent state for the user table.
///
/// Holds no user count of its own: the owner is the only source for it, and
/// every count-dependent step goes through [`UserTable`].
pub struct UserTableState {
    pub selected: usize,
    pub offset: usize,
    pub focused_button: RowButton,
    pub pool: RowPool,
    /// Rows that fit the last rendered area.
    visible: usize,
}

/// Events emitted by the user table.
#[derive(Debug, PartialEq, Eq)]
pub enum TableEvent {
    Activate { position: usize, button: RowButton },
}

impl Default for UserTableState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserTableState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: 0,
            focused_button: RowButton::default(),
            pool: RowPool::new(),
            visible: 1,
        }
    }

    /// The row currently bound to `position`, if it's in the bound window.
    pub fn visible_row(&self, position: usize) -> Option<&UserRow> {
        position
            .checked_sub(self.offset)
            .and_then(|slot| self.pool.in_use().get(slot))
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the scroll offset so `position` lies within `visible` rows of it.
    fn scroll_to(&mut self, position: usize, visible: usize) {
        if position < self.offset {
            self.offset = position;
        } else if position >= self.offset + visible {
            self.offset = position + 1 - visible;
        }
    }

    fn click(&mut self, column: u16, row: u16) -> Option<TableEvent> {
        let (slot, hit) = self
            .pool
            .in_use()
            .iter()
            .enumerate()
            .find(|(_, r)| r.contains(column, row))
            .map(|(slot, r)| (slot, r.hit_test(column, row)))?;

        let position = self.offset + slot;
        self.selected = position;
        hit.map(|button| {
            self.focused_button = button;
            TableEvent::Activate { position, button }
        })
    }
}

/// Transient wrapper pairing the table state with the list owner.
///
/// Used for rendering, input, and activation alike.
pub struct UserTable<'a> {
    state: &'a mut UserTableState,
    owner: &'a UserList,
}

impl<'a> UserTable<'a> {
    pub fn new(state: &'a mut UserTableState, owner: &'a UserList) -> Self {
        Self { state, owner }
    }

    /// Fire `button` on the row for `position`.
    ///
    /// Several events can arrive between frames, so the selection may have
    /// left the rows bound by the last render. In that case the window scrolls
    /// to `position` and rows are rebound before the tap. Returns false only
    /// when `position` is past the end of the list.
    pub fn activate(&mut self, position: usize, button: RowButton) -> bool {
        if position >= self.owner.user_count() {
            return false;
        }
        if self.state.visible_row(position).is_none() {
            let visible = self.state.visible;
            self.state.scroll_to(position, visible);
            self.bind_visible(visible);
        }
        match self.state.visible_row(position) {
            Some(row) => {
                row.tap(button);
                true
            }
            None => false,
        }
    }

    /// Recycle the pool and bind one row per position in the current window.
    fn bind_visible(&mut self, visible: usize) {
        self.state.pool.recycle_all();

        let selected = self.state.selected;
        let focused_button = self.state.focused_button;
        let offset = self.state.offset;
        let end = (offset + visible).min(self.owner.user_count());

        for position in offset..end {
            let Some(row) = self.owner.row_for(&mut self.state.pool, position) else {
                break;
            };
            row.highlighted = position == selected;
            row.focused_button = focused_button;
        }
    }

    fn select_next(&mut self) {
        let count = self.owner.user_count();
        if count > 0 {
            self.state.selected = (self.state.selected + 1).min(count - 1);
        }
    }

    fn activate_selected(&self, button: RowButton) -> Option<TableEvent> {
        (self.owner.user_count() > 0).then_some(TableEvent::Activate {
            position: self.state.selected,
            button,
        })
    }
}

impl EventHandler for UserTable<'_> {
    type Event = TableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TableEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.state.select_previous();
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.select_next();
                None
            }
            TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::Tab => {
                self.state.focused_button = self.state.focused_button.toggle();
                None
            }
            TuiEvent::Submit => self.activate_selected(self.state.focused_button),
            TuiEvent::InputChar('d') => self.activate_selected(RowButton::Delegate),
            TuiEvent::InputChar('c') => self.activate_selected(RowButton::Closure),
            TuiEvent::MouseClick(column, row) => self.state.click(*column, *row),
            _ => None,
        }
    }
}

impl Component for UserTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.owner.user_count() == 0 {
            self.state.pool.recycle_all();
            let empty = Paragraph::new("No users.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let visible = usize::from((area.height / ROW_HEIGHT).max(1));
        self.state.visible = visible;
        let selected = self.state.selected;
        self.state.scroll_to(selected, visible);
        self.bind_visible(visible);

        for (slot, row) in self.state.pool.in_use_mut().iter_mut().enumerate() {
            let y = area.y + slot as u16 * ROW_HEIGHT;
            let row_area = Rect::new(area.x, y, area.width, ROW_HEIGHT).intersection(area);
            row.render(frame, row_area);
        }
    }
}
