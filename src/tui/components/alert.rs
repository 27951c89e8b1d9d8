//! # Alert Overlay
//!
//! The modal surface the user list presents into. Centered over the list,
//! dismissed with Enter, Esc, or a click.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `AlertSlot` lives in `TuiState` (and a clone is the owner's presenter)
//! - `AlertDialog` is created each frame with the borrowed alert

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::detail::{Alert, AlertPresenter};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Holds at most one visible alert. Presenting replaces the current one.
#[derive(Clone, Default)]
pub struct AlertSlot {
    current: Rc<RefCell<Option<Alert>>>,
}

impl AlertSlot {
    pub fn current(&self) -> Option<Alert> {
        self.current.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn dismiss(&self) {
        if self.current.borrow_mut().take().is_some() {
            debug!("Alert dismissed");
        }
    }
}

impl AlertPresenter for AlertSlot {
    fn present(&self, alert: Alert) {
        debug!("Presenting alert: {}", alert.title);
        *self.current.borrow_mut() = Some(alert);
    }
}

/// Events emitted while an alert is open.
#[derive(Debug, PartialEq, Eq)]
pub enum AlertEvent {
    Dismiss,
}

impl EventHandler for AlertSlot {
    type Event = AlertEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AlertEvent> {
        match event {
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::MouseClick(_, _) => {
                self.dismiss();
                Some(AlertEvent::Dismiss)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for an open alert.
pub struct AlertDialog<'a> {
    alert: &'a Alert,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Component for AlertDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let message_lines = self.alert.message.lines().count() as u16;
        // borders + blank line + button line
        let height = message_lines + 4;
        let overlay = centered_rect(60, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.alert.title))
            .title_alignment(Alignment::Center)
            .title_bottom(
                Line::from(format!(" {} ", self.alert.dismiss_label))
                    .style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
                    .centered(),
            )
            .padding(Padding::horizontal(1));

        let body = Paragraph::new(self.alert.message.as_str())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// Center a rect of `percent_x` width and fixed `height` within `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detail::DetailOptions;
    use crate::core::user::User;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sample_alert() -> Alert {
        Alert::user_information(&User::new(1, "Au", 22), &DetailOptions::default()).unwrap()
    }

    #[test]
    fn test_present_then_dismiss() {
        let slot = AlertSlot::default();
        assert!(!slot.is_open());

        slot.present(sample_alert());
        assert_eq!(slot.current(), Some(sample_alert()));

        slot.dismiss();
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let slot = AlertSlot::default();
        let presenter = slot.clone();
        presenter.present(sample_alert());
        assert!(slot.is_open());
    }

    #[test]
    fn test_enter_esc_and_click_dismiss() {
        for event in [TuiEvent::Submit, TuiEvent::Escape, TuiEvent::MouseClick(0, 0)] {
            let mut slot = AlertSlot::default();
            slot.present(sample_alert());
            assert_eq!(slot.handle_event(&event), Some(AlertEvent::Dismiss));
            assert!(!slot.is_open());
        }
    }

    #[test]
    fn test_other_keys_keep_alert_open() {
        let mut slot = AlertSlot::default();
        slot.present(sample_alert());
        assert_eq!(slot.handle_event(&TuiEvent::InputChar('q')), None);
        assert!(slot.is_open());
    }

    #[test]
    fn test_dialog_renders_title_message_and_button() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let alert = sample_alert();

        terminal
            .draw(|f| AlertDialog::new(&alert).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("User Information"));
        assert!(text.contains("Id: 1"));
        assert!(text.contains("Name: Au"));
        assert!(text.contains("Age: 22"));
        assert!(text.contains(" OK "));
    }
}
