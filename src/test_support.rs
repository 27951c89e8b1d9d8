//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::buffer::Buffer;

use crate::core::detail::{Alert, AlertPresenter};
use crate::core::user::User;
use crate::tui::components::user_row::InfoTapDelegate;

/// Records every user it is notified about.
#[derive(Default)]
pub struct RecordingDelegate {
    pub taps: RefCell<Vec<User>>,
}

impl InfoTapDelegate for RecordingDelegate {
    fn did_tap_info(&self, user: &User) {
        self.taps.borrow_mut().push(user.clone());
    }
}

/// Presenter that keeps every alert; clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub alerts: Rc<RefCell<Vec<Alert>>>,
}

impl AlertPresenter for RecordingPresenter {
    fn present(&self, alert: Alert) {
        self.alerts.borrow_mut().push(alert);
    }
}

impl RecordingPresenter {
    pub fn messages(&self) -> Vec<String> {
        self.alerts.borrow().iter().map(|a| a.message.clone()).collect()
    }
}

/// Flatten a rendered buffer into one string of cell symbols.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
