//! # UserList (List Owner)
//!
//! Holds the user records, supplies a bound row per position, and reacts to
//! either row channel by presenting the tapped user's details.
//!
//! ## Wiring
//!
//! ```text
//!            row_for(pool, p)
//! UserList ────────────────────▶ UserRow
//!    ▲   bind(users[p])               │
//!    │   delegate    = Weak<Self>     │ Delegate button
//!    │   on_info_tap = |u| weak.show  │ Closure button
//!    └────────────────────────────────┘
//! ```
//!
//! The owner is built with `Rc::new_cyclic` so it can hand rows a `Weak` to
//! itself. Rows never keep the owner alive; once it is dropped both channels
//! go quiet.

use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::core::detail::{Alert, AlertPresenter, DetailError, DetailOptions};
use crate::core::user::{User, into_shared};

use super::row_pool::RowPool;
use super::user_row::{InfoTapDelegate, UserRow};

pub struct UserList {
    users: Vec<Rc<User>>,
    presenter: Box<dyn AlertPresenter>,
    detail: DetailOptions,
    this: Weak<UserList>,
}

impl UserList {
    pub fn new(users: Vec<User>, presenter: Box<dyn AlertPresenter>, detail: DetailOptions) -> Rc<Self> {
        info!(
            "User list created with {} users (missing fields: {:?})",
            users.len(),
            detail.missing_fields
        );
        Rc::new_cyclic(|this| Self {
            users: into_shared(users),
            presenter,
            detail,
            this: this.clone(),
        })
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn user(&self, position: usize) -> Option<&User> {
        self.users.get(position).map(Rc::as_ref)
    }

    /// Dequeue a row from `pool` and bind it to the user at `position`.
    ///
    /// Both channels are overwritten, so whatever the row was bound to
    /// before is gone. Returns `None` past the end of the list.
    pub fn row_for<'p>(&self, pool: &'p mut RowPool, position: usize) -> Option<&'p mut UserRow> {
        let user = self.users.get(position)?;
        let row = pool.dequeue();
        self.configure_row(row, Rc::clone(user));
        Some(row)
    }

    fn configure_row(&self, row: &mut UserRow, user: Rc<User>) {
        row.bind(user);

        let delegate: Weak<dyn InfoTapDelegate> = self.this.clone();
        row.delegate = Some(delegate);

        let owner = self.this.clone();
        row.on_info_tap = Some(Box::new(move |user: Option<&User>| {
            let Some(owner) = owner.upgrade() else {
                return;
            };
            if let Some(user) = user {
                owner.present_or_report(user);
            }
        }));
    }

    /// Present the detail alert for `user`.
    pub fn show_detail(&self, user: &User) -> Result<(), DetailError> {
        let alert = Alert::user_information(user, &self.detail)?;
        debug!("Presenting detail for user {:?}", user.id);
        self.presenter.present(alert);
        Ok(())
    }

    /// Channel entry point: failures become an error alert instead of a crash.
    fn present_or_report(&self, user: &User) {
        if let Err(e) = self.show_detail(user) {
            warn!("Cannot show user detail: {}", e);
            self.presenter.present(Alert::from_error(&e));
        }
    }
}

impl InfoTapDelegate for UserList {
    fn did_tap_info(&self, user: &User) {
        self.present_or_report(user);
    }
}
