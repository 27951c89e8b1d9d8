use std::cell::RefCell;
use std::rc::{Rc, Weak};

use passdata::core::detail::{Alert, AlertPresenter, DetailError, DetailOptions};
use passdata::core::user::{Field, User, default_users};
use passdata::tui::components::{InfoTapDelegate, RowButton, RowPool, UserList, UserRow};

// ============================================================================
// Helpers
// ============================================================================

#[derive(Clone, Default)]
struct Recorder {
    alerts: Rc<RefCell<Vec<Alert>>>,
}

impl AlertPresenter for Recorder {
    fn present(&self, alert: Alert) {
        self.alerts.borrow_mut().push(alert);
    }
}

fn owner(users: Vec<User>) -> (Rc<UserList>, Recorder) {
    let recorder = Recorder::default();
    let owner = UserList::new(users, Box::new(recorder.clone()), DetailOptions::default());
    (owner, recorder)
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_delegate_button_end_to_end() {
    let (owner, recorder) = owner(vec![User::new(1, "Au", 22)]);
    let mut pool = RowPool::new();

    owner.row_for(&mut pool, 0).unwrap().tap(RowButton::Delegate);

    let alerts = recorder.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "User Information");
    assert_eq!(alerts[0].message, "Id: 1\nName: Au\nAge: 22");
    assert_eq!(alerts[0].dismiss_label, "OK");
}

#[test]
fn test_both_buttons_report_the_same_user() {
    let (owner, recorder) = owner(default_users());
    let mut pool = RowPool::new();
    let row = owner.row_for(&mut pool, 4).unwrap();

    row.tap(RowButton::Delegate);
    row.tap(RowButton::Closure);

    let alerts = recorder.alerts.borrow();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0], alerts[1]);
    assert_eq!(alerts[0].message, "Id: 5\nName: Trần Trân\nAge: 21");
}

#[test]
fn test_every_position_binds_its_user() {
    let (owner, _) = owner(default_users());
    let mut pool = RowPool::new();
    for position in 0..owner.user_count() {
        let row = owner.row_for(&mut pool, position).unwrap();
        assert_eq!(row.user(), owner.user(position));
    }
    assert_eq!(pool.in_use().len(), owner.user_count());
}

// ============================================================================
// Rebinding and lifetimes
// ============================================================================

#[test]
fn test_recycled_row_reports_new_binding() {
    let (owner, recorder) = owner(default_users());
    let mut pool = RowPool::new();
    owner.row_for(&mut pool, 0).unwrap();
    pool.recycle_all();

    let row = owner.row_for(&mut pool, 2).unwrap();
    row.tap(RowButton::Closure);

    let alerts = recorder.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].message.starts_with("Id: 3\n"));
}

#[test]
fn test_row_outliving_owner_is_silent() {
    let (owner, recorder) = owner(default_users());
    let mut pool = RowPool::new();
    owner.row_for(&mut pool, 1).unwrap();
    drop(owner);

    for row in pool.in_use() {
        row.tap(RowButton::Delegate);
        row.tap(RowButton::Closure);
    }
    assert!(recorder.alerts.borrow().is_empty());
}

#[test]
fn test_custom_delegate_on_unbound_row() {
    struct Counter(RefCell<usize>);
    impl InfoTapDelegate for Counter {
        fn did_tap_info(&self, _user: &User) {
            *self.0.borrow_mut() += 1;
        }
    }

    let counter = Rc::new(Counter(RefCell::new(0)));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);

    let mut row = UserRow::new();
    row.delegate = Some(Rc::downgrade(&counter) as Weak<dyn InfoTapDelegate>);
    row.on_info_tap = Some(Box::new(move |user: Option<&User>| {
        log.borrow_mut().push(user.is_some());
    }));

    row.tap(RowButton::Delegate);
    row.tap(RowButton::Closure);

    assert_eq!(*counter.0.borrow(), 0);
    assert_eq!(*seen.borrow(), vec![false]);
}

// ============================================================================
// Missing fields
// ============================================================================

#[test]
fn test_show_detail_surfaces_incomplete_record() {
    let (owner, recorder) = owner(vec![]);
    let user = User {
        id: Some(1),
        name: Some("Au".to_string()),
        age: None,
    };

    let result = owner.show_detail(&user);

    assert_eq!(
        result,
        Err(DetailError::IncompleteRecord {
            id: Some(1),
            missing: vec![Field::Age],
        })
    );
    assert!(recorder.alerts.borrow().is_empty());
}
