//! # User Detail Alerts
//!
//! Turns a [`User`] into the title/message pair shown by the alert surface,
//! and defines the surface itself as the [`AlertPresenter`] trait.
//!
//! A record with absent fields can't be shown faithfully. What happens then
//! is a policy decision, not an accident:
//!
//! - [`MissingFieldPolicy::Reject`] (default): `DetailError::IncompleteRecord`
//! - [`MissingFieldPolicy::Placeholder`]: absent fields render as a placeholder
//!
//! ```text
//! User { id: 1, name: "Au", age: 22 }
//!   → Alert { title: "User Information", message: "Id: 1\nName: Au\nAge: 22" }
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::user::{Field, User};

pub const USER_INFO_TITLE: &str = "User Information";
pub const INCOMPLETE_RECORD_TITLE: &str = "Incomplete Record";
pub const DISMISS_LABEL: &str = "OK";
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// What to do when a record is missing one of the displayed fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    #[default]
    Reject,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOptions {
    pub missing_fields: MissingFieldPolicy,
    pub placeholder: String,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    /// The record lacks fields the detail view needs.
    IncompleteRecord { id: Option<i64>, missing: Vec<Field> },
}

impl fmt::Display for DetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailError::IncompleteRecord { id, missing } => {
                let fields = missing
                    .iter()
                    .map(Field::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                match id {
                    Some(id) => write!(f, "user {id} is missing: {fields}"),
                    None => write!(f, "user is missing: {fields}"),
                }
            }
        }
    }
}

impl std::error::Error for DetailError {}

/// A modal title/message pair with a single dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}

impl Alert {
    /// Build the detail alert for a user, honoring the missing-field policy.
    pub fn user_information(user: &User, options: &DetailOptions) -> Result<Self, DetailError> {
        if !user.is_complete() && options.missing_fields == MissingFieldPolicy::Reject {
            return Err(DetailError::IncompleteRecord {
                id: user.id,
                missing: user.missing_fields(),
            });
        }

        let placeholder = options.placeholder.as_str();
        let id = user.id.map(|id| id.to_string());
        let age = user.age.map(|age| age.to_string());
        let message = detail_message(
            id.as_deref().unwrap_or(placeholder),
            user.name.as_deref().unwrap_or(placeholder),
            age.as_deref().unwrap_or(placeholder),
        );

        Ok(Self {
            title: USER_INFO_TITLE.to_string(),
            message,
            dismiss_label: DISMISS_LABEL.to_string(),
        })
    }

    /// The alert shown in place of the detail when a record is rejected.
    pub fn from_error(error: &DetailError) -> Self {
        Self {
            title: INCOMPLETE_RECORD_TITLE.to_string(),
            message: error.to_string(),
            dismiss_label: DISMISS_LABEL.to_string(),
        }
    }
}

fn detail_message(id: &str, name: &str, age: &str) -> String {
    format!("Id: {id}\nName: {name}\nAge: {age}")
}

/// The modal presentation surface.
///
/// Takes `&self` because the owner that presents is itself shared behind an
/// `Rc`; implementations use interior mutability.
pub trait AlertPresenter {
    fn present(&self, alert: Alert);
}
