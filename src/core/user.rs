//! # User Records
//!
//! The only domain entity. Every field is optional: nothing upstream
//! guarantees a record is complete, so consumers have to decide what to do
//! with gaps (see [`crate::core::detail`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// A field of a [`User`] that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Age,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Id => write!(f, "id"),
            Field::Name => write!(f, "name"),
            Field::Age => write!(f, "age"),
        }
    }
}

impl User {
    pub fn new(id: i64, name: &str, age: i64) -> Self {
        Self {
            id: Some(id),
            name: Some(name.to_string()),
            age: Some(age),
        }
    }

    /// Fields that are `None`, in display order.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push(Field::Id);
        }
        if self.name.is_none() {
            missing.push(Field::Name);
        }
        if self.age.is_none() {
            missing.push(Field::Age);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.id.is_some() && self.name.is_some() && self.age.is_some()
    }
}

/// The built-in roster shown when the config file doesn't supply one.
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "Nguyễn Hải Âu", 22),
        User::new(2, "Phạm Phương Toán", 22),
        User::new(3, "Đào Thanh Huy", 22),
        User::new(4, "Danh Thái Bình", 23),
        User::new(5, "Trần Trân", 21),
    ]
}

/// Wrap records in shared handles so rows can borrow them without owning the list.
pub fn into_shared(users: Vec<User>) -> Vec<Rc<User>> {
    users.into_iter().map(Rc::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_roster_has_five_complete_users() {
        let users = default_users();
        assert_eq!(users.len(), 5);
        assert!(users.iter().all(User::is_complete));
        assert_eq!(users[0].name.as_deref(), Some("Nguyễn Hải Âu"));
        assert_eq!(users[3].age, Some(23));
    }

    #[test]
    fn test_default_roster_ids_are_unique() {
        let ids: HashSet<i64> = default_users().iter().filter_map(|u| u.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_missing_fields_in_display_order() {
        let user = User {
            id: None,
            name: Some("Au".to_string()),
            age: None,
        };
        assert_eq!(user.missing_fields(), vec![Field::Id, Field::Age]);
        assert!(!user.is_complete());
    }

    #[test]
    fn test_empty_user_is_missing_everything() {
        assert_eq!(
            User::default().missing_fields(),
            vec![Field::Id, Field::Name, Field::Age]
        );
    }

    #[test]
    fn test_sparse_user_deserializes() {
        let user: User = toml::from_str("name = \"Solo\"").unwrap();
        assert_eq!(user.name.as_deref(), Some("Solo"));
        assert!(user.id.is_none());
        assert!(user.age.is_none());
    }
}
