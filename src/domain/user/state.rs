//! User directory — app-owned lookup from user id to display name.

use super::User;
use crate::shared::UserId;
use std::collections::HashMap;

/// Display text used when a trade references a user id that is no longer
/// listed by the venue.
pub const DELETED_USER_PLACEHOLDER: &str = "[User Deleted]";

/// Name lookup built from a venue user list.
///
/// The app owns instances of this type; missing ids resolve to a placeholder
/// instead of failing the view.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    names: HashMap<UserId, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the directory contents with a freshly fetched user list.
    pub fn replace(&mut self, users: Vec<User>) {
        self.names = users.into_iter().map(|u| (u.id, u.name)).collect();
    }

    /// Record one user (e.g. after a local create).
    pub fn insert(&mut self, user: User) {
        self.names.insert(user.id, user.name);
    }

    /// Resolve a user id to its display name, or the deleted-user
    /// placeholder when the id is unknown.
    pub fn resolve(&self, id: UserId) -> &str {
        self.names
            .get(&id)
            .map(String::as_str)
            .unwrap_or(DELETED_USER_PLACEHOLDER)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|u| (u.id, u.name)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id: UserId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_resolve_known_and_unknown_ids() {
        let dir: UserDirectory = vec![user(1, "Alice"), user(2, "Bob")].into_iter().collect();
        assert_eq!(dir.resolve(UserId(1)), "Alice");
        assert_eq!(dir.resolve(UserId(2)), "Bob");
        assert_eq!(dir.resolve(UserId(99)), DELETED_USER_PLACEHOLDER);
    }

    #[test]
    fn test_replace_discards_previous_entries() {
        let mut dir: UserDirectory = vec![user(1, "Alice")].into_iter().collect();
        dir.replace(vec![user(2, "Bob")]);
        assert_eq!(dir.resolve(UserId(1)), DELETED_USER_PLACEHOLDER);
        assert_eq!(dir.resolve(UserId(2)), "Bob");
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_insert_after_local_create() {
        let mut dir = UserDirectory::new();
        assert!(dir.is_empty());
        dir.insert(user(3, "Carol"));
        assert_eq!(dir.resolve(UserId(3)), "Carol");
    }
}
