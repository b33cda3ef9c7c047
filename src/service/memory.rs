//! In-memory user store

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::UserService;
use crate::model::User;

#[derive(Debug, Default)]
struct UserTable {
    users: Vec<User>,
    /// Last id assigned by the store; client-supplied ids never move it
    counter: i64,
}

impl UserTable {
    /// Next unused id above the counter, `None` once the id space is spent
    fn next_id(&mut self) -> Option<i64> {
        loop {
            self.counter = self.counter.checked_add(1)?;
            if self.position(self.counter).is_none() {
                return Some(self.counter);
            }
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// User store backed by a `Vec` behind a `RwLock`
///
/// Every trait method takes the lock once, so each call is atomic on its own.
/// Sequences of calls (check name, then save) are not.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    table: RwLock<UserTable>,
}

impl InMemoryUserService {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo users
    pub fn with_dummy_users() -> Self {
        let service = Self::new();
        service.populate_dummy_users();
        service
    }

    /// The four users the demo endpoint installs
    pub fn dummy_users() -> Vec<User> {
        vec![
            User::new(1, "Sam", 30, 70000.0),
            User::new(2, "Tom", 40, 50000.0),
            User::new(3, "Jerome", 45, 30000.0),
            User::new(4, "Silvia", 50, 40000.0),
        ]
    }

    fn read(&self) -> RwLockReadGuard<'_, UserTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserService for InMemoryUserService {
    fn find_all_users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    fn find_by_id(&self, id: i64) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<User> {
        self.read()
            .users
            .iter()
            .find(|u| names_match(&u.name, name))
            .cloned()
    }

    fn save_user(&self, mut user: User) -> Option<User> {
        let mut table = self.write();
        if user.id == 0 {
            user.id = table.next_id()?;
        } else if table.position(user.id).is_some() {
            return None;
        }
        debug!(id = user.id, "stored user");
        table.users.push(user.clone());
        Some(user)
    }

    fn update_user(&self, user: User) {
        let mut table = self.write();
        if let Some(index) = table.position(user.id) {
            table.users[index] = user;
        }
    }

    fn delete_user_by_id(&self, id: i64) {
        let mut table = self.write();
        if let Some(index) = table.position(id) {
            table.users.remove(index);
        }
    }

    fn delete_all_users(&self) {
        self.write().users.clear();
    }

    fn populate_dummy_users(&self) {
        let users = Self::dummy_users();
        let mut table = self.write();
        table.counter = users.iter().map(|u| u.id).max().unwrap_or(0);
        table.users = users;
    }
}

/// Unicode-aware case-insensitive comparison
fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
