//! Record store
//!
//! The `UserService` trait is the seam between the HTTP handlers and the
//! storage. `InMemoryUserService` is the only implementation: a lock-guarded
//! vector living for the lifetime of the process.

mod memory;

pub use memory::InMemoryUserService;

use crate::model::User;

/// Operations the HTTP layer performs on users
///
/// No operation signals an error; absence is `None`.
pub trait UserService: Send + Sync {
    /// All users in insertion order
    fn find_all_users(&self) -> Vec<User>;

    fn find_by_id(&self, id: i64) -> Option<User>;

    /// Case-insensitive name lookup (Unicode case folding)
    fn find_by_name(&self, name: &str) -> Option<User>;

    /// Insert `user`, assigning an id when `user.id` is zero
    ///
    /// Returns the record as stored, or `None` when the explicit id is
    /// already taken or no id is left to assign.
    fn save_user(&self, user: User) -> Option<User>;

    /// Replace the stored record carrying `user.id`
    fn update_user(&self, user: User);

    fn delete_user_by_id(&self, id: i64);

    fn delete_all_users(&self);

    /// Reset the store to the demo users
    fn populate_dummy_users(&self);

    /// Whether a user with the same name is already stored
    fn is_user_exist(&self, user: &User) -> bool {
        self.find_by_name(&user.name).is_some()
    }
}
