//! User resource

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored user record
///
/// `id` may be omitted on create; the store assigns one. The XML root
/// element is `<User>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub salary: f64,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, age: i32, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            salary,
        }
    }

    /// Overwrite the mutable fields from `other`, keeping `self.id`
    pub fn apply_update(&mut self, other: &User) {
        self.name = other.name.clone();
        self.age = other.age;
        self.salary = other.salary;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User [id={}, name={}, age={}, salary={}]",
            self.id, self.name, self.age, self.salary
        )
    }
}

/// Wrapper giving a user collection its XML shape: `<List><item>..</item></List>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename = "List")]
pub struct UserList {
    #[serde(rename = "item", default)]
    pub items: Vec<User>,
}

impl From<Vec<User>> for UserList {
    fn from(items: Vec<User>) -> Self {
        Self { items }
    }
}
