//! Resource types served by the HTTP layer
//!
//! - `User`: the only stored resource
//! - `Customer`: a payload shape for the demo customer endpoints
//! - `ErrorPayload`: body of every failure response

mod customer;
mod error;
mod user;

pub use customer::Customer;
pub use error::ErrorPayload;
pub use user::{User, UserList};
