//! Example resource: an in-memory employee directory with CRUD handlers.

pub mod handlers;
pub mod store;
pub mod types;

pub use store::EmployeeStore;
pub use types::{Employee, Message};
