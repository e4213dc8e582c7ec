// src/lib.rs
//
// Core of the Workflow task- and user-management application: entity records,
// a remote store adapter with interchangeable REST and MongoDB backends, list
// controllers with derived board views, validation rules, session context and
// push-token registration. The UI layer (out of scope here) drives the
// controllers and renders their errors as transient notifications.

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod session;
pub mod store;
pub mod validation;

pub use config::{Backend, Config};
pub use controller::{TaskListController, UserListController};
pub use error::Error;
pub use session::Session;
pub use store::RemoteStore;
