// src/controller/mod.rs

pub mod tasks;
pub mod users;

pub use tasks::{BoardColumns, TaskListController};
pub use users::UserListController;
