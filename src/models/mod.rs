// src/models/mod.rs

pub mod task;
pub mod user;

pub use task::{Priority, Status, Task, TaskDraft, TaskPatch};
pub use user::{Team, User, UserDraft, UserPatch};
