// src/store/mod.rs

pub mod mongo;
pub mod rest;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Backend, Config};
use crate::error::Error;
use crate::models::{Task, TaskDraft, TaskPatch, User, UserDraft, UserPatch};

pub use mongo::MongoStore;
pub use rest::RestStore;

/// The durable backend behind the controllers. The REST and document-store
/// variants are functionally equivalent behind this interface; controllers
/// never branch on which one is active.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>, Error>;
    /// Create a task; the store assigns and returns the id.
    async fn add_task(&self, draft: &TaskDraft) -> Result<String, Error>;
    /// Partial merge: only the supplied fields are written.
    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<(), Error>;
    async fn delete_task(&self, id: &str) -> Result<(), Error>;

    async fn list_users(&self) -> Result<Vec<User>, Error>;
    async fn add_user(&self, draft: &UserDraft) -> Result<String, Error>;
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<(), Error>;
    async fn delete_user(&self, id: &str) -> Result<(), Error>;

    /// Store a device push token against a user id for later push delivery.
    async fn store_push_token(&self, user_id: &str, token: &str) -> Result<(), Error>;
}

/// Build the store variant selected by the configuration.
pub async fn connect(config: &Config) -> Result<Arc<dyn RemoteStore>, Error> {
    match config.backend {
        Backend::Rest => Ok(Arc::new(RestStore::new(&config.api_base_url)?)),
        Backend::Mongo => {
            let uri = config.mongo_uri.as_deref().ok_or_else(|| {
                Error::Validation("MONGO_URI must be set for the mongo backend".to_string())
            })?;
            let store = MongoStore::connect(uri, &config.database_name).await?;
            Ok(Arc::new(store))
        }
    }
}
