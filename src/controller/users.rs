// src/controller/users.rs

use std::sync::Arc;

use log::info;

use crate::error::Error;
use crate::models::{User, UserDraft, UserPatch};
use crate::store::RemoteStore;
use crate::validation::require_non_empty;

/// Same pattern as the task controller, for the user roster: the in-memory
/// list is authoritative for the current view session, every mutation goes
/// through the store first, and failures leave the list untouched. Team
/// validity is enforced by the `Team` enum; email format is not checked in
/// this flow (that check lives in the registration boundary only).
pub struct UserListController {
    store: Arc<dyn RemoteStore>,
    users: Vec<User>,
}

impl UserListController {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            users: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<(), Error> {
        self.users = self.store.list_users().await?;
        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub async fn add(&mut self, draft: UserDraft) -> Result<String, Error> {
        require_non_empty("email", &draft.email)?;
        require_non_empty("name", &draft.name)?;
        require_non_empty("role", &draft.role)?;
        let id = self.store.add_user(&draft).await?;
        info!("user created: {}", id);
        self.users.push(draft.into_user(id.clone()));
        Ok(id)
    }

    pub async fn edit(&mut self, id: &str, patch: UserPatch) -> Result<(), Error> {
        if let Some(email) = &patch.email {
            require_non_empty("email", email)?;
        }
        if let Some(name) = &patch.name {
            require_non_empty("name", name)?;
        }
        if let Some(role) = &patch.role {
            require_non_empty("role", role)?;
        }
        self.store.update_user(id, &patch).await?;
        if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
            user.apply(patch);
        }
        info!("user updated: {}", id);
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), Error> {
        self.store.delete_user(id).await?;
        self.users.retain(|u| u.id != id);
        info!("user deleted: {}", id);
        Ok(())
    }
}
