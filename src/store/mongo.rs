// src/store/mongo.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::StreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::models::{Priority, Status, Task, TaskDraft, TaskPatch, Team, User, UserDraft, UserPatch};
use crate::store::RemoteStore;

const TASKS: &str = "tasks";
const USERS: &str = "users";
const FCM_TOKENS: &str = "FCMTokens";

/// Document-store variant of the remote store, backed by MongoDB collections.
/// Multi-document operations are not atomic; there are no transactions.
pub struct MongoStore {
    db: Database,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    description: String,
    priority: Priority,
    estimated_hours: f64,
    assigned_user: String,
    status: Status,
    due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_token: Option<String>,
}

impl TaskDocument {
    fn from_draft(id: String, draft: &TaskDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            priority: draft.priority,
            estimated_hours: draft.estimated_hours,
            assigned_user: draft.assigned_user.clone(),
            status: draft.status,
            due_date: draft.due_date,
            notification_token: draft.notification_token.clone(),
        }
    }

    fn into_task(self) -> Task {
        Task {
            id: self.id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            estimated_hours: self.estimated_hours,
            assigned_user: self.assigned_user,
            status: self.status,
            due_date: self.due_date,
            notification_token: self.notification_token,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    email: String,
    name: String,
    role: String,
    team: Team,
}

impl UserDocument {
    fn from_draft(id: String, draft: &UserDraft) -> Self {
        Self {
            id,
            email: draft.email.clone(),
            name: draft.name.clone(),
            role: draft.role.clone(),
            team: draft.team,
        }
    }

    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            team: self.team,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PushTokenDocument {
    user_id: String,
    token: String,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, Error> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(database),
        })
    }

    fn tasks(&self) -> Collection<TaskDocument> {
        self.db.collection(TASKS)
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection(USERS)
    }

    /// Build the partial `$set` document for an update. An empty patch and an
    /// unmatched id are errors, mirroring the 400/404 answers of the REST
    /// variant.
    fn set_document<P: Serialize>(patch: &P) -> Result<mongodb::bson::Document, Error> {
        let fields = mongodb::bson::to_document(patch)
            .map_err(|e| Error::Unknown(format!("failed to encode update: {}", e)))?;
        if fields.is_empty() {
            return Err(Error::Remote("no fields to update".to_string()));
        }
        Ok(fields)
    }
}

#[async_trait]
impl RemoteStore for MongoStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, Error> {
        let mut cursor = self.tasks().find(doc! {}).await?;
        let mut tasks = Vec::new();
        while let Some(document) = cursor.next().await {
            tasks.push(document?.into_task());
        }
        Ok(tasks)
    }

    async fn add_task(&self, draft: &TaskDraft) -> Result<String, Error> {
        let id = Uuid::new_v4().to_string();
        let document = TaskDocument::from_draft(id.clone(), draft);
        self.tasks().insert_one(&document).await?;
        Ok(id)
    }

    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<(), Error> {
        let fields = Self::set_document(patch)?;
        let result = self
            .tasks()
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        if result.matched_count == 0 {
            return Err(Error::Remote("task not found".to_string()));
        }
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<(), Error> {
        let result = self.tasks().delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(Error::Remote("task not found".to_string()));
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let mut cursor = self.users().find(doc! {}).await?;
        let mut users = Vec::new();
        while let Some(document) = cursor.next().await {
            users.push(document?.into_user());
        }
        Ok(users)
    }

    async fn add_user(&self, draft: &UserDraft) -> Result<String, Error> {
        let id = Uuid::new_v4().to_string();
        let document = UserDocument::from_draft(id.clone(), draft);
        self.users().insert_one(&document).await?;
        Ok(id)
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<(), Error> {
        let fields = Self::set_document(patch)?;
        let result = self
            .users()
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        if result.matched_count == 0 {
            return Err(Error::Remote("user not found".to_string()));
        }
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), Error> {
        let result = self.users().delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(Error::Remote("user not found".to_string()));
        }
        Ok(())
    }

    async fn store_push_token(&self, user_id: &str, token: &str) -> Result<(), Error> {
        let collection = self.db.collection::<PushTokenDocument>(FCM_TOKENS);
        collection
            .insert_one(&PushTokenDocument {
                user_id: user_id.to_string(),
                token: token.to_string(),
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_document_keeps_only_supplied_fields() {
        let patch = TaskPatch {
            status: Some(Status::Done),
            assigned_user: Some("Ana".to_string()),
            ..TaskPatch::default()
        };
        let fields = MongoStore::set_document(&patch).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get_str("assignedUser").unwrap(), "Ana");
        assert!(fields.get("_id").is_none());
    }

    #[test]
    fn empty_patch_is_rejected() {
        let patch = TaskPatch::default();
        assert!(matches!(
            MongoStore::set_document(&patch),
            Err(Error::Remote(_))
        ));
    }
}
