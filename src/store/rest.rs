// src/store/rest.rs

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{Task, TaskDraft, TaskPatch, User, UserDraft, UserPatch};
use crate::store::RemoteStore;

/// REST variant of the remote store: a JSON API reachable under one base URL.
pub struct RestStore {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

/// `{id, ...fields}` body for the change endpoints.
#[derive(Serialize)]
struct ChangeRequest<'a, P: Serialize> {
    id: &'a str,
    #[serde(flatten)]
    fields: &'a P,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreTokenRequest<'a> {
    user_id: &'a str,
    token: &'a str,
}

impl RestStore {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = Client::builder()
            .build()
            .map_err(|e| Error::Unknown(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// 400 and 404 carry an application error message in the body; any other
    /// non-2xx status becomes a generic remote error.
    async fn check(resp: Response) -> Result<Response, Error> {
        match resp.status() {
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                let message = resp.text().await.unwrap_or_default();
                Err(Error::Remote(message))
            }
            status if !status.is_success() => {
                Err(Error::Remote(format!("request failed with status {}", status)))
            }
            _ => Ok(resp),
        }
    }

    async fn list<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<Vec<T>, Error> {
        let resp = self.http.get(self.url(path)).send().await?;
        let resp = Self::check(resp).await?;
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| Error::Unknown(format!("malformed response body: {}", e)))
    }

    async fn create<B: Serialize>(&self, path: &str, body: &B) -> Result<String, Error> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        let resp = Self::check(resp).await?;
        let created: CreatedResponse = resp
            .json()
            .await
            .map_err(|e| Error::Unknown(format!("malformed response body: {}", e)))?;
        Ok(created.id)
    }

    async fn change<P: Serialize>(&self, path: &str, id: &str, fields: &P) -> Result<(), Error> {
        let resp = self
            .http
            .patch(self.url(path))
            .json(&ChangeRequest { id, fields })
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn remove(&self, path: &str, entity: &str) -> Result<(), Error> {
        let resp = self.http.delete(self.url(path)).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Remote(format!("failed to delete {}", entity)));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, Error> {
        self.list("tasks/alltasks").await
    }

    async fn add_task(&self, draft: &TaskDraft) -> Result<String, Error> {
        self.create("tasks/addtask", draft).await
    }

    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<(), Error> {
        self.change("tasks/changetask", id, patch).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), Error> {
        self.remove(&format!("tasks/{}", id), "task").await
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.list("users/allusers").await
    }

    async fn add_user(&self, draft: &UserDraft) -> Result<String, Error> {
        self.create("users/adduser", draft).await
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<(), Error> {
        self.change("users/changeuser", id, patch).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), Error> {
        self.remove(&format!("users/{}", id), "user").await
    }

    async fn store_push_token(&self, user_id: &str, token: &str) -> Result<(), Error> {
        let resp = self
            .http
            .post(self.url("fcm/store"))
            .json(&StoreTokenRequest { user_id, token })
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
