// src/controller/tasks.rs

use std::sync::Arc;

use log::info;

use crate::error::Error;
use crate::models::{Status, Task, TaskDraft, TaskPatch};
use crate::session::Session;
use crate::store::RemoteStore;
use crate::validation;

/// Pure partition of the current task list by status. Order within a column
/// follows the underlying collection order.
#[derive(Debug, Default)]
pub struct BoardColumns<'a> {
    pub backlog: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

/// Owns the in-memory task collection for the lifetime of the current view
/// session and mediates every mutation through the remote store. Insertion
/// order is display order. A failed operation leaves the collection exactly
/// as it was; there are no retries and no rollback to perform because nothing
/// is applied locally until the store has confirmed.
pub struct TaskListController {
    store: Arc<dyn RemoteStore>,
    tasks: Vec<Task>,
}

impl TaskListController {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            tasks: Vec::new(),
        }
    }

    /// Replace the local collection with the store's current contents.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        self.tasks = self.store.list_tasks().await?;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Validate, create remotely, then append the record under the id the
    /// store assigned. The session's device push token is attached to the
    /// draft when the draft carries none of its own.
    pub async fn add(&mut self, mut draft: TaskDraft, session: &Session) -> Result<String, Error> {
        validation::validate_due_date(draft.due_date)?;
        if draft.notification_token.is_none() {
            draft.notification_token = session.push_token().map(str::to_string);
        }
        let id = self.store.add_task(&draft).await?;
        info!("task created: {}", id);
        self.tasks.push(draft.into_task(id.clone()));
        Ok(id)
    }

    /// Partial update: supplied fields overwrite, everything else is
    /// retained, both remotely and in the local record.
    pub async fn edit(&mut self, id: &str, patch: TaskPatch) -> Result<(), Error> {
        if let Some(due_date) = patch.due_date {
            validation::validate_due_date(due_date)?;
        }
        self.store.update_task(id, &patch).await?;
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.apply(patch);
        }
        info!("task updated: {}", id);
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), Error> {
        self.store.delete_task(id).await?;
        self.tasks.retain(|t| t.id != id);
        info!("task deleted: {}", id);
        Ok(())
    }

    /// Every task lands in exactly one column, determined solely by its
    /// status.
    pub fn column_view(&self) -> BoardColumns<'_> {
        let mut columns = BoardColumns::default();
        for task in &self.tasks {
            match task.status {
                Status::Backlog => columns.backlog.push(task),
                Status::InProgress => columns.in_progress.push(task),
                Status::Done => columns.done.push(task),
            }
        }
        columns
    }

    /// Sum of estimated hours over the tasks assigned to `user` in `status`;
    /// 0.0 when no task matches.
    pub fn hours_by_user_and_status(&self, user: &str, status: Status) -> f64 {
        self.tasks
            .iter()
            .filter(|t| t.assigned_user == user && t.status == status)
            .map(|t| t.estimated_hours)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::FakeStore;
    use crate::models::Priority;
    use chrono::{Duration, Local, NaiveDate};

    fn due_in(days: i64) -> NaiveDate {
        Local::now().date_naive() + Duration::days(days)
    }

    fn draft(name: &str, user: &str, status: Status, hours: f64) -> TaskDraft {
        TaskDraft {
            name: name.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            estimated_hours: hours,
            assigned_user: user.to_string(),
            status,
            due_date: due_in(2),
            notification_token: None,
        }
    }

    fn controller(store: &Arc<FakeStore>) -> TaskListController {
        TaskListController::new(store.clone() as Arc<dyn RemoteStore>)
    }

    fn session() -> Session {
        Session::sign_in("u1")
    }

    #[tokio::test]
    async fn add_appends_the_record_under_the_store_assigned_id() {
        let store = Arc::new(FakeStore::new());
        store.force_next_id("t1");
        let mut tasks = controller(&store);

        let mut d = draft("Write spec", "Ana", Status::Backlog, 4.0);
        d.priority = Priority::High;
        let id = tasks.add(d, &session()).await.unwrap();

        assert_eq!(id, "t1");
        assert_eq!(tasks.tasks().len(), 1);
        let task = &tasks.tasks()[0];
        assert_eq!(task.id, "t1");
        assert_eq!(task.name, "Write spec");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.estimated_hours, 4.0);
        assert_eq!(task.assigned_user, "Ana");

        let columns = tasks.column_view();
        assert!(columns.backlog.iter().any(|t| t.id == "t1"));
        assert!(columns.in_progress.is_empty());
        assert!(columns.done.is_empty());
    }

    #[tokio::test]
    async fn past_due_date_is_rejected_before_the_store_is_called() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);

        let mut d = draft("Late", "Ana", Status::Backlog, 1.0);
        d.due_date = due_in(-1);
        let err = tasks.add(d, &session()).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.calls(), 0);
        assert!(tasks.tasks().is_empty());
    }

    #[tokio::test]
    async fn add_then_delete_restores_the_previous_collection() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);
        tasks
            .add(draft("Existing", "Ana", Status::Done, 1.0), &session())
            .await
            .unwrap();
        let before: Vec<String> = tasks.tasks().iter().map(|t| t.id.clone()).collect();

        let id = tasks
            .add(draft("Transient", "Bia", Status::Backlog, 2.0), &session())
            .await
            .unwrap();
        tasks.delete(&id).await.unwrap();

        let after: Vec<String> = tasks.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn edit_changes_only_the_supplied_fields() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);
        let id = tasks
            .add(draft("Original", "Ana", Status::Backlog, 3.0), &session())
            .await
            .unwrap();

        tasks
            .edit(
                &id,
                TaskPatch {
                    status: Some(Status::InProgress),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();

        let task = &tasks.tasks()[0];
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.name, "Original");
        assert_eq!(task.assigned_user, "Ana");
        assert_eq!(task.estimated_hours, 3.0);
    }

    #[tokio::test]
    async fn edit_validates_a_supplied_due_date() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);
        let id = tasks
            .add(draft("Task", "Ana", Status::Backlog, 3.0), &session())
            .await
            .unwrap();
        let calls_before = store.calls();

        let err = tasks
            .edit(
                &id,
                TaskPatch {
                    due_date: Some(due_in(-1)),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.calls(), calls_before);
        assert_eq!(tasks.tasks()[0].due_date, due_in(2));
    }

    #[tokio::test]
    async fn failed_delete_leaves_the_collection_unchanged() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);
        let id = tasks
            .add(draft("Kept", "Ana", Status::Backlog, 1.0), &session())
            .await
            .unwrap();

        store.fail_with("internal server error");
        let err = tasks.delete(&id).await.unwrap_err();

        assert!(matches!(err, Error::Remote(_)));
        assert_eq!(tasks.tasks().len(), 1);
        assert_eq!(tasks.tasks()[0].id, id);
    }

    #[tokio::test]
    async fn every_task_lands_in_exactly_one_column() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);
        for (name, status) in [
            ("a", Status::Backlog),
            ("b", Status::InProgress),
            ("c", Status::Done),
            ("d", Status::Backlog),
        ] {
            tasks
                .add(draft(name, "Ana", status, 1.0), &session())
                .await
                .unwrap();
        }

        let columns = tasks.column_view();
        let total = columns.backlog.len() + columns.in_progress.len() + columns.done.len();
        assert_eq!(total, tasks.tasks().len());
        assert_eq!(columns.backlog.len(), 2);
        assert_eq!(columns.in_progress.len(), 1);
        assert_eq!(columns.done.len(), 1);
        // Column order follows collection order.
        assert_eq!(columns.backlog[0].name, "a");
        assert_eq!(columns.backlog[1].name, "d");
    }

    #[tokio::test]
    async fn hours_sum_over_matching_user_and_status() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);
        tasks
            .add(draft("a", "Ana", Status::Backlog, 2.0), &session())
            .await
            .unwrap();
        tasks
            .add(draft("b", "Ana", Status::Backlog, 3.5), &session())
            .await
            .unwrap();
        tasks
            .add(draft("c", "Ana", Status::Done, 1.0), &session())
            .await
            .unwrap();
        tasks
            .add(draft("d", "Bia", Status::Backlog, 8.0), &session())
            .await
            .unwrap();

        assert_eq!(tasks.hours_by_user_and_status("Ana", Status::Backlog), 5.5);
        assert_eq!(tasks.hours_by_user_and_status("Ana", Status::Done), 1.0);
        assert_eq!(tasks.hours_by_user_and_status("Bia", Status::Done), 0.0);
        assert_eq!(tasks.hours_by_user_and_status("Caio", Status::Backlog), 0.0);
    }

    #[tokio::test]
    async fn session_push_token_is_attached_when_the_draft_has_none() {
        let store = Arc::new(FakeStore::new());
        let mut tasks = controller(&store);
        let session = Session::sign_in("u1").with_push_token("device-token");

        tasks
            .add(draft("a", "Ana", Status::Backlog, 1.0), &session)
            .await
            .unwrap();
        let mut own_token = draft("b", "Ana", Status::Backlog, 1.0);
        own_token.notification_token = Some("explicit".to_string());
        tasks.add(own_token, &session).await.unwrap();

        assert_eq!(
            tasks.tasks()[0].notification_token.as_deref(),
            Some("device-token")
        );
        assert_eq!(
            tasks.tasks()[1].notification_token.as_deref(),
            Some("explicit")
        );
    }

    #[tokio::test]
    async fn refresh_mirrors_the_store_contents() {
        let store = Arc::new(FakeStore::new());
        let mut writer = controller(&store);
        writer
            .add(draft("shared", "Ana", Status::Backlog, 1.0), &session())
            .await
            .unwrap();

        let mut reader = controller(&store);
        reader.refresh().await.unwrap();
        assert_eq!(reader.tasks().len(), 1);
        assert_eq!(reader.tasks()[0].name, "shared");
    }
}
