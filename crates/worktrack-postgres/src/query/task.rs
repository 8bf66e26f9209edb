//! Task repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewTask, Task, UpdateTask};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for task operations, scoped to the owning user.
pub trait TaskRepository {
    /// Lists the user's tasks, newest first.
    fn list_tasks(&mut self, user_id: i64) -> impl Future<Output = PgResult<Vec<Task>>> + Send;

    /// Creates a task for the user.
    fn create_task(&mut self, new_task: NewTask) -> impl Future<Output = PgResult<Task>> + Send;

    /// Applies a partial update to one of the user's tasks.
    fn update_task(
        &mut self,
        task_id: i64,
        user_id: i64,
        changes: UpdateTask,
    ) -> impl Future<Output = PgResult<Option<Task>>> + Send;

    /// Deletes one of the user's tasks, returning whether a row was removed.
    fn delete_task(
        &mut self,
        task_id: i64,
        user_id: i64,
    ) -> impl Future<Output = PgResult<bool>> + Send;

    /// Deletes every task owned by the user, returning the number removed.
    fn delete_all_tasks(&mut self, user_id: i64) -> impl Future<Output = PgResult<usize>> + Send;
}

impl TaskRepository for PgConnection {
    async fn list_tasks(&mut self, user_id: i64) -> PgResult<Vec<Task>> {
        use schema::tasks::{self, dsl};

        tasks::table
            .filter(dsl::user_id.eq(user_id))
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(Task::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn create_task(&mut self, mut new_task: NewTask) -> PgResult<Task> {
        use schema::tasks;

        new_task.text = new_task.text.trim().to_owned();

        diesel::insert_into(tasks::table)
            .values(&new_task)
            .returning(Task::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_task(
        &mut self,
        task_id: i64,
        user_id: i64,
        changes: UpdateTask,
    ) -> PgResult<Option<Task>> {
        use schema::tasks::{self, dsl};

        let target = tasks::table
            .filter(dsl::id.eq(task_id))
            .filter(dsl::user_id.eq(user_id));

        // An empty changeset is rejected by diesel, so fall back to a read.
        if changes.text.is_none() && changes.completed.is_none() {
            return target
                .select(Task::as_select())
                .first(self)
                .await
                .optional()
                .map_err(PgError::from);
        }

        diesel::update(target)
            .set(&changes)
            .returning(Task::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn delete_task(&mut self, task_id: i64, user_id: i64) -> PgResult<bool> {
        use schema::tasks::{self, dsl};

        let target = tasks::table
            .filter(dsl::id.eq(task_id))
            .filter(dsl::user_id.eq(user_id));

        let deleted = diesel::delete(target)
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn delete_all_tasks(&mut self, user_id: i64) -> PgResult<usize> {
        use schema::tasks::{self, dsl};

        diesel::delete(tasks::table.filter(dsl::user_id.eq(user_id)))
            .execute(self)
            .await
            .map_err(PgError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test::{connect, create_user};

    fn new_task(user_id: i64, text: &str) -> NewTask {
        NewTask {
            user_id,
            text: text.to_owned(),
        }
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn other_users_cannot_reach_a_task() -> PgResult<()> {
        let client = connect().await?;
        let mut conn = client.get_connection().await?;
        let owner = create_user(&mut conn).await?;
        let intruder = create_user(&mut conn).await?;

        let task = conn.create_task(new_task(owner.id, "water plants")).await?;
        let toggle = UpdateTask {
            completed: Some(true),
            ..UpdateTask::default()
        };

        assert_eq!(conn.update_task(task.id, intruder.id, toggle).await?, None);
        assert_eq!(
            conn.update_task(task.id, intruder.id, UpdateTask::default()).await?,
            None
        );
        assert!(!conn.delete_task(task.id, intruder.id).await?);
        assert_eq!(conn.delete_all_tasks(intruder.id).await?, 0);

        let tasks = conn.list_tasks(owner.id).await?;
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn toggle_and_delete_all() -> PgResult<()> {
        let client = connect().await?;
        let mut conn = client.get_connection().await?;
        let owner = create_user(&mut conn).await?;
        let neighbour = create_user(&mut conn).await?;

        let task = conn.create_task(new_task(owner.id, "  trim me ")).await?;
        assert_eq!(task.text, "trim me");
        conn.create_task(new_task(owner.id, "second")).await?;
        conn.create_task(new_task(neighbour.id, "theirs")).await?;

        let done = UpdateTask {
            completed: Some(true),
            ..UpdateTask::default()
        };
        let updated = conn.update_task(task.id, owner.id, done).await?;
        assert_eq!(updated.map(|t| (t.completed, t.text)), Some((true, "trim me".to_owned())));

        assert_eq!(conn.delete_all_tasks(owner.id).await?, 2);
        assert!(conn.list_tasks(owner.id).await?.is_empty());
        assert_eq!(conn.list_tasks(neighbour.id).await?.len(), 1);
        Ok(())
    }
}
