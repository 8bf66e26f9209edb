//! Timer repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewTimer, Timer, UpdateTimer};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for countdown timers, scoped to the owning user.
pub trait TimerRepository {
    /// Lists the user's timers, newest first.
    fn list_timers(&mut self, user_id: i64) -> impl Future<Output = PgResult<Vec<Timer>>> + Send;

    /// Creates a timer for the user.
    fn create_timer(&mut self, new_timer: NewTimer)
    -> impl Future<Output = PgResult<Timer>> + Send;

    /// Records progress on one of the user's timers.
    fn update_timer(
        &mut self,
        timer_id: i64,
        user_id: i64,
        changes: UpdateTimer,
    ) -> impl Future<Output = PgResult<Option<Timer>>> + Send;

    /// Deletes one of the user's timers, returning whether a row was removed.
    fn delete_timer(
        &mut self,
        timer_id: i64,
        user_id: i64,
    ) -> impl Future<Output = PgResult<bool>> + Send;

    /// Deletes every timer owned by the user, returning the number removed.
    fn delete_all_timers(&mut self, user_id: i64)
    -> impl Future<Output = PgResult<usize>> + Send;
}

impl TimerRepository for PgConnection {
    async fn list_timers(&mut self, user_id: i64) -> PgResult<Vec<Timer>> {
        use schema::timers::{self, dsl};

        timers::table
            .filter(dsl::user_id.eq(user_id))
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(Timer::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn create_timer(&mut self, new_timer: NewTimer) -> PgResult<Timer> {
        use schema::timers;

        diesel::insert_into(timers::table)
            .values(&new_timer)
            .returning(Timer::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_timer(
        &mut self,
        timer_id: i64,
        user_id: i64,
        changes: UpdateTimer,
    ) -> PgResult<Option<Timer>> {
        use schema::timers::{self, dsl};

        let target = timers::table
            .filter(dsl::id.eq(timer_id))
            .filter(dsl::user_id.eq(user_id));

        diesel::update(target)
            .set(&changes)
            .returning(Timer::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn delete_timer(&mut self, timer_id: i64, user_id: i64) -> PgResult<bool> {
        use schema::timers::{self, dsl};

        let target = timers::table
            .filter(dsl::id.eq(timer_id))
            .filter(dsl::user_id.eq(user_id));

        let deleted = diesel::delete(target)
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn delete_all_timers(&mut self, user_id: i64) -> PgResult<usize> {
        use schema::timers::{self, dsl};

        diesel::delete(timers::table.filter(dsl::user_id.eq(user_id)))
            .execute(self)
            .await
            .map_err(PgError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test::{connect, create_user};

    #[tokio::test]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn timers_are_scoped_to_owner() -> PgResult<()> {
        let client = connect().await?;
        let mut conn = client.get_connection().await?;
        let owner = create_user(&mut conn).await?;
        let intruder = create_user(&mut conn).await?;

        let timer = conn
            .create_timer(NewTimer {
                user_id: owner.id,
                name: "tea".to_owned(),
                duration: 180,
                remaining: 180,
            })
            .await?;
        let progress = UpdateTimer {
            remaining: 0,
            is_running: false,
            is_completed: true,
        };

        assert_eq!(
            conn.update_timer(timer.id, intruder.id, progress.clone()).await?,
            None
        );
        assert!(!conn.delete_timer(timer.id, intruder.id).await?);
        assert_eq!(conn.delete_all_timers(intruder.id).await?, 0);

        let updated = conn.update_timer(timer.id, owner.id, progress).await?;
        assert_eq!(updated.map(|t| (t.remaining, t.is_completed)), Some((0, true)));
        assert!(conn.delete_timer(timer.id, owner.id).await?);
        Ok(())
    }
}
