//! Reminder repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewReminder, Reminder, UpdateReminder};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for reminders, scoped to the owning user.
pub trait ReminderRepository {
    /// Lists the user's reminders, newest first.
    fn list_reminders(
        &mut self,
        user_id: i64,
    ) -> impl Future<Output = PgResult<Vec<Reminder>>> + Send;

    /// Creates a reminder for the user.
    fn create_reminder(
        &mut self,
        new_reminder: NewReminder,
    ) -> impl Future<Output = PgResult<Reminder>> + Send;

    /// Reschedules or toggles one of the user's reminders.
    fn update_reminder(
        &mut self,
        reminder_id: i64,
        user_id: i64,
        changes: UpdateReminder,
    ) -> impl Future<Output = PgResult<Option<Reminder>>> + Send;

    /// Deletes one of the user's reminders, returning whether a row was removed.
    fn delete_reminder(
        &mut self,
        reminder_id: i64,
        user_id: i64,
    ) -> impl Future<Output = PgResult<bool>> + Send;

    /// Deletes every reminder owned by the user, returning the number removed.
    fn delete_all_reminders(
        &mut self,
        user_id: i64,
    ) -> impl Future<Output = PgResult<usize>> + Send;
}

impl ReminderRepository for PgConnection {
    async fn list_reminders(&mut self, user_id: i64) -> PgResult<Vec<Reminder>> {
        use schema::reminders::{self, dsl};

        reminders::table
            .filter(dsl::user_id.eq(user_id))
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(Reminder::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn create_reminder(&mut self, new_reminder: NewReminder) -> PgResult<Reminder> {
        use schema::reminders;

        diesel::insert_into(reminders::table)
            .values(&new_reminder)
            .returning(Reminder::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_reminder(
        &mut self,
        reminder_id: i64,
        user_id: i64,
        changes: UpdateReminder,
    ) -> PgResult<Option<Reminder>> {
        use schema::reminders::{self, dsl};

        let target = reminders::table
            .filter(dsl::id.eq(reminder_id))
            .filter(dsl::user_id.eq(user_id));

        diesel::update(target)
            .set(&changes)
            .returning(Reminder::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn delete_reminder(&mut self, reminder_id: i64, user_id: i64) -> PgResult<bool> {
        use schema::reminders::{self, dsl};

        let target = reminders::table
            .filter(dsl::id.eq(reminder_id))
            .filter(dsl::user_id.eq(user_id));

        let deleted = diesel::delete(target)
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn delete_all_reminders(&mut self, user_id: i64) -> PgResult<usize> {
        use schema::reminders::{self, dsl};

        diesel::delete(reminders::table.filter(dsl::user_id.eq(user_id)))
            .execute(self)
            .await
            .map_err(PgError::from)
    }
}
