//! Repository traits implemented for [`PgConnection`].
//!
//! Every data repository takes the owning `user_id` alongside the row id, so a
//! row belonging to another user is indistinguishable from a missing one.
//!
//! [`PgConnection`]: crate::PgConnection

pub mod note;
pub mod reminder;
pub mod task;
pub mod timer;
pub mod user;

pub use note::NoteRepository;
pub use reminder::ReminderRepository;
pub use task::TaskRepository;
pub use timer::TimerRepository;
pub use user::UserRepository;

#[cfg(test)]
pub(crate) mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::UserRepository;
    use crate::model::{NewUser, User};
    use crate::{PgClient, PgConfig, PgConnection, PgError, PgResult, run_pending_migrations};

    /// Connects to `DATABASE_URL` (read from `.env` if present) and applies migrations.
    pub async fn connect() -> PgResult<PgClient> {
        let _ = dotenvy::dotenv();
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| PgError::Config("DATABASE_URL is not set".into()))?;

        let client = PgClient::new(PgConfig::new(database_url))?;
        run_pending_migrations(&client).await?;
        Ok(client)
    }

    /// Creates a user with an email no other test run has used.
    pub async fn create_user(conn: &mut PgConnection) -> PgResult<User> {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);

        let nanos = jiff::Timestamp::now().as_nanosecond();
        let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);
        conn.create_user(NewUser {
            email: format!("owner-{nanos}-{sequence}@example.com"),
            password_hash: "$argon2id$v=19$m=256,t=1,p=1$c2FsdA$ZGlnZXN0".to_owned(),
            name: None,
        })
        .await
    }
}
