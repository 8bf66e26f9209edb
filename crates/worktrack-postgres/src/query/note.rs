//! Note repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewNote, Note, UpdateNote};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for note operations, scoped to the owning user.
pub trait NoteRepository {
    /// Lists the user's notes, most recently updated first.
    fn list_notes(&mut self, user_id: i64) -> impl Future<Output = PgResult<Vec<Note>>> + Send;

    /// Creates a note for the user.
    fn create_note(&mut self, new_note: NewNote) -> impl Future<Output = PgResult<Note>> + Send;

    /// Finds one of the user's notes.
    fn find_note(
        &mut self,
        note_id: i64,
        user_id: i64,
    ) -> impl Future<Output = PgResult<Option<Note>>> + Send;

    /// Replaces the title and content of one of the user's notes and sets
    /// `updated_at` to now, even when nothing else changed.
    ///
    /// Returns `None` when the note does not exist or belongs to someone else.
    fn update_note(
        &mut self,
        note_id: i64,
        user_id: i64,
        changes: UpdateNote,
    ) -> impl Future<Output = PgResult<Option<Note>>> + Send;

    /// Deletes one of the user's notes, returning whether a row was removed.
    fn delete_note(
        &mut self,
        note_id: i64,
        user_id: i64,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl NoteRepository for PgConnection {
    async fn list_notes(&mut self, user_id: i64) -> PgResult<Vec<Note>> {
        use schema::notes::{self, dsl};

        notes::table
            .filter(dsl::user_id.eq(user_id))
            .order((dsl::updated_at.desc(), dsl::id.desc()))
            .select(Note::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn create_note(&mut self, new_note: NewNote) -> PgResult<Note> {
        use schema::notes;

        diesel::insert_into(notes::table)
            .values(&new_note)
            .returning(Note::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_note(&mut self, note_id: i64, user_id: i64) -> PgResult<Option<Note>> {
        use schema::notes::{self, dsl};

        notes::table
            .filter(dsl::id.eq(note_id))
            .filter(dsl::user_id.eq(user_id))
            .select(Note::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_note(
        &mut self,
        note_id: i64,
        user_id: i64,
        changes: UpdateNote,
    ) -> PgResult<Option<Note>> {
        use schema::notes::{self, dsl};

        let target = notes::table
            .filter(dsl::id.eq(note_id))
            .filter(dsl::user_id.eq(user_id));

        diesel::update(target)
            .set((&changes, dsl::updated_at.eq(diesel::dsl::now)))
            .returning(Note::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn delete_note(&mut self, note_id: i64, user_id: i64) -> PgResult<bool> {
        use schema::notes::{self, dsl};

        let target = notes::table
            .filter(dsl::id.eq(note_id))
            .filter(dsl::user_id.eq(user_id));

        let deleted = diesel::delete(target)
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test::{connect, create_user};

    fn new_note(user_id: i64, title: &str) -> NewNote {
        NewNote {
            user_id,
            title: title.to_owned(),
            content: String::new(),
        }
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn other_users_cannot_reach_a_note() -> PgResult<()> {
        let client = connect().await?;
        let mut conn = client.get_connection().await?;
        let owner = create_user(&mut conn).await?;
        let intruder = create_user(&mut conn).await?;

        let note = conn.create_note(new_note(owner.id, "private")).await?;
        let changes = UpdateNote {
            title: "stolen".to_owned(),
            content: String::new(),
        };

        assert_eq!(conn.find_note(note.id, intruder.id).await?, None);
        assert_eq!(conn.update_note(note.id, intruder.id, changes).await?, None);
        assert!(!conn.delete_note(note.id, intruder.id).await?);
        assert!(conn.list_notes(intruder.id).await?.is_empty());

        let unchanged = conn.find_note(note.id, owner.id).await?;
        assert_eq!(unchanged.map(|n| n.title), Some("private".to_owned()));
        assert!(conn.delete_note(note.id, owner.id).await?);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn identical_update_still_moves_note_to_top() -> PgResult<()> {
        let client = connect().await?;
        let mut conn = client.get_connection().await?;
        let owner = create_user(&mut conn).await?;

        let older = conn.create_note(new_note(owner.id, "older")).await?;
        let newer = conn.create_note(new_note(owner.id, "newer")).await?;
        let listed: Vec<i64> = conn.list_notes(owner.id).await?.iter().map(|n| n.id).collect();
        assert_eq!(listed, vec![newer.id, older.id]);

        let same = UpdateNote {
            title: older.title.clone(),
            content: older.content.clone(),
        };
        let updated = conn
            .update_note(older.id, owner.id, same)
            .await?
            .ok_or_else(|| PgError::Unexpected("note vanished".into()))?;

        let before: jiff::Timestamp = older.updated_at.into();
        let after: jiff::Timestamp = updated.updated_at.into();
        assert!(after > before);

        let listed: Vec<i64> = conn.list_notes(owner.id).await?.iter().map(|n| n.id).collect();
        assert_eq!(listed, vec![older.id, newer.id]);
        Ok(())
    }
}
