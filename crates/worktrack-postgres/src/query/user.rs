//! User repository backing the credential store.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewUser, User};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for user account operations.
pub trait UserRepository {
    /// Inserts a new user.
    ///
    /// The email is trimmed and lowercased before insertion. A duplicate
    /// email fails with the `users_email_unique` constraint.
    fn create_user(&mut self, new_user: NewUser) -> impl Future<Output = PgResult<User>> + Send;

    /// Finds a user by normalized email address.
    fn find_user_by_email(
        &mut self,
        email: &str,
    ) -> impl Future<Output = PgResult<Option<User>>> + Send;

    /// Finds a user by id.
    fn find_user_by_id(
        &mut self,
        user_id: i64,
    ) -> impl Future<Output = PgResult<Option<User>>> + Send;
}

impl UserRepository for PgConnection {
    async fn create_user(&mut self, mut new_user: NewUser) -> PgResult<User> {
        use schema::users;

        new_user.email = new_user.email.trim().to_lowercase();
        new_user.name = new_user
            .name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());

        diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_user_by_email(&mut self, email: &str) -> PgResult<Option<User>> {
        use schema::users::{self, dsl};

        users::table
            .filter(dsl::email.eq(email.trim().to_lowercase()))
            .select(User::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_user_by_id(&mut self, user_id: i64) -> PgResult<Option<User>> {
        use schema::users::{self, dsl};

        users::table
            .filter(dsl::id.eq(user_id))
            .select(User::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
