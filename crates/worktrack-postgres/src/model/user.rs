//! User account model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::users;

/// A registered user and their stored credential.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Normalized (trimmed, lowercased) email address.
    pub email: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
}

/// Data for registering a new user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUser {
    /// Normalized email address.
    pub email: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
    /// Optional display name.
    pub name: Option<String>,
}
