//! Diesel models for every table in the schema.
//!
//! Each table has a queryable row type, an insertable `New*` type and, where
//! rows can change after creation, an `Update*` changeset.

mod note;
mod reminder;
mod task;
mod timer;
mod user;

pub use note::{NewNote, Note, UpdateNote};
pub use reminder::{NewReminder, Reminder, UpdateReminder};
pub use task::{NewTask, Task, UpdateTask};
pub use timer::{NewTimer, Timer, UpdateTimer};
pub use user::{NewUser, User};
