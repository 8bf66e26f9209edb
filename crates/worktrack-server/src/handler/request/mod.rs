//! Request types for HTTP handlers.

mod authentications;
mod notes;
mod paths;
mod reminders;
mod tasks;
mod timers;
mod validations;

pub use authentications::*;
pub use notes::*;
pub use paths::*;
pub use reminders::*;
pub use tasks::*;
pub use timers::*;
