//! Response types for HTTP handlers.

mod authentications;
mod error_response;
mod messages;
mod monitors;
mod notes;
mod reminders;
mod tasks;
mod timers;

pub use authentications::*;
pub use error_response::ErrorResponse;
pub use messages::*;
pub use monitors::*;
pub use notes::*;
pub use reminders::*;
pub use tasks::*;
pub use timers::*;
