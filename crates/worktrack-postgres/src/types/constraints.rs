//! Named database constraints and their categories.

use strum::{Display, EnumIter, EnumString};

/// Broad grouping of constraint violations, used to pick an HTTP status.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConstraintCategory {
    /// Input failed a check constraint.
    Validation,
    /// A unique constraint was hit.
    Uniqueness,
    /// A referenced row does not exist.
    Reference,
}

/// Constraint violations raised by the WorkTrack schema.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Display, EnumIter, EnumString)]
pub enum ConstraintViolation {
    #[strum(serialize = "users_email_unique")]
    UserEmailUnique,
    #[strum(serialize = "users_email_length")]
    UserEmailLength,
    #[strum(serialize = "users_email_lowercase")]
    UserEmailLowercase,

    #[strum(serialize = "notes_title_not_empty")]
    NoteTitleNotEmpty,
    #[strum(serialize = "notes_user_id_fkey")]
    NoteOwner,

    #[strum(serialize = "tasks_user_id_fkey")]
    TaskOwner,

    #[strum(serialize = "timers_duration_positive")]
    TimerDurationPositive,
    #[strum(serialize = "timers_remaining_range")]
    TimerRemainingRange,
    #[strum(serialize = "timers_user_id_fkey")]
    TimerOwner,

    #[strum(serialize = "reminders_interval_positive")]
    ReminderIntervalPositive,
    #[strum(serialize = "reminders_user_id_fkey")]
    ReminderOwner,
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            Self::UserEmailUnique => ConstraintCategory::Uniqueness,

            Self::NoteOwner | Self::TaskOwner | Self::TimerOwner | Self::ReminderOwner => {
                ConstraintCategory::Reference
            }

            Self::UserEmailLength
            | Self::UserEmailLowercase
            | Self::NoteTitleNotEmpty
            | Self::TimerDurationPositive
            | Self::TimerRemainingRange
            | Self::ReminderIntervalPositive => ConstraintCategory::Validation,
        }
    }

    /// Returns the table the constraint belongs to.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::UserEmailUnique | Self::UserEmailLength | Self::UserEmailLowercase => "users",
            Self::NoteTitleNotEmpty | Self::NoteOwner => "notes",
            Self::TaskOwner => "tasks",
            Self::TimerDurationPositive | Self::TimerRemainingRange | Self::TimerOwner => "timers",
            Self::ReminderIntervalPositive | Self::ReminderOwner => "reminders",
        }
    }
}
