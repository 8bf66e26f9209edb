//! Database error to HTTP error conversion.
//!
//! Known constraint violations become client errors; everything else is
//! logged and reported as an opaque 500.

use worktrack_postgres::PgError;
use worktrack_postgres::error::DieselError;
use worktrack_postgres::types::{ConstraintCategory, ConstraintViolation};

use crate::handler::{Error, ErrorKind};

const TRACING_TARGET: &str = "worktrack_server::postgres_constraints";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        let resource = constraint.table_name();
        let error = match constraint {
            ConstraintViolation::UserEmailUnique => {
                ErrorKind::Conflict.with_message("An account with this email already exists")
            }
            ConstraintViolation::UserEmailLength | ConstraintViolation::UserEmailLowercase => {
                ErrorKind::BadRequest.with_message("Email address is invalid")
            }
            ConstraintViolation::NoteTitleNotEmpty => {
                ErrorKind::BadRequest.with_message("Note title cannot be empty")
            }
            ConstraintViolation::TimerDurationPositive => {
                ErrorKind::BadRequest.with_message("Timer duration must be positive")
            }
            ConstraintViolation::TimerRemainingRange => ErrorKind::BadRequest
                .with_message("Remaining time must be between zero and the timer duration"),
            ConstraintViolation::ReminderIntervalPositive => {
                ErrorKind::BadRequest.with_message("Reminder interval must be positive")
            }
            _ => match constraint.categorize() {
                ConstraintCategory::Reference => {
                    ErrorKind::NotFound.with_message("Owning user no longer exists")
                }
                ConstraintCategory::Uniqueness => ErrorKind::Conflict.into_error(),
                ConstraintCategory::Validation => ErrorKind::BadRequest.into_error(),
            },
        };

        error.with_resource(resource)
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        if let Some(constraint) = error.constraint_violation() {
            tracing::warn!(
                target: TRACING_TARGET,
                constraint = %constraint,
                error = %error,
                "query rejected by constraint"
            );
            return constraint.into();
        }

        match &error {
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout"
                );
            }
            PgError::Query(DieselError::NotFound) => {
                return ErrorKind::NotFound.into_error();
            }
            _ => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    transient = error.is_transient(),
                    "database error"
                );
            }
        }

        ErrorKind::InternalServerError.into_error()
    }
}

// Transactions surface raw diesel errors.
impl From<DieselError> for Error<'static> {
    fn from(error: DieselError) -> Self {
        PgError::from(error).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_email_is_conflict() {
        let error: Error = ConstraintViolation::UserEmailUnique.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.resource(), Some("users"));
    }

    #[test]
    fn owner_reference_is_not_found() {
        let error: Error = ConstraintViolation::TaskOwner.into();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn timer_range_is_bad_request() {
        let error: Error = ConstraintViolation::TimerRemainingRange.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.resource(), Some("timers"));
    }

    #[test]
    fn opaque_errors_are_internal() {
        let error: Error = PgError::Unexpected("boom".into()).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert!(error.context().is_none());
    }

    #[test]
    fn diesel_not_found_is_not_found() {
        let error: Error = DieselError::NotFound.into();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }
}
