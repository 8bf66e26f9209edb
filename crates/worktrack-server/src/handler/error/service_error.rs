//! Service error to HTTP error conversion.

use super::http_error::{Error as HttpError, ErrorKind};
use crate::{Error as ServiceError, ErrorKind as ServiceErrorKind};

const TRACING_TARGET: &str = "worktrack_server::handler::service";

impl From<ServiceError> for HttpError<'static> {
    fn from(error: ServiceError) -> Self {
        match error.kind() {
            ServiceErrorKind::Auth => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    error = %error,
                    "authentication failed"
                );
                ErrorKind::Unauthorized.into_error()
            }
            ServiceErrorKind::Config | ServiceErrorKind::External | ServiceErrorKind::Internal => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    kind = %error.kind(),
                    "service operation failed"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_are_unauthorized() {
        let error: HttpError = ServiceError::auth("bad token").into();
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
        assert!(error.context().is_none());
    }

    #[test]
    fn internal_errors_hide_details() {
        let error: HttpError = ServiceError::internal("hasher", "argon2 failed").into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert!(error.message().is_none());
    }
}
