//! Credential store error to HTTP error conversion.

use super::http_error::{Error, ErrorKind};
use crate::service::StoreError;

const TRACING_TARGET: &str = "worktrack_server::handler::store";

impl From<StoreError> for Error<'static> {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Duplicate => ErrorKind::Conflict
                .with_message("An account with this email already exists")
                .with_resource("user"),
            StoreError::Backend(source) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %source,
                    "credential store failed"
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
    fn duplicate_is_conflict() {
        let error: Error = StoreError::Duplicate.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.resource(), Some("user"));
    }

    #[test]
    fn backend_is_internal() {
        let source = std::io::Error::other("disk on fire");
        let error: Error = StoreError::Backend(Box::new(source)).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
