//! Path parameter extractor with readable rejections.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use super::sanitize_error_message;
use crate::handler::{Error, ErrorKind};

/// Drop-in replacement for [`axum::extract::Path`].
///
/// A parameter that does not parse, such as a non-numeric id, is a `400`.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let error_message = err.body_text();

                ErrorKind::BadRequest
                    .with_message("Invalid path parameter format")
                    .with_context(format!(
                        "{}. {}",
                        sanitize_error_message(&error_message, 2, 150),
                        deserialization_hint(&error_message)
                    ))
            }
            PathRejection::MissingPathParams(err) => ErrorKind::MissingPathParam
                .with_message("Required path parameter missing")
                .with_context(sanitize_error_message(&err.body_text(), 2, 150)),
            _ => ErrorKind::InternalServerError.with_message("Path processing failed"),
        }
    }
}

/// Returns type-specific guidance for a failed path parameter.
fn deserialization_hint(error_message: &str) -> &'static str {
    let error_lower = error_message.to_lowercase();

    if error_lower.contains("invalid digit") || error_lower.contains("cannot parse") {
        "Identifiers must be positive integers"
    } else if error_lower.contains("bool") {
        "Boolean parameters must be 'true' or 'false'"
    } else {
        "Check that the parameter format matches the expected type"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_hint() {
        assert_eq!(
            deserialization_hint("Cannot parse `abc` to a `i64`"),
            "Identifiers must be positive integers"
        );
        assert_eq!(
            deserialization_hint("something else"),
            "Check that the parameter format matches the expected type"
        );
    }
}
