use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body of every error response.
///
/// Base payloads exist as associated constants, one per error kind; handlers
/// refine them with a message, resource or context.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<'a> {
    /// Stable machine-readable error name.
    pub name: Cow<'a, str>,
    /// Message safe for client display.
    pub message: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Cow<'a, str>>,
    /// Status line of the response, never serialized.
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const CONFLICT: Self = Self::new(
        "conflict",
        "The request conflicts with the current state of the resource",
        StatusCode::CONFLICT,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_AUTH_TOKEN: Self = Self::new(
        "missing_auth_token",
        "Authentication is required to access this resource",
        StatusCode::UNAUTHORIZED,
    );
    pub const MISSING_PATH_PARAM: Self = Self::new(
        "missing_path_param",
        "Invalid request: missing required parameters",
        StatusCode::BAD_REQUEST,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const REQUEST_TIMEOUT: Self = Self::new(
        "request_timeout",
        "The request took too long to process and was terminated",
        StatusCode::SERVICE_UNAVAILABLE,
    );
    pub const UNAUTHORIZED: Self = Self::new(
        "unauthorized",
        "Invalid or expired authentication credentials",
        StatusCode::UNAUTHORIZED,
    );

    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            context: None,
            status,
        }
    }

    /// Sets the resource, joining with any existing one by `/`.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        let new_resource = resource.into();
        self.resource = Some(match self.resource {
            Some(existing) => Cow::Owned(format!("{}/{}", existing, new_resource)),
            None => new_resource,
        });
        self
    }

    /// Appends a sentence to the base message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        let new_message = message.into();
        self.message = Cow::Owned(format!("{}. {}", self.message, new_message));
        self
    }

    /// Sets the context, joining with any existing one by `; `.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, new_context)),
            None => new_context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_are_joined() {
        let response = ErrorResponse::NOT_FOUND
            .with_resource("user")
            .with_resource("note");

        assert_eq!(response.resource.as_deref(), Some("user/note"));
    }

    #[test]
    fn messages_are_appended() {
        let response = ErrorResponse::UNAUTHORIZED.with_message("Invalid email or password");

        assert_eq!(
            &response.message,
            "Invalid or expired authentication credentials. Invalid email or password"
        );
    }

    #[test]
    fn status_is_not_serialized() -> anyhow::Result<()> {
        let response = ErrorResponse::BAD_REQUEST
            .with_resource("note")
            .with_context("title is empty");

        let json = serde_json::to_value(&response)?;
        assert_eq!(json["name"], "bad_request");
        assert_eq!(json["resource"], "note");
        assert_eq!(json["context"], "title is empty");
        assert!(json.get("status").is_none());
        Ok(())
    }

    #[test]
    fn optional_fields_are_omitted() -> anyhow::Result<()> {
        let json = serde_json::to_value(ErrorResponse::CONFLICT)?;
        assert!(json.get("resource").is_none());
        assert!(json.get("context").is_none());
        Ok(())
    }
}
