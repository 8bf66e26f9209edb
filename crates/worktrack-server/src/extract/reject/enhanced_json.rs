//! JSON body extractor with readable rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json as AxumJson, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, DerefMut, From};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::sanitize_error_message;
use crate::handler::{Error, ErrorKind};

/// Drop-in replacement for [`axum::Json`] that rejects with a `400` JSON error
/// describing what was wrong with the body.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let extractor = <AxumJson<T> as FromRequest<S>>::from_request(req, state).await;
        extractor.map(|x| Self::new(x.0)).map_err(Into::into)
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    #[inline]
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl From<JsonRejection> for Error<'static> {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ErrorKind::BadRequest
                .with_message("Invalid request data format")
                .with_context(format!(
                    "JSON deserialization failed: {}",
                    sanitize_error_message(&err.body_text(), 3, 200)
                )),
            JsonRejection::JsonSyntaxError(err) => ErrorKind::BadRequest
                .with_message("Invalid JSON syntax in request body")
                .with_context(sanitize_error_message(&err.body_text(), 3, 200)),
            JsonRejection::MissingJsonContentType(_) => ErrorKind::BadRequest
                .with_message("Invalid content type")
                .with_context("Request must have Content-Type: application/json"),
            JsonRejection::BytesRejection(err) => ErrorKind::BadRequest
                .with_message("Failed to read request body")
                .with_context(sanitize_error_message(&err.body_text(), 3, 200)),
            _ => ErrorKind::InternalServerError.with_message("Request processing failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        title: String,
    }

    async fn extract(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<Json<Payload>, Error<'static>> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let request = builder.body(Body::from(body)).expect("valid request");
        Json::<Payload>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        assert!(extract(Some("application/json"), r#"{"title":"x"}"#).await.is_ok());
    }

    #[tokio::test]
    async fn syntax_errors_are_bad_request() {
        let error = extract(Some("application/json"), "{").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.message(), Some("Invalid JSON syntax in request body"));
    }

    #[tokio::test]
    async fn missing_fields_are_bad_request() {
        let error = extract(Some("application/json"), "{}").await.unwrap_err();
        assert_eq!(error.message(), Some("Invalid request data format"));
        assert!(error.context().is_some_and(|c| c.contains("title")));
    }

    #[tokio::test]
    async fn wrong_content_type_is_bad_request() {
        let error = extract(None, r#"{"title":"x"}"#).await.unwrap_err();
        assert_eq!(error.message(), Some("Invalid content type"));
    }
}
