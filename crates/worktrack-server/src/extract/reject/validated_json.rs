//! JSON extractor that runs `validator` rules after deserialization.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use super::Json;
use crate::handler::{Error, ErrorKind};

/// Deserializes the body like [`Json`] and then calls [`Validate::validate`].
///
/// Validation failures become a `400` whose message names every failing field.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self::new(data))
    }
}

type Params = HashMap<Cow<'static, str>, serde_json::Value>;

fn param_u64(params: &Params, key: &str) -> Option<u64> {
    params.get(key).and_then(serde_json::Value::as_u64)
}

fn format_length_error(field: &str, params: &Params) -> String {
    match (param_u64(params, "min"), param_u64(params, "max")) {
        (Some(min), Some(max)) => {
            format!("Field '{field}' must be between {min} and {max} characters long")
        }
        (Some(min), None) => format!("Field '{field}' must be at least {min} characters long"),
        (None, Some(max)) => format!("Field '{field}' must be at most {max} characters long"),
        (None, None) => format!("Field '{field}' has invalid length"),
    }
}

fn format_range_error(field: &str, params: &Params) -> String {
    let min = params.get("min").and_then(serde_json::Value::as_f64);
    let max = params.get("max").and_then(serde_json::Value::as_f64);

    match (min, max) {
        (Some(min), Some(max)) => format!("Field '{field}' must be between {min} and {max}"),
        (Some(min), None) => format!("Field '{field}' must be at least {min}"),
        (None, Some(max)) => format!("Field '{field}' must be at most {max}"),
        (None, None) => format!("Field '{field}' is out of valid range"),
    }
}

fn format_validation_error(field: &str, error: &ValidationError) -> String {
    if let Some(custom_message) = &error.message {
        return format!("Field '{field}': {custom_message}");
    }

    let message = match error.code.as_ref() {
        "required" => "is required and cannot be empty",
        "length" => return format_length_error(field, &error.params),
        "range" => return format_range_error(field, &error.params),
        "email" => "must be a valid email address (e.g., user@example.com)",
        code => return format!("Field '{field}' failed validation: {code}"),
    };

    format!("Field '{field}' {message}")
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let mut error_messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| format_validation_error(field, error))
            })
            .collect();
        error_messages.sort();

        let user_message = match error_messages.as_slice() {
            [] => "Validation failed".to_owned(),
            [single_error] => single_error.clone(),
            multiple => multiple.join(". "),
        };

        tracing::debug!(
            errors = ?errors.field_errors(),
            "request validation failed"
        );

        ErrorKind::BadRequest
            .with_message(user_message)
            .with_resource("request")
    }
}
