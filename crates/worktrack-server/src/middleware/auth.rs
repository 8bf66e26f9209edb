//! Authentication guard for private routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::extract::AuthState;

/// Rejects the request with `401` unless it carries a valid session token.
///
/// The verified claims stay cached in the request extensions, so handlers
/// extracting [`AuthState`] do not verify the token a second time.
pub async fn require_authentication(
    AuthState(_): AuthState,
    request: Request,
    next: Next,
) -> Response {
    next.run(request).await
}
