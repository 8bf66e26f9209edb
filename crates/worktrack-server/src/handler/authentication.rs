//! Registration, login, logout and session introspection.
//!
//! Registration and login answer with the session token in the body and as
//! an `HttpOnly` cookie. A wrong password and an unknown email produce the
//! same `401`, and both cost one full Argon2id verification.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};

use crate::extract::{AuthCookie, AuthState, Json, ValidateJson};
use crate::handler::request::{LoginRequest, RegisterRequest};
use crate::handler::response::{AuthResponse, LogoutResponse, SessionResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{
    CookiePolicy, PasswordHasher, ServiceState, SharedCredentialStore, TokenIssuer, TokenSubject,
    normalize_email,
};

/// Tracing target for authentication operations.
const TRACING_TARGET: &str = "worktrack_server::handler::authentication";

/// Creates an account and starts a session.
#[tracing::instrument(skip_all)]
async fn register(
    State(credential_store): State<SharedCredentialStore>,
    State(password_hasher): State<PasswordHasher>,
    State(token_issuer): State<TokenIssuer>,
    State(cookie_policy): State<CookiePolicy>,
    ValidateJson(request): ValidateJson<RegisterRequest>,
) -> Result<(StatusCode, AuthCookie, Json<AuthResponse>)> {
    let email = normalize_email(&request.email);
    tracing::trace!(target: TRACING_TARGET, email = %email, "registration attempt");

    let password_hash = password_hasher.hash_password(&request.password)?;
    let credential = credential_store
        .insert(&email, &password_hash, request.name.as_deref())
        .await?;

    let subject = TokenSubject::new(credential.user_id, credential.email.clone());
    let token = token_issuer.issue(subject)?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = credential.user_id,
        "account registered"
    );

    let cookie = AuthCookie::session(token.clone(), cookie_policy);
    let response = AuthResponse::new("Registration successful", credential, token);
    Ok((StatusCode::CREATED, cookie, Json(response)))
}

/// Verifies credentials and starts a session.
#[tracing::instrument(skip_all)]
async fn login(
    State(credential_store): State<SharedCredentialStore>,
    State(password_hasher): State<PasswordHasher>,
    State(token_issuer): State<TokenIssuer>,
    State(cookie_policy): State<CookiePolicy>,
    ValidateJson(request): ValidateJson<LoginRequest>,
) -> Result<(AuthCookie, Json<AuthResponse>)> {
    let email = normalize_email(&request.email);
    tracing::trace!(target: TRACING_TARGET, email = %email, "login attempt");

    let credential = credential_store.find_by_email(&email).await?;

    // Unknown emails still pay for a full verification.
    let password_valid = match &credential {
        Some(credential) => {
            password_hasher.verify_password(&request.password, &credential.password_hash)
        }
        None => password_hasher.verify_dummy_password(&request.password),
    };

    let Some(credential) = credential.filter(|_| password_valid) else {
        tracing::warn!(target: TRACING_TARGET, "login failed");
        return Err(ErrorKind::Unauthorized.with_message("Invalid email or password"));
    };

    let subject = TokenSubject::new(credential.user_id, credential.email.clone());
    let token = token_issuer.issue(subject)?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = credential.user_id,
        "login successful"
    );

    let cookie = AuthCookie::session(token.clone(), cookie_policy);
    let response = AuthResponse::new("Login successful", credential, token);
    Ok((cookie, Json(response)))
}

/// Clears the session cookie.
///
/// Tokens are stateless, so a copied token stays valid until it expires.
#[tracing::instrument(skip_all)]
async fn logout(State(cookie_policy): State<CookiePolicy>) -> (AuthCookie, Json<LogoutResponse>) {
    tracing::debug!(target: TRACING_TARGET, "session cookie cleared");
    (
        AuthCookie::cleared(cookie_policy),
        Json(LogoutResponse::default()),
    )
}

/// Returns the identity carried by the caller's token.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn current_session(auth_state: AuthState) -> Json<SessionResponse> {
    Json(auth_state.into_claims().into())
}

/// Returns routes reachable without a session.
pub fn public_routes() -> Router<ServiceState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}

/// Returns routes that require a session.
pub fn private_routes() -> Router<ServiceState> {
    Router::new().route("/api/auth/me", get(current_session))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};
    use serde_json::json;

    use crate::handler::test::{create_test_server, register};
    use crate::service::{SessionKeys, TokenIssuer, TokenSubject};

    #[tokio::test]
    async fn register_returns_token_and_cookie() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "email": "  New.User@Example.COM ",
                "password": "secret-password",
                "name": "New User",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let cookie = response.header(header::SET_COOKIE);
        let cookie = cookie.to_str()?;
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["email"], "new.user@example.com");
        assert_eq!(body["user"]["name"], "New User");
        assert_eq!(body["token"].as_str().map(|t| t.split('.').count()), Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_invalid_input() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/auth/register")
            .json(&json!({ "email": "not-an-email", "password": "secret-password" }))
            .await;
        response.assert_status_bad_request();

        let response = server
            .post("/api/auth/register")
            .json(&json!({ "email": "short@example.com", "password": "12345" }))
            .await;
        response.assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() -> anyhow::Result<()> {
        let server = create_test_server()?;
        register(&server, "dup@example.com").await?;

        let response = server
            .post("/api/auth/register")
            .json(&json!({ "email": "DUP@example.com", "password": "another-password" }))
            .await;
        response.assert_status_conflict();
        Ok(())
    }

    #[tokio::test]
    async fn login_succeeds_with_normalized_email() -> anyhow::Result<()> {
        let server = create_test_server()?;
        register(&server, "login@example.com").await?;

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": " LOGIN@example.com", "password": "correct-horse" }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["email"], "login@example.com");
        assert!(response.header(header::SET_COOKIE).to_str()?.starts_with("token="));
        Ok(())
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() -> anyhow::Result<()> {
        let server = create_test_server()?;
        register(&server, "known@example.com").await?;

        let wrong_password = server
            .post("/api/auth/login")
            .json(&json!({ "email": "known@example.com", "password": "wrong-horse" }))
            .await;
        wrong_password.assert_status_unauthorized();

        let unknown_email = server
            .post("/api/auth/login")
            .json(&json!({ "email": "ghost@example.com", "password": "correct-horse" }))
            .await;
        unknown_email.assert_status_unauthorized();

        let a: serde_json::Value = wrong_password.json();
        let b: serde_json::Value = unknown_email.json();
        assert_eq!(a, b);
        Ok(())
    }

    #[tokio::test]
    async fn oversized_login_password_is_rejected_for_any_email() -> anyhow::Result<()> {
        let server = create_test_server()?;
        register(&server, "long@example.com").await?;
        let password = "x".repeat(200);

        for email in ["long@example.com", "nobody@example.com"] {
            let response = server
                .post("/api/auth/login")
                .json(&json!({ "email": email, "password": password }))
                .await;
            response.assert_status_bad_request();
        }
        Ok(())
    }

    #[tokio::test]
    async fn logout_clears_cookie() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.post("/api/auth/logout").await;
        response.assert_status_ok();

        let cookie = response.header(header::SET_COOKIE);
        let cookie = cookie.to_str()?;
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
        Ok(())
    }

    #[tokio::test]
    async fn me_accepts_bearer_and_cookie() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let token = register(&server, "me@example.com").await?;

        let response = server
            .get("/api/auth/me")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["email"], "me@example.com");

        let response = server
            .get("/api/auth/me")
            .add_header(header::COOKIE, format!("token={token}"))
            .await;
        response.assert_status_ok();
        Ok(())
    }

    #[tokio::test]
    async fn me_rejects_missing_and_invalid_tokens() -> anyhow::Result<()> {
        let server = create_test_server()?;

        server.get("/api/auth/me").await.assert_status_unauthorized();

        server
            .get("/api/auth/me")
            .authorization_bearer("not.a.token")
            .await
            .assert_status_unauthorized();

        let foreign = TokenIssuer::new(SessionKeys::new("some-other-secret"))
            .issue(TokenSubject::new(1, "me@example.com"))?;
        server
            .get("/api/auth/me")
            .authorization_bearer(&foreign)
            .await
            .assert_status_unauthorized();
        Ok(())
    }

    #[tokio::test]
    async fn expired_token_is_unauthorized() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let issued_at = jiff::Timestamp::now().as_second() - 604_801;
        let expired = TokenIssuer::new(SessionKeys::new(crate::handler::test::TEST_SECRET))
            .issue_at(TokenSubject::new(1, "me@example.com"), issued_at)?;

        let response = server
            .get("/api/auth/me")
            .authorization_bearer(&expired)
            .await;
        response.assert_status_unauthorized();

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "unauthorized");
        Ok(())
    }
}
