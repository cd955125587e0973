//! Auth routes — registration, login, profile, password change, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client posts JSON bodies and keeps the returned bearer token in
//! local storage. Every failure is a `{"message": ...}` body the client shows
//! as-is, so messages here are user-facing text.

use axum::body::Bytes;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::Json;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::services::account::{self, AccountError, AccountUser, ChangePasswordInput, LoginInput, Profile, ProfileUpdate, RegisterInput};
use crate::services::audit::{self, AuditEvent};
use crate::services::session;
use crate::state::AppState;

const INVALID_TOKEN_MESSAGE: &str = "Missing or invalid token";
const NO_DATA_MESSAGE: &str = "No data provided";
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

/// Extract the token from an `Authorization` header value.
pub(crate) fn parse_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_bearer)
            .ok_or_else(|| ApiError::unauthorized(INVALID_TOKEN_MESSAGE))?;

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                ApiError::internal("Failed to validate session")
            })?
            .ok_or_else(|| ApiError::unauthorized(INVALID_TOKEN_MESSAGE))?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Decode a JSON object body. Empty bodies and non-objects count as missing.
pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    let object = parse_json_object(body)?;
    serde_json::from_value(Value::Object(object)).map_err(|_| ApiError::bad_request(INVALID_BODY_MESSAGE))
}

pub(crate) fn parse_json_object(body: &Bytes) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        _ => Err(ApiError::bad_request(NO_DATA_MESSAGE)),
    }
}

/// Map a service error onto an HTTP response. Internal failures are logged
/// and replaced with `fallback` so database details never reach the client.
pub(crate) fn account_error_response(err: AccountError, fallback: &'static str) -> ApiError {
    match err {
        AccountError::MissingField(_)
        | AccountError::MissingCredentials
        | AccountError::MissingPasswords
        | AccountError::InvalidUsername
        | AccountError::InvalidEmail
        | AccountError::WeakPassword
        | AccountError::EmailTaken
        | AccountError::UsernameTaken => ApiError::bad_request(err.to_string()),
        AccountError::InvalidCredentials | AccountError::IncorrectPassword => ApiError::unauthorized(err.to_string()),
        AccountError::UserNotFound => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
        AccountError::Hash(_) | AccountError::Db(_) => {
            tracing::error!(error = %err, "account operation failed");
            ApiError::internal(fallback)
        }
    }
}

fn message(text: &str) -> Json<Value> {
    Json(serde_json::json!({ "message": text }))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/register` — create an account. Does not log the user in.
pub async fn register(State(state): State<AppState>, body: Bytes) -> Result<(StatusCode, Json<Value>), ApiError> {
    const FALLBACK: &str = "Registration failed. Please try again.";

    let input: RegisterInput = parse_json_body(&body)?;
    let new_account = account::validate_registration(input).map_err(|e| account_error_response(e, FALLBACK))?;
    let user_id = account::register(&state.pool, &new_account)
        .await
        .map_err(|e| account_error_response(e, FALLBACK))?;

    audit::record(
        &state.pool,
        user_id,
        AuditEvent::UserRegistered,
        serde_json::json!({ "username": new_account.username, "email": new_account.email }),
    )
    .await;
    tracing::info!(%user_id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "User registered successfully",
            "user_id": user_id,
        })),
    ))
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AccountUser,
}

/// `POST /api/auth/login` — verify credentials and issue a session token.
pub async fn login(State(state): State<AppState>, body: Bytes) -> Result<Json<LoginResponse>, ApiError> {
    const FALLBACK: &str = "Login failed. Please try again.";

    let input: LoginInput = parse_json_body(&body)?;
    let (email, password) = account::validate_login(input).map_err(|e| account_error_response(e, FALLBACK))?;

    let user = match account::authenticate(&state.pool, &email, &password).await {
        Ok(user) => user,
        Err(e) => {
            if matches!(e, AccountError::InvalidCredentials) {
                tracing::warn!("login rejected: invalid credentials");
            }
            return Err(account_error_response(e, FALLBACK));
        }
    };

    let access_token = session::create_session(&state.pool, user.id, state.config.session_ttl_secs)
        .await
        .map_err(|e| account_error_response(e.into(), FALLBACK))?;

    audit::record(&state.pool, user.id, AuditEvent::UserLogin, serde_json::json!({ "email": email })).await;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse { access_token, user }))
}

/// `GET /api/auth/profile` — return the current user's profile.
pub async fn profile(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Profile>, ApiError> {
    account::fetch_profile(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(|e| account_error_response(e, "Failed to get profile"))
}

/// `PUT /api/auth/profile` — update username and/or free-form profile data.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    const FALLBACK: &str = "Failed to update profile";

    let object = parse_json_object(&body)?;
    let update = ProfileUpdate::from_json(&object).map_err(|e| account_error_response(e, FALLBACK))?;
    account::update_profile(&state.pool, auth.user.id, &update)
        .await
        .map_err(|e| account_error_response(e, FALLBACK))?;

    audit::record(
        &state.pool,
        auth.user.id,
        AuditEvent::ProfileUpdated,
        serde_json::json!({ "updated_fields": update.updated_fields }),
    )
    .await;

    Ok(message("Profile updated successfully"))
}

/// `POST /api/auth/change-password` — replace the password and revoke every
/// other session of the user.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    const FALLBACK: &str = "Failed to change password";

    let input: ChangePasswordInput = parse_json_body(&body)?;
    let (current, new) = account::validate_change_password(input).map_err(|e| account_error_response(e, FALLBACK))?;
    account::change_password(&state.pool, auth.user.id, &current, &new)
        .await
        .map_err(|e| account_error_response(e, FALLBACK))?;

    match session::delete_user_sessions_except(&state.pool, auth.user.id, &auth.token).await {
        Ok(revoked) => tracing::info!(user_id = %auth.user.id, revoked, "password changed"),
        Err(e) => tracing::warn!(error = %e, user_id = %auth.user.id, "session revocation failed"),
    }
    audit::record(&state.pool, auth.user.id, AuditEvent::PasswordChanged, serde_json::json!({})).await;

    Ok(message("Password changed successfully"))
}

/// `POST /api/auth/logout` — delete the session. Always answers 200.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> Json<Value> {
    audit::record(&state.pool, auth.user.id, AuditEvent::UserLogout, serde_json::json!({})).await;

    match session::delete_session(&state.pool, &auth.token).await {
        Ok(()) => {
            tracing::info!(user_id = %auth.user.id, "user logged out");
            message("Logout successful")
        }
        Err(e) => {
            tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
            message("Logout completed")
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
