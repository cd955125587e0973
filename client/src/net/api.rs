//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse into two kinds: the server answered with a non-OK status
//! (`ApiError::Server`, carrying the body's `message` or an operation
//! fallback), or the exchange did not complete (`ApiError::Network`). Neither
//! is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::MessageResponse;
use super::types::{LoginRequest, LoginResponse, RegisterRequest};
#[cfg(any(test, feature = "hydrate"))]
use crate::config::API_BASE_URL;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED_MESSAGE: &str = "Login failed";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FAILED_MESSAGE: &str = "Registration failed";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-OK HTTP response; the text is shown to the user verbatim.
    #[error("{0}")]
    Server(String),
    #[error("Network error. Please try again.")]
    Network,
}

#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

#[cfg(any(test, feature = "hydrate"))]
fn server_failure(body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Server(message)
}

/// Decide the login outcome from the HTTP status class and raw body.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_login(ok: bool, body: &str) -> Result<LoginResponse, ApiError> {
    if !ok {
        return Err(server_failure(body, LOGIN_FAILED_MESSAGE));
    }
    serde_json::from_str::<LoginResponse>(body).map_err(|_| ApiError::Network)
}

/// Decide the registration outcome. An empty success body is accepted.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_register(ok: bool, body: &str) -> Result<MessageResponse, ApiError> {
    if !ok {
        return Err(server_failure(body, REGISTER_FAILED_MESSAGE));
    }
    if body.trim().is_empty() {
        return Ok(MessageResponse::default());
    }
    serde_json::from_str::<MessageResponse>(body).map_err(|_| ApiError::Network)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(path: &str, body: &T) -> Result<(bool, String), ApiError> {
    let url = endpoint(path);
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::warn!("encoding request for {url} failed: {e}");
            ApiError::Network
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("request to {url} failed: {e}");
            ApiError::Network
        })?;
    let ok = resp.ok();
    let text = resp.text().await.map_err(|_| ApiError::Network)?;
    Ok((ok, text))
}

/// Exchange credentials for a session token via `POST {base}/auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Server` for non-OK responses and `ApiError::Network`
/// when the request or response decoding fails.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (ok, body) = post_json("auth/login", request).await?;
        interpret_login(ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Create an account via `POST {base}/auth/register`. Does not sign in.
///
/// # Errors
///
/// Returns `ApiError::Server` for non-OK responses and `ApiError::Network`
/// when the request or response decoding fails.
pub async fn register(request: &RegisterRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (ok, body) = post_json("auth/register", request).await?;
        interpret_register(ok, &body).map(|resp| resp.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Tell the server to drop the session via `POST {base}/auth/logout`.
/// The outcome is ignored; the local session is already gone.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&endpoint("auth/logout"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
        if let Err(e) = result {
            log::debug!("logout notification failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
