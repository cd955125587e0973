//! Wire DTOs for the auth API.
//!
//! DESIGN
//! ======
//! Response fields the UI does not need are optional so older or newer
//! servers still decode; only `access_token` is required on login success.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST {base}/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST {base}/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Account summary returned alongside a login token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccountUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AccountUser>,
}

/// Generic `{message?}` body used by error responses and registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
