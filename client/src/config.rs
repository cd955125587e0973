//! Compile-time client configuration.
//!
//! The API base URL defaults to the same origin as the page. Builds that
//! talk to a separately hosted API set `MINDMAP_API_BASE_URL` at compile time.

/// Base URL prepended to every API path (no trailing slash).
pub const API_BASE_URL: &str = match option_env!("MINDMAP_API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "authToken";
