//! Admin listings over the audit trail and the account table.
//!
//! Both require a valid session; there is no separate admin role.

use axum::extract::State;
use axum::response::Json;

use crate::error::ApiError;
use crate::routes::auth::{AuthUser, account_error_response};
use crate::services::account::{self, UserSummary};
use crate::services::audit::{self, AuditEntry};
use crate::state::AppState;

/// Number of audit rows returned by the log listing.
pub const RECENT_LOG_LIMIT: i64 = 100;

/// `GET /api/admin/logs` — latest audit rows across all users.
pub async fn logs(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<AuditEntry>>, ApiError> {
    audit::recent(&state.pool, RECENT_LOG_LIMIT).await.map(Json).map_err(|e| {
        tracing::error!(error = %e, "audit listing failed");
        ApiError::internal("Failed to get logs")
    })
}

/// `GET /api/admin/users` — every registered account.
pub async fn users(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<UserSummary>>, ApiError> {
    account::list_users(&state.pool)
        .await
        .map(Json)
        .map_err(|e| account_error_response(e, "Failed to get users"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_listing_returns_latest_hundred() {
        assert_eq!(RECENT_LOG_LIMIT, 100);
    }
}
