//! Account audit trail.
//!
//! Every auth-relevant action appends one row to `audit_logs`. Writes are
//! best-effort: a failed insert is logged and never fails the request that
//! triggered it.

use serde::Serialize;
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEvent {
    UserRegistered,
    UserLogin,
    ProfileUpdated,
    PasswordChanged,
    UserLogout,
    ConversationCreated,
    ConversationDeleted,
}

impl AuditEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserRegistered => "user_registered",
            Self::UserLogin => "user_login",
            Self::ProfileUpdated => "profile_updated",
            Self::PasswordChanged => "password_changed",
            Self::UserLogout => "user_logout",
            Self::ConversationCreated => "conversation_created",
            Self::ConversationDeleted => "conversation_deleted",
        }
    }
}

/// Append an audit row.
pub async fn insert(pool: &PgPool, user_id: Uuid, event: AuditEvent, data: Value) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO audit_logs (user_id, event_type, event_data) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(event.as_str())
        .bind(data)
        .execute(pool)
        .await?;
    Ok(())
}

/// Append an audit row, logging instead of propagating failures.
pub async fn record(pool: &PgPool, user_id: Uuid, event: AuditEvent, data: Value) {
    if let Err(e) = insert(pool, user_id, event, data).await {
        tracing::warn!(error = %e, %user_id, event = event.as_str(), "audit insert failed");
    }
}

/// Audit row as listed by the admin endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub user_id: Uuid,
    pub event_type: String,
    pub event_data: Option<Value>,
    pub timestamp: String,
}

/// Most recent audit rows across all users, newest first.
pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<AuditEntry>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT user_id, event_type, event_data,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS timestamp
           FROM audit_logs
           ORDER BY audit_logs.created_at DESC
           LIMIT $1"#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| AuditEntry {
            user_id: row.get("user_id"),
            event_type: row.get("event_type"),
            event_data: row.get("event_data"),
            timestamp: row.get("timestamp"),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_stable() {
        assert_eq!(AuditEvent::UserRegistered.as_str(), "user_registered");
        assert_eq!(AuditEvent::UserLogin.as_str(), "user_login");
        assert_eq!(AuditEvent::ProfileUpdated.as_str(), "profile_updated");
        assert_eq!(AuditEvent::PasswordChanged.as_str(), "password_changed");
        assert_eq!(AuditEvent::UserLogout.as_str(), "user_logout");
        assert_eq!(AuditEvent::ConversationCreated.as_str(), "conversation_created");
        assert_eq!(AuditEvent::ConversationDeleted.as_str(), "conversation_deleted");
    }

    #[test]
    fn event_names_fit_column_width() {
        for event in [
            AuditEvent::UserRegistered,
            AuditEvent::UserLogin,
            AuditEvent::ProfileUpdated,
            AuditEvent::PasswordChanged,
            AuditEvent::UserLogout,
            AuditEvent::ConversationCreated,
            AuditEvent::ConversationDeleted,
        ] {
            assert!(event.as_str().len() <= 50);
        }
    }

    #[test]
    fn audit_entry_serializes_listing_fields() {
        let entry = AuditEntry {
            user_id: Uuid::nil(),
            event_type: "user_login".into(),
            event_data: None,
            timestamp: "2024-01-01T00:00:00Z".into(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["event_type"], "user_login");
        assert_eq!(value["event_data"], Value::Null);
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(value["user_id"], "00000000-0000-0000-0000-000000000000");
    }
}
