//! Stored mindmap routes — conversations and per-user statistics.
//!
//! Node expansion, step generation, and analysis are not served; only the
//! conversation records and their node trees are.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::routes::auth::{AuthUser, parse_json_object};
use crate::services::audit::{self, AuditEvent};
use crate::services::conversation::{self, ConversationDetail, ConversationError, ConversationSummary, UserStats};
use crate::state::AppState;

/// Map a conversation error onto an HTTP response, hiding database details
/// behind `fallback`.
pub(crate) fn conversation_error_response(err: ConversationError, fallback: &'static str) -> ApiError {
    match err {
        ConversationError::MissingTopic | ConversationError::EmptyTopic => ApiError::bad_request(err.to_string()),
        ConversationError::NotFound => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
        ConversationError::Db(_) => {
            tracing::error!(error = %err, "conversation operation failed");
            ApiError::internal(fallback)
        }
    }
}

/// Malformed ids cannot name a stored conversation, so they read as missing.
pub(crate) fn parse_conversation_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| conversation_error_response(ConversationError::NotFound, ""))
}

/// `GET /api/mindmap/conversations` — the caller's conversations, newest first.
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ConversationSummary>>, ApiError> {
    conversation::list(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(|e| conversation_error_response(e, "Failed to list conversations"))
}

/// `POST /api/mindmap/conversations` — create a conversation with its root node.
pub async fn create_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    const FALLBACK: &str = "Failed to create conversation";

    let object = parse_json_object(&body).map_err(|_| conversation_error_response(ConversationError::MissingTopic, FALLBACK))?;
    let root_topic = conversation::validate_root_topic(&object).map_err(|e| conversation_error_response(e, FALLBACK))?;
    let id = conversation::create(&state.pool, auth.user.id, &root_topic)
        .await
        .map_err(|e| conversation_error_response(e, FALLBACK))?;

    audit::record(
        &state.pool,
        auth.user.id,
        AuditEvent::ConversationCreated,
        serde_json::json!({ "conversation_id": id, "root_topic": root_topic }),
    )
    .await;
    tracing::info!(user_id = %auth.user.id, conversation_id = %id, "conversation created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Conversation created successfully",
        })),
    ))
}

/// `GET /api/mindmap/conversations/{id}` — one conversation with its node tree.
pub async fn get_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<ConversationDetail>, ApiError> {
    let id = parse_conversation_id(&raw_id)?;
    conversation::fetch(&state.pool, auth.user.id, id)
        .await
        .map(Json)
        .map_err(|e| conversation_error_response(e, "Failed to retrieve conversation"))
}

/// `DELETE /api/mindmap/conversations/{id}` — delete a conversation and its nodes.
pub async fn delete_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_conversation_id(&raw_id)?;
    let root_topic = conversation::delete(&state.pool, auth.user.id, id)
        .await
        .map_err(|e| conversation_error_response(e, "Failed to delete conversation"))?;

    audit::record(
        &state.pool,
        auth.user.id,
        AuditEvent::ConversationDeleted,
        serde_json::json!({ "conversation_id": id, "root_topic": root_topic }),
    )
    .await;

    Ok(Json(serde_json::json!({ "message": "Conversation deleted successfully" })))
}

/// `GET /api/mindmap/stats` — counts over the caller's stored mindmaps.
pub async fn stats(State(state): State<AppState>, auth: AuthUser) -> Result<Json<UserStats>, ApiError> {
    conversation::stats(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(|e| conversation_error_response(e, "Failed to get statistics"))
}

#[cfg(test)]
#[path = "mindmap_test.rs"]
mod tests;
