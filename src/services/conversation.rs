//! Conversation service — stored mindmaps and their node trees.
//!
//! DESIGN
//! ======
//! A conversation owns a flat set of `nodes` rows linked by `parent_id`. The
//! root node is written together with the conversation in one transaction and
//! the tree is assembled in memory on read. Every query is scoped by the
//! owning user, so another user's conversation looks exactly like a missing
//! one.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("Root topic is required")]
    MissingTopic,
    #[error("Root topic cannot be empty")]
    EmptyTopic,
    #[error("Conversation not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// One row of the caller's conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSummary {
    pub id: Uuid,
    pub root_topic: String,
    pub created_at: String,
    pub node_count: i64,
}

/// Flat `nodes` row as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub level: i32,
    pub steps: Option<Value>,
    pub analysis: Option<String>,
    pub created_at: String,
}

/// Node with its children nested, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeTree {
    pub id: Uuid,
    pub content: String,
    pub level: i32,
    pub steps: Option<Value>,
    pub analysis: Option<String>,
    pub created_at: String,
    pub children: Vec<NodeTree>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationDetail {
    pub id: Uuid,
    pub root_topic: String,
    pub created_at: String,
    pub nodes: Vec<NodeTree>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total_conversations: i64,
    pub total_nodes: i64,
    pub total_steps: i64,
    pub total_analyses: i64,
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Extract and trim `root_topic` from a JSON object body.
///
/// # Errors
///
/// `MissingTopic` when the key is absent or not a string, `EmptyTopic` when it
/// is blank.
pub fn validate_root_topic(body: &Map<String, Value>) -> Result<String, ConversationError> {
    let Some(Value::String(raw)) = body.get("root_topic") else {
        return Err(ConversationError::MissingTopic);
    };
    let topic = raw.trim();
    if topic.is_empty() {
        return Err(ConversationError::EmptyTopic);
    }
    Ok(topic.to_owned())
}

/// Nest flat node rows under their parents. Roots are rows without a parent;
/// rows whose parent is not in `nodes` are unreachable and dropped. Sibling
/// order follows input order.
#[must_use]
pub fn build_node_tree(nodes: &[NodeRecord]) -> Vec<NodeTree> {
    let mut by_parent: HashMap<Option<Uuid>, Vec<&NodeRecord>> = HashMap::new();
    for node in nodes {
        by_parent.entry(node.parent_id).or_default().push(node);
    }
    attach_children(&by_parent, None)
}

fn attach_children(by_parent: &HashMap<Option<Uuid>, Vec<&NodeRecord>>, parent: Option<Uuid>) -> Vec<NodeTree> {
    let Some(children) = by_parent.get(&parent) else {
        return Vec::new();
    };
    children
        .iter()
        .map(|node| NodeTree {
            id: node.id,
            content: node.content.clone(),
            level: node.level,
            steps: node.steps.clone(),
            analysis: node.analysis.clone(),
            created_at: node.created_at.clone(),
            children: attach_children(by_parent, Some(node.id)),
        })
        .collect()
}

// =============================================================================
// PERSISTENCE
// =============================================================================

const CREATED_AT_SQL: &str = r#"to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')"#;

/// Create a conversation and its level-0 root node. Returns the new id.
///
/// # Errors
///
/// Returns a database error; nothing is written in that case.
pub async fn create(pool: &PgPool, user_id: Uuid, root_topic: &str) -> Result<Uuid, ConversationError> {
    let mut tx = pool.begin().await?;

    let conversation_id: Uuid =
        sqlx::query_scalar("INSERT INTO conversations (user_id, root_topic) VALUES ($1, $2) RETURNING id")
            .bind(user_id)
            .bind(root_topic)
            .fetch_one(&mut *tx)
            .await?;

    sqlx::query("INSERT INTO nodes (conversation_id, content, level) VALUES ($1, $2, 0)")
        .bind(conversation_id)
        .bind(root_topic)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(conversation_id)
}

/// List the user's conversations, newest first.
///
/// # Errors
///
/// Returns a database error.
pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<ConversationSummary>, ConversationError> {
    let rows = sqlx::query(&format!(
        r"SELECT c.id, c.root_topic, {CREATED_AT_SQL} AS created_at,
                 (SELECT COUNT(*) FROM nodes n WHERE n.conversation_id = c.id) AS node_count
          FROM conversations c
          WHERE c.user_id = $1
          ORDER BY c.created_at DESC",
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ConversationSummary {
            id: row.get("id"),
            root_topic: row.get("root_topic"),
            created_at: row.get("created_at"),
            node_count: row.get("node_count"),
        })
        .collect())
}

/// Load one conversation with its node tree.
///
/// # Errors
///
/// Returns `NotFound` if the conversation does not exist or belongs to
/// another user.
pub async fn fetch(pool: &PgPool, user_id: Uuid, conversation_id: Uuid) -> Result<ConversationDetail, ConversationError> {
    let row = sqlx::query(&format!(
        "SELECT id, root_topic, {CREATED_AT_SQL} AS created_at FROM conversations WHERE id = $1 AND user_id = $2"
    ))
    .bind(conversation_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ConversationError::NotFound)?;

    let node_rows = sqlx::query(&format!(
        r"SELECT id, parent_id, content, level, steps, analysis, {CREATED_AT_SQL} AS created_at
          FROM nodes
          WHERE conversation_id = $1
          ORDER BY nodes.created_at, id",
    ))
    .bind(conversation_id)
    .fetch_all(pool)
    .await?;

    let nodes: Vec<NodeRecord> = node_rows
        .into_iter()
        .map(|r| NodeRecord {
            id: r.get("id"),
            parent_id: r.get("parent_id"),
            content: r.get("content"),
            level: r.get("level"),
            steps: r.get("steps"),
            analysis: r.get("analysis"),
            created_at: r.get("created_at"),
        })
        .collect();

    Ok(ConversationDetail {
        id: row.get("id"),
        root_topic: row.get("root_topic"),
        created_at: row.get("created_at"),
        nodes: build_node_tree(&nodes),
    })
}

/// Delete a conversation and all of its nodes. Returns the deleted root topic.
///
/// # Errors
///
/// Returns `NotFound` if the conversation does not exist or belongs to
/// another user.
pub async fn delete(pool: &PgPool, user_id: Uuid, conversation_id: Uuid) -> Result<String, ConversationError> {
    let topic: Option<String> =
        sqlx::query_scalar("DELETE FROM conversations WHERE id = $1 AND user_id = $2 RETURNING root_topic")
            .bind(conversation_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    topic.ok_or(ConversationError::NotFound)
}

/// Count the user's conversations, nodes, and nodes carrying steps/analysis.
///
/// # Errors
///
/// Returns a database error.
pub async fn stats(pool: &PgPool, user_id: Uuid) -> Result<UserStats, ConversationError> {
    let row = sqlx::query(
        r"SELECT
              (SELECT COUNT(*) FROM conversations WHERE user_id = $1) AS total_conversations,
              COUNT(n.id) AS total_nodes,
              COUNT(n.steps) AS total_steps,
              COUNT(n.analysis) AS total_analyses
          FROM nodes n
          JOIN conversations c ON c.id = n.conversation_id
          WHERE c.user_id = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(UserStats {
        total_conversations: row.get("total_conversations"),
        total_nodes: row.get("total_nodes"),
        total_steps: row.get("total_steps"),
        total_analyses: row.get("total_analyses"),
    })
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
