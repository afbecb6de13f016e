//! Advice Chat Routes

use advisor::{ChatMessage, Reply, Role};
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::{telemetry, AppState};

/// Longest accepted chat message (bytes)
const MAX_MESSAGE_LEN: usize = 2000;

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Session to continue; a new one is started when absent or unknown
    pub session_id: Option<Uuid>,
    pub message: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub reply: Reply,
    pub history: Vec<ChatMessage>,
}

/// Answer one chat message
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }
    if message.len() > MAX_MESSAGE_LEN {
        return Err(ApiError::BadRequest(format!(
            "message longer than {} bytes",
            MAX_MESSAGE_LEN
        )));
    }

    // Snapshot the transcript so the lock is not held across the advisor call
    let (session_id, transcript) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_or_create(request.session_id);
        (session.id, session.messages().cloned().collect::<Vec<_>>())
    };

    let reply = state.advisor.respond(&transcript, message).await;
    telemetry::record_chat_message(reply.source);

    let mut sessions = state.sessions.write().await;
    let session = sessions.get_or_create(Some(session_id));
    session.push(ChatMessage::new(Role::User, message));
    session.push(ChatMessage::new(Role::Assistant, reply.text.clone()));
    debug!("Session {} now holds {} messages", session.id, session.len());

    Ok(Json(ChatResponse {
        session_id: session.id,
        history: session.messages().cloned().collect(),
        reply,
    }))
}
