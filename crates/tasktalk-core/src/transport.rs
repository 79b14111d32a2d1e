//! Chat transport trait.
//!
//! Defines the interface for the one network call a turn makes: send a user
//! message to the assistant endpoint, receive the assistant's reply.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One outbound request to the assistant endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The acting user.
    pub user_id: i64,
    /// The user's message text (non-empty, already trimmed by the dispatcher).
    pub message: String,
    /// Conversation token from a previous reply; absent on the first turn of
    /// a session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// A successful reply from the assistant endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Server-assigned conversation token. The server is authoritative and
    /// may rotate this mid-conversation.
    pub conversation_id: String,
    /// The assistant's response text.
    pub response: String,
}

/// An abstract transport to the remote assistant endpoint.
///
/// This trait decouples the conversation state machine from the specific
/// network mechanism (e.g. a REST call, a test double).
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends one user message and waits for the assistant's reply.
    ///
    /// # Arguments
    ///
    /// * `request` - The message, acting user, and optional conversation token
    ///
    /// # Returns
    ///
    /// - `Ok(ChatReply)`: the assistant answered
    /// - `Err(_)`: the call failed; the error's `user_message()` is what the
    ///   session surfaces
    async fn send_message(&self, request: ChatRequest) -> Result<ChatReply>;
}
