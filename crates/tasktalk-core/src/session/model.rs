//! Chat session domain model.
//!
//! This module contains the core `ChatSession` aggregate that represents
//! one open chat surface's conversation state.

use super::message::ConversationMessage;
use serde::{Deserialize, Serialize};

/// The full state of one open conversation.
///
/// A session contains:
/// - The ordered turn history (append-only except on full reset)
/// - The server-assigned conversation token, once one has been issued
/// - The transient UI flags (loading spinner, dismissible error banner)
///
/// The session is owned exclusively by the
/// [`SessionStore`](super::SessionStore); one instance exists per open chat
/// surface, and nothing is persisted across restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Conversation history in display order.
    pub messages: Vec<ConversationMessage>,
    /// Opaque conversation token assigned by the assistant endpoint.
    /// Never invented client-side; forwarded on every request once set.
    pub conversation_id: Option<String>,
    /// True while a turn is in flight.
    pub loading: bool,
    /// Human-readable error from the last failed turn, if any.
    pub error: Option<String>,
}
