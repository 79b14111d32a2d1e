//! Session domain module.
//!
//! This module contains the conversation state machine: the session model,
//! the observable store that owns it, and the dispatcher that drives one
//! request/response cycle per user turn.
//!
//! # Module Structure
//!
//! - `model`: Core session aggregate (`ChatSession`)
//! - `message`: Conversation message types (`MessageRole`, `ConversationMessage`)
//! - `store`: Observable, generation-counted session owner (`SessionStore`)
//! - `dispatcher`: Turn orchestration (`TurnDispatcher`)

mod dispatcher;
mod message;
mod model;
mod store;

// Re-export public API
pub use dispatcher::{TaskUpdateHook, TurnDispatcher};
pub use message::{ConversationMessage, MessageRole};
pub use model::ChatSession;
pub use store::SessionStore;
