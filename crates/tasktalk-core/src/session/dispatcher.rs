//! Turn dispatcher.
//!
//! Orchestrates one request/response cycle per user turn: optimistic append,
//! transport call, generation-checked application of the outcome.

use super::message::ConversationMessage;
use super::store::SessionStore;
use crate::transport::{ChatRequest, ChatTransport};
use std::sync::Arc;

/// Callback invoked after every successfully completed turn, informing the
/// host application that task state may have changed. Failures are swallowed.
pub type TaskUpdateHook = Box<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// Drives the conversation state machine for one session.
///
/// The dispatcher assumes at most one turn in flight at a time; the
/// presentation layer is expected to disable the submission affordance while
/// the session is loading. It does not queue or serialize submissions itself.
///
/// Every outcome of a turn — assistant reply, failure, stale completion — is
/// recorded in the [`SessionStore`]; none of the methods here report errors
/// to the caller.
pub struct TurnDispatcher {
    store: Arc<SessionStore>,
    transport: Arc<dyn ChatTransport>,
    user_id: i64,
    on_task_update: Option<TaskUpdateHook>,
}

impl TurnDispatcher {
    /// Creates a dispatcher for the given session store and transport.
    pub fn new(store: Arc<SessionStore>, transport: Arc<dyn ChatTransport>, user_id: i64) -> Self {
        Self {
            store,
            transport,
            user_id,
            on_task_update: None,
        }
    }

    /// Registers the task-update notification hook.
    ///
    /// The hook runs on the success path only; its result is ignored apart
    /// from a debug log, so a failing hook cannot corrupt session state.
    pub fn with_task_update_hook(mut self, hook: TaskUpdateHook) -> Self {
        self.on_task_update = Some(hook);
        self
    }

    /// The session store this dispatcher mutates.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Submits one user turn.
    ///
    /// Empty or whitespace-only input is a no-op, not an error. Otherwise the
    /// user message becomes visible immediately (optimistic update), the
    /// transport is invoked with the current conversation token, and the
    /// outcome is applied to the store — unless the session was reset while
    /// the call was in flight, in which case the completion is discarded.
    pub async fn submit(&self, text: &str) {
        let content = text.trim();
        if content.is_empty() {
            return;
        }

        let (generation, conversation_id) = self
            .store
            .begin_turn(ConversationMessage::user(content))
            .await;

        let request = ChatRequest {
            user_id: self.user_id,
            message: content.to_string(),
            conversation_id,
        };

        tracing::debug!(user_id = self.user_id, generation, "submitting turn");

        match self.transport.send_message(request).await {
            Ok(reply) => {
                let applied = self
                    .store
                    .complete_turn(
                        generation,
                        reply.conversation_id,
                        ConversationMessage::assistant(reply.response),
                    )
                    .await;
                if applied {
                    self.notify_task_update();
                } else {
                    tracing::debug!(generation, "discarding stale reply after reset");
                }
            }
            Err(err) => {
                let applied = self.store.fail_turn(generation, err.user_message()).await;
                if !applied {
                    tracing::debug!(generation, "discarding stale failure after reset");
                }
            }
        }
    }

    /// Starts a new chat: clears the session.
    ///
    /// Safe to call at any time, including while a turn is in flight; the
    /// in-flight completion will be discarded when it arrives.
    pub async fn new_chat(&self) {
        self.store.reset().await;
    }

    /// Dismisses the error banner.
    pub async fn dismiss_error(&self) {
        self.store.clear_error().await;
    }

    fn notify_task_update(&self) {
        if let Some(hook) = &self.on_task_update
            && let Err(err) = hook()
        {
            tracing::debug!("task update hook failed: {err:#}");
        }
    }
}
