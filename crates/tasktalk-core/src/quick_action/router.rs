//! Quick action routing.

use super::model::QuickAction;
use crate::session::TurnDispatcher;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Buffered pre-fill events per subscriber.
const PREFILL_CHANNEL_CAPACITY: usize = 16;

/// Routes quick-action shortcuts either to the input surface (pre-fill) or
/// straight through the [`TurnDispatcher`].
///
/// The pre-fill channel is a broadcast with no delivery guarantee: the router
/// neither knows nor cares whether an input surface is listening.
pub struct QuickActionRouter {
    dispatcher: Arc<TurnDispatcher>,
    prefill: broadcast::Sender<String>,
}

impl QuickActionRouter {
    /// Creates a router in front of the given dispatcher.
    pub fn new(dispatcher: Arc<TurnDispatcher>) -> Self {
        let (prefill, _) = broadcast::channel(PREFILL_CHANNEL_CAPACITY);
        Self {
            dispatcher,
            prefill,
        }
    }

    /// Subscribes to pre-fill events (the prompt text to place in the input).
    pub fn subscribe_prefill(&self) -> broadcast::Receiver<String> {
        self.prefill.subscribe()
    }

    /// Dispatches one shortcut.
    ///
    /// Actions whose prompt needs free-form completion emit a pre-fill event
    /// and do not touch the session; all others are submitted exactly as if
    /// the user had typed the prompt.
    pub async fn dispatch(&self, action: &QuickAction) {
        if action.requires_input() {
            // No subscriber is fine.
            let _ = self.prefill.send(action.prompt.clone());
        } else {
            self.dispatcher.submit(&action.prompt).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::quick_action::default_actions;
    use crate::session::{MessageRole, SessionStore};
    use crate::transport::{ChatReply, ChatRequest, ChatTransport};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingTransport {
        requests: Mutex<Vec<ChatRequest>>,
        response: String,
    }

    #[async_trait]
    impl ChatTransport for RecordingTransport {
        async fn send_message(&self, request: ChatRequest) -> Result<ChatReply> {
            self.requests.lock().unwrap().push(request);
            Ok(ChatReply {
                conversation_id: "conv-1".to_string(),
                response: self.response.clone(),
            })
        }
    }

    fn router_with(response: &str) -> (QuickActionRouter, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport {
            requests: Mutex::new(Vec::new()),
            response: response.to_string(),
        });
        let dispatcher = Arc::new(TurnDispatcher::new(
            Arc::new(SessionStore::new()),
            transport.clone(),
            1,
        ));
        (QuickActionRouter::new(dispatcher), transport)
    }

    fn action(label: &str) -> QuickAction {
        default_actions()
            .into_iter()
            .find(|a| a.label == label)
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_task_emits_prefill_and_leaves_session_alone() {
        let (router, transport) = router_with("unused");
        let mut prefill = router.subscribe_prefill();

        router.dispatch(&action("Add Task")).await;

        assert_eq!(prefill.try_recv().unwrap(), "Add a task: ");
        assert!(transport.requests.lock().unwrap().is_empty());
        assert!(
            router
                .dispatcher
                .store()
                .snapshot()
                .await
                .messages
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_show_all_submits_the_prompt_verbatim() {
        let (router, transport) = router_with("1. Buy milk");

        router.dispatch(&action("Show All")).await;

        let requests = transport.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].message, "Show all my tasks");

        let session = router.dispatcher.store().snapshot().await;
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, MessageRole::User);
        assert_eq!(session.messages[0].content, "Show all my tasks");
        assert_eq!(session.messages[1].role, MessageRole::Assistant);
        assert_eq!(session.messages[1].content, "1. Buy milk");
    }

    #[tokio::test]
    async fn test_prefill_without_subscriber_is_not_an_error() {
        let (router, _) = router_with("unused");
        // No subscriber attached; must not panic or mutate anything.
        router.dispatch(&action("Add Task")).await;
    }
}
