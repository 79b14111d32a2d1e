//! Observable session store.
//!
//! The store owns the single [`ChatSession`] instance, applies mutations
//! atomically, and publishes a snapshot to subscribed observers after each
//! change so the presentation layer can re-render without polling.

use super::message::ConversationMessage;
use super::model::ChatSession;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, broadcast};

/// Buffered snapshots per observer before older ones are dropped.
const OBSERVER_CHANNEL_CAPACITY: usize = 32;

/// Owns the conversation state for one open chat surface.
///
/// All mutations are atomic with respect to observers: each one runs inside a
/// single write-lock critical section and is followed by exactly one snapshot
/// broadcast. The store has no knowledge of the network protocol; the
/// [`TurnDispatcher`](super::TurnDispatcher) drives it.
///
/// A generation counter identifies "which session instance" the store
/// currently holds. [`reset`](Self::reset) bumps it, which is how in-flight
/// completions dispatched against an earlier session are detected and
/// discarded (see [`complete_turn`](Self::complete_turn)).
pub struct SessionStore {
    session: RwLock<ChatSession>,
    generation: AtomicU64,
    observers: broadcast::Sender<ChatSession>,
}

impl SessionStore {
    /// Creates a store holding a fresh, empty session.
    pub fn new() -> Self {
        let (observers, _) = broadcast::channel(OBSERVER_CHANNEL_CAPACITY);
        Self {
            session: RwLock::new(ChatSession::default()),
            generation: AtomicU64::new(0),
            observers,
        }
    }

    /// Subscribes to session snapshots, one per mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatSession> {
        self.observers.subscribe()
    }

    /// Returns a clone of the current session state.
    pub async fn snapshot(&self) -> ChatSession {
        self.session.read().await.clone()
    }

    /// Returns the current session generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Appends a message to the conversation history.
    pub async fn append_message(&self, message: ConversationMessage) {
        let mut session = self.session.write().await;
        session.messages.push(message);
        self.publish(&session);
    }

    /// Overwrites the conversation token.
    pub async fn set_conversation_id(&self, conversation_id: impl Into<String>) {
        let mut session = self.session.write().await;
        session.conversation_id = Some(conversation_id.into());
        self.publish(&session);
    }

    /// Sets the loading flag.
    pub async fn set_loading(&self, loading: bool) {
        let mut session = self.session.write().await;
        session.loading = loading;
        self.publish(&session);
    }

    /// Sets the error banner text.
    pub async fn set_error(&self, error: impl Into<String>) {
        let mut session = self.session.write().await;
        session.error = Some(error.into());
        self.publish(&session);
    }

    /// Clears the error banner without touching anything else.
    pub async fn clear_error(&self) {
        let mut session = self.session.write().await;
        session.error = None;
        self.publish(&session);
    }

    /// Resets the session: clears messages, conversation token, and error in
    /// one atomic step, and bumps the generation so completions still in
    /// flight for the old session are discarded on arrival.
    ///
    /// The loading flag is deliberately left untouched; an in-flight
    /// completion lowers it when it lands (see [`complete_turn`](Self::complete_turn)).
    pub async fn reset(&self) {
        let mut session = self.session.write().await;
        session.messages.clear();
        session.conversation_id = None;
        session.error = None;
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.publish(&session);
    }

    /// Starts a turn: appends the optimistic user message, raises the loading
    /// flag, and clears any prior error, all in one atomic step.
    ///
    /// Returns the generation the turn belongs to and the conversation token
    /// to forward with the request.
    pub async fn begin_turn(&self, message: ConversationMessage) -> (u64, Option<String>) {
        let mut session = self.session.write().await;
        session.messages.push(message);
        session.loading = true;
        session.error = None;
        let generation = self.generation.load(Ordering::SeqCst);
        let conversation_id = session.conversation_id.clone();
        self.publish(&session);
        (generation, conversation_id)
    }

    /// Applies a successful completion for the turn started at `generation`.
    ///
    /// When the generation still matches: stores the server's conversation
    /// token, appends the assistant message, and lowers the loading flag, all
    /// in one atomic step. Returns `true`.
    ///
    /// When the session has been reset since dispatch: only lowers the
    /// loading flag and returns `false` — a stale reply must not resurrect
    /// state into a fresh session.
    pub async fn complete_turn(
        &self,
        generation: u64,
        conversation_id: impl Into<String>,
        message: ConversationMessage,
    ) -> bool {
        let mut session = self.session.write().await;
        let fresh = self.generation.load(Ordering::SeqCst) == generation;
        if fresh {
            session.conversation_id = Some(conversation_id.into());
            session.messages.push(message);
        }
        session.loading = false;
        self.publish(&session);
        fresh
    }

    /// Applies a failed completion for the turn started at `generation`.
    ///
    /// When the generation still matches: records the error and lowers the
    /// loading flag. The optimistic user message is retained — failures are
    /// not rolled back. Returns `true`.
    ///
    /// When the session has been reset since dispatch: only lowers the
    /// loading flag and returns `false`.
    pub async fn fail_turn(&self, generation: u64, error: impl Into<String>) -> bool {
        let mut session = self.session.write().await;
        let fresh = self.generation.load(Ordering::SeqCst) == generation;
        if fresh {
            session.error = Some(error.into());
        }
        session.loading = false;
        self.publish(&session);
        fresh
    }

    fn publish(&self, session: &ChatSession) {
        // No subscriber is fine; observers are optional.
        let _ = self.observers.send(session.clone());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_begin_turn_is_one_atomic_mutation() {
        let store = SessionStore::new();
        store.set_error("old failure").await;

        let mut observer = store.subscribe();
        // Drain nothing; subscription starts after the set_error above.
        let (generation, conversation_id) =
            store.begin_turn(ConversationMessage::user("hello")).await;

        assert_eq!(generation, 0);
        assert_eq!(conversation_id, None);

        // Exactly one snapshot, already carrying all three changes.
        let snapshot = observer.try_recv().unwrap();
        assert_eq!(snapshot.messages.len(), 1);
        assert!(snapshot.loading);
        assert_eq!(snapshot.error, None);
        assert!(observer.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_begin_turn_forwards_established_conversation_id() {
        let store = SessionStore::new();
        store.set_conversation_id("conv-7").await;

        let (_, conversation_id) = store.begin_turn(ConversationMessage::user("again")).await;
        assert_eq!(conversation_id, Some("conv-7".to_string()));
    }

    #[tokio::test]
    async fn test_reset_clears_everything_but_loading_and_bumps_generation() {
        let store = SessionStore::new();
        store.append_message(ConversationMessage::user("hi")).await;
        store.set_conversation_id("conv-1").await;
        store.set_error("boom").await;
        store.set_loading(true).await;

        store.reset().await;

        let session = store.snapshot().await;
        assert!(session.messages.is_empty());
        assert_eq!(session.conversation_id, None);
        assert_eq!(session.error, None);
        assert!(session.loading);
        assert_eq!(store.generation(), 1);
    }

    #[tokio::test]
    async fn test_stale_complete_turn_only_lowers_loading() {
        let store = SessionStore::new();
        let (generation, _) = store.begin_turn(ConversationMessage::user("hi")).await;
        store.reset().await;

        let applied = store
            .complete_turn(generation, "conv-9", ConversationMessage::assistant("late"))
            .await;

        assert!(!applied);
        let session = store.snapshot().await;
        assert!(session.messages.is_empty());
        assert_eq!(session.conversation_id, None);
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_stale_fail_turn_sets_no_error() {
        let store = SessionStore::new();
        let (generation, _) = store.begin_turn(ConversationMessage::user("hi")).await;
        store.reset().await;

        let applied = store.fail_turn(generation, "boom").await;

        assert!(!applied);
        let session = store.snapshot().await;
        assert_eq!(session.error, None);
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_observers_get_a_snapshot_per_mutation() {
        let store = SessionStore::new();
        let mut observer = store.subscribe();

        store.append_message(ConversationMessage::user("one")).await;
        store.set_loading(true).await;

        assert_eq!(observer.try_recv().unwrap().messages.len(), 1);
        assert!(observer.try_recv().unwrap().loading);
    }
}
