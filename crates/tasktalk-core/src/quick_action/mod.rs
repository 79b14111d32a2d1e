//! Quick action module.
//!
//! A small fixed set of shortcut intents shown on the chat surface. Each
//! action either pre-fills the input (when it needs free-form completion) or
//! submits its prompt directly through the dispatcher.

mod model;
mod router;

// Re-export public API
pub use model::{PREFILL_SUFFIX, QuickAction, default_actions};
pub use router::QuickActionRouter;
