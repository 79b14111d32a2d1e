//! tasktalk-core — conversation state machine for the task assistant chat
//! surface.
//!
//! The crate keeps one chat conversation's turn history, threads the
//! server-assigned conversation token across turns, and synchronizes the
//! UI-facing flags (loading, error) with one outbound request per user turn.
//!
//! # Module Structure
//!
//! - [`session`]: session model, observable store, turn dispatcher
//! - [`quick_action`]: shortcut catalog and routing
//! - [`transport`]: the seam to the remote assistant endpoint
//! - [`config`]: client configuration
//! - [`error`]: shared error type

pub mod config;
pub mod error;
pub mod quick_action;
pub mod session;
pub mod transport;

// Re-export common error type
pub use error::{ChatError, Result};
