//! Quick action domain models.

use serde::{Deserialize, Serialize};

/// Prompt suffix marking an action that needs free-form completion from the
/// user instead of being submitted as-is.
pub const PREFILL_SUFFIX: &str = ": ";

/// A single quick-action shortcut shown on the chat surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Display label for the shortcut button.
    pub label: String,
    /// Prompt template the shortcut expands to.
    pub prompt: String,
}

impl QuickAction {
    /// Creates a quick action.
    pub fn new(label: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            prompt: prompt.into(),
        }
    }

    /// Whether this action needs the user to finish the prompt before
    /// sending. Such prompts end with [`PREFILL_SUFFIX`] and are routed to
    /// the input surface instead of the dispatcher.
    pub fn requires_input(&self) -> bool {
        self.prompt.ends_with(PREFILL_SUFFIX)
    }
}

/// The fixed shortcut catalog for the task assistant.
pub fn default_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("Add Task", "Add a task: "),
        QuickAction::new("Show All", "Show all my tasks"),
        QuickAction::new("Pending", "Show pending tasks"),
        QuickAction::new("Completed", "Show completed tasks"),
    ]
}
