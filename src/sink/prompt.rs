//! Interactive confirmation of a generated message.

use dialoguer::Input;
use tracing::warn;

/// Trait for asking the user to edit and confirm a commit message.
///
/// This abstraction allows mocking the terminal prompt in tests.
#[cfg_attr(test, mockall::automock)]
pub trait MessagePrompt: Send + Sync {
    /// Show `initial` as editable text. `None` means the user produced no
    /// value.
    fn edit(&self, initial: &str) -> Option<String>;
}

/// Single-line terminal prompt backed by dialoguer.
pub struct TerminalPrompt;

impl MessagePrompt for TerminalPrompt {
    fn edit(&self, initial: &str) -> Option<String> {
        let result = Input::<String>::new()
            .with_prompt("Edit and confirm commit message")
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(text) => Some(text),
            Err(e) => {
                // Interrupted or no terminal: same as cancelling
                warn!("Commit message prompt closed: {}", e);
                None
            }
        }
    }
}
