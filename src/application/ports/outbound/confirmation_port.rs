//! Confirmation port - Interface for the game master's accept/decline dialog

use async_trait::async_trait;

/// The game master's decision on a pending reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Declined,
}

/// Port for presenting the confirmation dialog.
///
/// The call suspends the workflow until the game master decides; there is no
/// timeout. An abandoned or dismissed dialog must resolve to
/// [`Decision::Declined`] so that nothing is ever applied without an explicit
/// acceptance.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Show `prompt_markup` and wait for the decision.
    async fn request(&self, prompt_markup: &str) -> Decision;
}
