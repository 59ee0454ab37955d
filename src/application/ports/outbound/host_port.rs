//! Host ports - authorization, template rendering, chat and warnings
//!
//! These cover the host facilities the workflow needs: the session user's
//! role, the markup template renderer, the whisper API and the notification
//! toast. Localization of the warning text is the host's concern, which is
//! why [`WarningPort`] receives the skip reason rather than a string.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::value_objects::{RewardSkip, UserId};

/// Authorization context of the user this engine instance runs for.
///
/// Every connected client sees the same combat-end event; only the game
/// master's client may drive the reward workflow.
pub trait AuthorizationPort: Send + Sync {
    /// Whether the invoking user holds the game-master role.
    fn is_game_master(&self) -> bool;
}

/// Markup rendering through the host's template engine.
#[async_trait]
pub trait TemplatePort: Send + Sync {
    /// Render the template identified by `template_id` with `data`.
    ///
    /// Template identifiers are the constants in
    /// [`crate::infrastructure::templates`].
    async fn render(&self, template_id: &str, data: serde_json::Value) -> Result<String>;
}

/// Private chat delivery through the host's messaging system.
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Whisper `content` to `recipients`.
    async fn send_private_message(&self, recipients: &[UserId], content: &str) -> Result<()>;
}

/// Advisory, user-facing warnings for the skips that merit one.
pub trait WarningPort: Send + Sync {
    /// Surface a localized warning for `skip` to the game master.
    fn warn(&self, skip: RewardSkip);
}
