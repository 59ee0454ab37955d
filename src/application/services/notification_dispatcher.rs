//! Notification dispatcher - whispers reward and level-up cards to players
//!
//! Delivery is best-effort: the progress mutation already happened and is
//! authoritative, so a failed whisper is logged and never retried, and never
//! rolls anything back.

use std::sync::Arc;

use crate::application::ports::outbound::{ChatPort, TemplatePort};
use crate::application::services::reward_applier::Outcome;
use crate::infrastructure::templates;

/// Sends the per-recipient chat messages for one applied outcome.
pub struct NotificationDispatcher {
    templates: Arc<dyn TemplatePort>,
    chat: Arc<dyn ChatPort>,
}

impl NotificationDispatcher {
    pub fn new(templates: Arc<dyn TemplatePort>, chat: Arc<dyn ChatPort>) -> Self {
        Self { templates, chat }
    }

    /// Whisper the reward card to the recipient's owners, then the level-up
    /// card when the threshold was crossed.
    ///
    /// The level-up whisper goes out only after the reward whisper completed;
    /// if the reward whisper failed, the level-up warning is withheld rather
    /// than delivered out of order.
    pub async fn notify(&self, outcome: &Outcome) {
        let reward_data = serde_json::json!({ "experience": outcome.granted });
        if !self
            .send_card(templates::REWARD_EXPERIENCE_CARD, reward_data, outcome)
            .await
        {
            return;
        }

        if outcome.leveled_up {
            self.send_card(templates::LEVELUP_CARD, serde_json::json!({}), outcome)
                .await;
        }
    }

    async fn send_card(
        &self,
        template_id: &str,
        data: serde_json::Value,
        outcome: &Outcome,
    ) -> bool {
        let content = match self.templates.render(template_id, data).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to render {}: {}", template_id, e);
                return false;
            }
        };

        if let Err(e) = self
            .chat
            .send_private_message(&outcome.participant.owners, &content)
            .await
        {
            tracing::warn!(
                "Failed to whisper {} to {}: {}",
                template_id,
                outcome.participant.name,
                e
            );
            return false;
        }

        true
    }
}
