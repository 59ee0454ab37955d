//! Confirmation gate - packages a computed grant for the game master's decision
//!
//! The gate has no domain logic of its own: it renders the confirmation
//! dialog from the grant and forwards the binary decision. Callers check
//! authorization before constructing the workflow, so the gate never runs for
//! a non-GM client.

use std::sync::Arc;

use crate::application::ports::outbound::{ConfirmationPort, Decision, TemplatePort};
use crate::domain::value_objects::RewardGrant;
use crate::infrastructure::templates;

/// Presents a pending reward to the game master and waits for the verdict.
pub struct ConfirmationGate {
    templates: Arc<dyn TemplatePort>,
    confirmations: Arc<dyn ConfirmationPort>,
}

impl ConfirmationGate {
    pub fn new(templates: Arc<dyn TemplatePort>, confirmations: Arc<dyn ConfirmationPort>) -> Self {
        Self {
            templates,
            confirmations,
        }
    }

    /// Show the grant and suspend until the game master decides.
    ///
    /// Nothing may be applied without an explicit acceptance, so a dialog
    /// that cannot be rendered resolves to [`Decision::Declined`].
    pub async fn request_confirmation(&self, grant: &RewardGrant) -> Decision {
        let data = serde_json::json!({
            "totalExperience": grant.total_bounty,
            "experiencePerParticipant": grant.share,
            "recipients": grant
                .recipients
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>(),
        });

        let markup = match self
            .templates
            .render(templates::CONFIRMATION_DIALOG, data)
            .await
        {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!("Failed to render confirmation dialog: {}", e);
                return Decision::Declined;
            }
        };

        self.confirmations.request(&markup).await
    }
}
