//! Combat reward service - the end-of-combat experience workflow
//!
//! Orchestrates the full flow for one combat-end event: authorization check,
//! reward computation, game-master confirmation, per-recipient application
//! and notification. Every skip is decided before any participant is
//! touched; once application starts, the only remaining failure mode is
//! best-effort notification delivery.
//!
//! All dependencies arrive through the constructor. There is no process-wide
//! manager instance; the host builds one service and keeps it alongside its
//! other session state.

use std::sync::Arc;

use crate::application::ports::outbound::{
    AuthorizationPort, CharacterStorePort, ChatPort, ConfirmationPort, Decision, TemplatePort,
    WarningPort,
};
use crate::application::services::{
    ConfirmationGate, NotificationDispatcher, Outcome, RewardApplier, RewardCalculator,
};
use crate::domain::entities::CombatSession;
use crate::domain::value_objects::RewardSkip;

/// Drives the reward workflow for combat-end events.
pub struct CombatRewardService {
    authorization: Arc<dyn AuthorizationPort>,
    warnings: Arc<dyn WarningPort>,
    calculator: RewardCalculator,
    gate: ConfirmationGate,
    applier: RewardApplier,
    dispatcher: NotificationDispatcher,
}

impl CombatRewardService {
    pub fn new(
        authorization: Arc<dyn AuthorizationPort>,
        templates: Arc<dyn TemplatePort>,
        chat: Arc<dyn ChatPort>,
        store: Arc<dyn CharacterStorePort>,
        confirmations: Arc<dyn ConfirmationPort>,
        warnings: Arc<dyn WarningPort>,
    ) -> Self {
        Self {
            authorization,
            warnings,
            calculator: RewardCalculator::new(),
            gate: ConfirmationGate::new(templates.clone(), confirmations),
            applier: RewardApplier::new(store),
            dispatcher: NotificationDispatcher::new(templates, chat),
        }
    }

    /// Handle one end-of-combat event.
    ///
    /// `session` is `None` when the host fired the hook without an active
    /// combat. Returns the per-recipient outcomes on success, or the skip
    /// reason; skips are expected outcomes, not faults.
    pub async fn handle_combat_ended(
        &self,
        session: Option<&CombatSession>,
    ) -> Result<Vec<Outcome>, RewardSkip> {
        if !self.authorization.is_game_master() {
            // Every client sees the event; the non-GM ones stay quiet.
            return Err(self.skip(RewardSkip::Unauthorized));
        }

        let session = match session {
            Some(session) => session,
            None => return Err(self.skip(RewardSkip::NoActiveCombat)),
        };

        let grant = match self.calculator.compute(&session.participants) {
            Ok(grant) => grant,
            Err(skip) => return Err(self.skip(skip)),
        };

        tracing::info!(
            "Combat {} yields {} experience, {} per participant across {} recipients",
            session.id,
            grant.total_bounty,
            grant.share,
            grant.recipients.len()
        );

        if self.gate.request_confirmation(&grant).await == Decision::Declined {
            tracing::info!("Game master declined the reward for combat {}", session.id);
            return Err(RewardSkip::Declined);
        }

        let outcomes = self.applier.apply(&grant).await;
        for outcome in &outcomes {
            // Each recipient's persistence already completed; whispers follow it.
            self.dispatcher.notify(outcome).await;
        }

        Ok(outcomes)
    }

    fn skip(&self, skip: RewardSkip) -> RewardSkip {
        if skip.warns_user() {
            self.warnings.warn(skip);
        } else {
            tracing::debug!("Reward workflow skipped: {}", skip);
        }
        skip
    }
}
