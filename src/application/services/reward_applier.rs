//! Reward applier - persists the per-recipient experience gain
//!
//! Runs only after the game master accepted the grant. Each recipient is
//! handled independently: the character record is re-read at application
//! time, the new total is persisted, and the level-up check compares the new
//! total against that recipient's own threshold.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::application::ports::outbound::CharacterStorePort;
use crate::domain::entities::Participant;
use crate::domain::value_objects::RewardGrant;

/// What happened to one recipient of an accepted grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub participant: Participant,
    /// The share actually granted; identical for every recipient.
    pub granted: u32,
    pub new_total: u32,
    /// Whether `new_total` reached the recipient's level-up threshold.
    pub leveled_up: bool,
}

/// Applies an accepted grant to every recipient's character record.
pub struct RewardApplier {
    store: Arc<dyn CharacterStorePort>,
}

impl RewardApplier {
    pub fn new(store: Arc<dyn CharacterStorePort>) -> Self {
        Self { store }
    }

    /// Apply `grant` to each recipient and return the outcomes.
    ///
    /// Recipients are disjoint, so the applications are issued concurrently.
    /// A store failure drops that one recipient from the outcomes (logged,
    /// not retried) and leaves the others unaffected; a recipient's progress
    /// is either durably updated or untouched.
    pub async fn apply(&self, grant: &RewardGrant) -> Vec<Outcome> {
        let applications = grant
            .recipients
            .iter()
            .map(|participant| self.apply_one(participant, grant.share));

        join_all(applications).await.into_iter().flatten().collect()
    }

    async fn apply_one(&self, participant: &Participant, share: u32) -> Option<Outcome> {
        let experience = match self.store.experience(participant).await {
            Ok(experience) => experience,
            Err(e) => {
                tracing::error!(
                    "Failed to read experience for {}: {}",
                    participant.name,
                    e
                );
                return None;
            }
        };

        // Caps at u32::MAX rather than wrapping when a total nears the ceiling.
        let new_total = experience.current.saturating_add(share);
        if let Err(e) = self.store.update_experience(participant, new_total).await {
            tracing::error!(
                "Failed to persist experience for {}: {}",
                participant.name,
                e
            );
            return None;
        }

        Some(Outcome {
            participant: participant.clone(),
            granted: share,
            new_total,
            leveled_up: new_total >= experience.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryStore;

    #[tokio::test]
    async fn level_up_is_evaluated_per_recipient() {
        let aria = Participant::friendly("Aria", vec![]);
        let bram = Participant::friendly("Bram", vec![]);
        let store = Arc::new(
            InMemoryStore::default()
                .with_record(&aria, 90, 100)
                .with_record(&bram, 90, 200),
        );
        let grant = RewardGrant {
            total_bounty: 30,
            share: 15,
            recipients: vec![aria.clone(), bram.clone()],
        };

        let outcomes = RewardApplier::new(store.clone()).apply(&grant).await;

        assert_eq!(outcomes.len(), 2);
        let for_aria = outcomes.iter().find(|o| o.participant.id == aria.id).unwrap();
        assert_eq!(for_aria.new_total, 105);
        assert!(for_aria.leveled_up);

        let for_bram = outcomes.iter().find(|o| o.participant.id == bram.id).unwrap();
        assert_eq!(for_bram.new_total, 105);
        assert!(!for_bram.leveled_up);

        assert_eq!(store.record(aria.id).unwrap().current, 105);
        assert_eq!(store.record(bram.id).unwrap().current, 105);
    }

    #[tokio::test]
    async fn each_recipient_is_updated_exactly_once() {
        let aria = Participant::friendly("Aria", vec![]);
        let store = Arc::new(InMemoryStore::default().with_record(&aria, 10, 100));
        let grant = RewardGrant {
            total_bounty: 12,
            share: 12,
            recipients: vec![aria.clone()],
        };

        RewardApplier::new(store.clone()).apply(&grant).await;

        assert_eq!(store.updates.lock().unwrap().as_slice(), [(aria.id, 22)]);
    }

    #[tokio::test]
    async fn experience_total_saturates_at_the_ceiling() {
        let aria = Participant::friendly("Aria", vec![]);
        let store = Arc::new(InMemoryStore::default().with_record(&aria, u32::MAX - 5, 100));
        let grant = RewardGrant {
            total_bounty: 10,
            share: 10,
            recipients: vec![aria.clone()],
        };

        let outcomes = RewardApplier::new(store.clone()).apply(&grant).await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].new_total, u32::MAX);
        assert!(outcomes[0].leveled_up);
        assert_eq!(store.record(aria.id).unwrap().current, u32::MAX);
    }

    #[tokio::test]
    async fn store_failure_for_one_recipient_spares_the_others() {
        let aria = Participant::friendly("Aria", vec![]);
        // Bram has no character record, so his read fails.
        let bram = Participant::friendly("Bram", vec![]);
        let store = Arc::new(InMemoryStore::default().with_record(&aria, 50, 100));
        let grant = RewardGrant {
            total_bounty: 20,
            share: 10,
            recipients: vec![bram.clone(), aria.clone()],
        };

        let outcomes = RewardApplier::new(store.clone()).apply(&grant).await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].participant.id, aria.id);
        assert_eq!(store.record(aria.id).unwrap().current, 60);
    }
}
