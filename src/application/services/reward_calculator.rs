//! Reward calculator - pure experience-distribution arithmetic
//!
//! Partitions a finished combat's participants into hostiles and friendlies,
//! sums the hostile bounty and splits it evenly across the friendlies. Pure
//! and deterministic; every skip is decided here before any side effect
//! elsewhere in the workflow.

use crate::domain::entities::Participant;
use crate::domain::value_objects::{RewardGrant, RewardSkip};

/// Computes the reward for one finished combat.
pub struct RewardCalculator;

impl RewardCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the grant for `participants`, in host order.
    ///
    /// The share is `total_bounty / friendlies`, floored. The remainder is
    /// dropped, never redistributed; granting it to some recipients and not
    /// others is deliberately avoided.
    pub fn compute(&self, participants: &[Participant]) -> Result<RewardGrant, RewardSkip> {
        let (friendlies, hostiles): (Vec<&Participant>, Vec<&Participant>) =
            participants.iter().partition(|p| p.is_friendly);

        if hostiles.is_empty() {
            return Err(RewardSkip::NoHostiles);
        }

        let total_bounty: u32 = hostiles.iter().map(|p| p.experience_value).sum();
        if total_bounty == 0 {
            return Err(RewardSkip::ZeroBounty);
        }

        if friendlies.is_empty() {
            return Err(RewardSkip::NoRecipients);
        }

        let share = total_bounty / friendlies.len() as u32;
        if share == 0 {
            return Err(RewardSkip::ShareRoundsToZero);
        }

        Ok(RewardGrant {
            total_bounty,
            share,
            recipients: friendlies.into_iter().cloned().collect(),
        })
    }
}

impl Default for RewardCalculator {
    fn default() -> Self {
        Self::new()
    }
}
