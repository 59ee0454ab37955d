//! Reward value objects - the computed grant and the reasons to skip one

use serde::{Deserialize, Serialize};

use crate::domain::entities::Participant;

/// One combat's worth of experience, split across its recipients.
///
/// Ephemeral: computed once per combat end, consumed by the confirmation and
/// application steps, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardGrant {
    /// Sum of the experience values carried by the defeated hostiles.
    pub total_bounty: u32,
    /// `total_bounty / recipients.len()`, floored. Computed once and granted
    /// identically to every recipient; the division remainder is dropped.
    pub share: u32,
    /// The friendly participants the share is granted to.
    pub recipients: Vec<Participant>,
}

/// Reasons the reward workflow stops without touching any participant.
///
/// All of these are expected outcomes rather than faults; none of them
/// propagates to the host as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RewardSkip {
    #[error("combat ended without an active session")]
    NoActiveCombat,

    #[error("no hostile participants in combat")]
    NoHostiles,

    #[error("hostiles carry no experience value")]
    ZeroBounty,

    #[error("no friendly participants to reward")]
    NoRecipients,

    #[error("per-participant share rounds down to zero")]
    ShareRoundsToZero,

    #[error("invoking user is not the game master")]
    Unauthorized,

    #[error("game master declined the reward")]
    Declined,
}

impl RewardSkip {
    /// Whether this skip surfaces an advisory warning to the game master.
    ///
    /// The remaining variants abort silently: zero-value combats and
    /// sub-integer shares are routine no-ops, non-GM clients must not be
    /// told anything, and a decline is its own feedback.
    pub fn warns_user(&self) -> bool {
        matches!(
            self,
            Self::NoActiveCombat | Self::NoHostiles | Self::NoRecipients
        )
    }
}
