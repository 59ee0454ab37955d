//! Value objects - Immutable objects defined by their attributes

mod ids;
mod reward;

pub use ids::{CombatId, ParticipantId, UserId};
pub use reward::{RewardGrant, RewardSkip};
