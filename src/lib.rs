//! Reward Experience - combat experience distribution for tabletop sessions
//!
//! When the host application's combat engine finishes an encounter, this
//! crate:
//! - Sums the experience value carried by defeated hostiles and splits it
//!   evenly (floor) across the player-owned participants
//! - Asks the game master to confirm the reward before anything is applied
//! - Persists the new experience total on each recipient's character record
//! - Whispers a reward card to each recipient, plus a level-up warning when
//!   the new total crosses the character's threshold
//!
//! The crate is a library with no surface of its own: the host drives it
//! through [`infrastructure::hooks::CombatEndHook`] and supplies every
//! outbound capability (authorization, template rendering, chat, character
//! data, dialogs, warnings) through the ports in
//! [`application::ports::outbound`].

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::CombatRewardService;
pub use domain::entities::{CombatSession, Participant};
pub use domain::value_objects::{RewardGrant, RewardSkip};
