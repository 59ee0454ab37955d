//! Domain layer - Core business objects with no external dependencies
//!
//! This layer contains:
//! - Entities: CombatSession and its Participants, as handed over by the host
//! - Value Objects: typed identifiers, the computed RewardGrant, the
//!   RewardSkip taxonomy

pub mod entities;
pub mod value_objects;
