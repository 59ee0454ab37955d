//! Character store port - Interface for character-sheet experience data

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Participant;

/// A participant's experience record as stored on the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    /// Experience accumulated so far.
    pub current: u32,
    /// Total at which the character may level up.
    pub threshold: u32,
}

/// Port for reading and mutating a participant's experience total.
///
/// The host owns the character data; this port exposes exactly the one field
/// pair the workflow needs. Reads happen at the moment a reward is applied,
/// not earlier, so the applier never works from a stale snapshot.
#[async_trait]
pub trait CharacterStorePort: Send + Sync {
    /// Read the participant's current experience record.
    async fn experience(&self, participant: &Participant) -> Result<ExperienceBlock>;

    /// Persist a new experience total.
    ///
    /// Must update only the experience total and leave every other character
    /// field untouched.
    async fn update_experience(&self, participant: &Participant, new_total: u32) -> Result<()>;
}
