//! Combat session entity - one encounter's participants as handed over by the host

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CombatId, ParticipantId, UserId};

/// One combatant in an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Player-controlled combatants receive the reward; the rest contribute
    /// their bounty to it.
    pub is_friendly: bool,
    /// Experience the participant is worth when defeated. Only read for
    /// hostiles.
    pub experience_value: u32,
    /// Users whispered when this participant is rewarded. Only read for
    /// friendlies.
    pub owners: Vec<UserId>,
}

impl Participant {
    /// A monster or other non-player combatant worth `experience_value`.
    pub fn hostile(name: impl Into<String>, experience_value: u32) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            is_friendly: false,
            experience_value,
            owners: Vec::new(),
        }
    }

    /// A player-owned combatant whispered through `owners`.
    pub fn friendly(name: impl Into<String>, owners: Vec<UserId>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            is_friendly: true,
            experience_value: 0,
            owners,
        }
    }
}

/// An encounter as handed over by the host when combat ends.
///
/// The host owns the session and its participants and destroys them after the
/// event; the engine only reads them. Per-character experience totals are not
/// snapshotted here - they are read through the character store at the moment
/// a reward is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSession {
    pub id: CombatId,
    /// Participants in host order.
    pub participants: Vec<Participant>,
}

impl CombatSession {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self {
            id: CombatId::new(),
            participants,
        }
    }
}
