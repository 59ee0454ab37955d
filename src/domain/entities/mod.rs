//! Domain entities - Core business objects with identity

mod combat_session;

pub use combat_session::{CombatSession, Participant};
