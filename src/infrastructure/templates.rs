//! Template identifiers the host resolves to markup templates
//!
//! The engine never renders markup itself; it passes one of these constants
//! to [`TemplatePort::render`](crate::application::ports::outbound::TemplatePort)
//! along with the template's data.

/// Card whispered to a player with the experience amount earned.
pub const REWARD_EXPERIENCE_CARD: &str = "reward-card";

/// Card whispered to a player whose new total crossed the level-up threshold.
pub const LEVELUP_CARD: &str = "level-up-card";

/// Dialog presented to the game master before any reward is applied.
pub const CONFIRMATION_DIALOG: &str = "confirmation-dialog";
