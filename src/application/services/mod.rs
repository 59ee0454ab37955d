//! Application services - Use case implementations
//!
//! Each service covers one step of the end-of-combat reward workflow; the
//! [`CombatRewardService`] orchestrates them. Services receive their port
//! dependencies through their constructors.

pub mod combat_reward_service;
pub mod confirmation_gate;
pub mod notification_dispatcher;
pub mod reward_applier;
pub mod reward_calculator;

pub use combat_reward_service::CombatRewardService;
pub use confirmation_gate::ConfirmationGate;
pub use notification_dispatcher::NotificationDispatcher;
pub use reward_applier::{Outcome, RewardApplier};
pub use reward_calculator::RewardCalculator;
