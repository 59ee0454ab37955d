//! Outbound ports - Interfaces that the application requires from the host
//!
//! The embedding application implements these traits; the workflow services
//! depend only on the traits, never on host types.

mod character_store_port;
mod confirmation_port;
mod host_port;

pub use character_store_port::{CharacterStorePort, ExperienceBlock};
pub use confirmation_port::{ConfirmationPort, Decision};
pub use host_port::{AuthorizationPort, ChatPort, TemplatePort, WarningPort};
