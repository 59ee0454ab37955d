//! Infrastructure layer - the event hook and fixed host-facing identifiers

pub mod hooks;
pub mod templates;
