//! Application layer - Workflow services and the ports they depend on

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
