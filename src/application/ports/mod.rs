//! Ports - Interfaces between the application layer and the host

pub mod outbound;
