// tests/integration/mod.rs

pub mod recordings;
pub mod system;
pub mod tickets;
