// tests/integration/tickets/mod.rs

pub mod list_tests;
