// tests/integration/system/mod.rs

pub mod health_tests;
