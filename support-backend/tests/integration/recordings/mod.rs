// tests/integration/recordings/mod.rs
