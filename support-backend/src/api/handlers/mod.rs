// src/api/handlers/mod.rs
pub mod recording_handler;
pub mod system_handler;
pub mod ticket_handler;
