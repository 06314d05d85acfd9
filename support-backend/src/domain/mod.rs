// src/domain/mod.rs
pub mod recording_model;
pub mod ticket_model;
