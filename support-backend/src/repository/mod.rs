// src/repository/mod.rs
pub mod recording_repository;
pub mod ticket_repository;
