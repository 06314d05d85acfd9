// src/api/dto/mod.rs
pub mod recording_dto;
pub mod system_dto;
pub mod ticket_dto;
