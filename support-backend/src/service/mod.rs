// src/service/mod.rs
pub mod recording_service;
pub mod storage_service;
pub mod ticket_service;
