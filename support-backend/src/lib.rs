// src/lib.rs
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod middleware;
pub mod repository;
pub mod service;
pub mod utils;
