// support-backend/src/infrastructure/mod.rs

pub mod supabase;
