// src/services/mod.rs
pub mod provider;
