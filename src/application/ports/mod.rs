// src/application/ports/mod.rs
pub mod audit;
pub mod security;
pub mod time;
