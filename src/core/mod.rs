// src/core/mod.rs

pub mod compound;
pub mod engine;
pub mod rules;
pub mod store;
pub mod types;
