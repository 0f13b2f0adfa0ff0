// src/handlers/mod.rs

pub mod career;
pub mod stats;
pub mod subject;
