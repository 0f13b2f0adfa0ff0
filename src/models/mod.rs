// src/models/mod.rs

pub mod career;
pub mod quiz;
pub mod subject;
