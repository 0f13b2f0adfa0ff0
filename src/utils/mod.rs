// src/utils/mod.rs

pub mod fields;
pub mod jwt;
pub mod text;
