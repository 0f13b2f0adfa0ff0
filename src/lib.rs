// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod pathways;
pub mod routes;
pub mod state;
pub mod stats;
pub mod utils;

pub use matcher::{resolve, resolve_all};
pub use routes::create_router;
pub use stats::aggregate;
