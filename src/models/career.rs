// src/models/career.rs

use serde::{Deserialize, Serialize};

/// A career from the static guidance tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Career family (e.g., "Healthcare", "Engineering").
    pub category: String,

    /// Subject keys recommended for this career.
    /// Resolved against the live catalog on request.
    #[serde(default)]
    pub subjects: Vec<String>,
}
