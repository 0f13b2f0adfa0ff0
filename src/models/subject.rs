// src/models/subject.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A subject row from the live catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSubject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Build-time metadata for a subject key used by the career tables.
/// Used as the fallback when the catalog has no matching subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticSubject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Subject key -> static metadata.
pub type StaticTable = HashMap<String, StaticSubject>;

/// A subject ready for the pathway pages: catalog identity plus static topic tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedSubject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub topics: Vec<String>,
}

/// DTO for resolving arbitrary subject keys.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveSubjectsRequest {
    #[validate(length(max = 500))]
    pub keys: Vec<String>,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub catalog: Vec<CatalogSubject>,
}

/// DTO for resolving the subjects of one career.
#[derive(Debug, Deserialize, Validate)]
pub struct CareerSubjectsRequest {
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub catalog: Vec<CatalogSubject>,
}
