// src/pathways.rs

use serde::Deserialize;

use crate::models::{career::Career, subject::StaticTable};

const EMBEDDED: &str = include_str!("../data/pathways.json");

/// Static career guidance data: careers and the subject keys they reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pathways {
    #[serde(default)]
    pub careers: Vec<Career>,
    #[serde(default)]
    pub subjects: StaticTable,
}

impl Pathways {
    /// Tables compiled into the binary.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let pathways: Pathways = serde_json::from_str(raw)?;

        for career in &pathways.careers {
            for key in &career.subjects {
                if !pathways.subjects.contains_key(key) {
                    tracing::warn!("Career '{}' references unknown subject key '{}'", career.id, key);
                }
            }
        }

        Ok(pathways)
    }

    pub fn career(&self, id: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Careers filtered by category (case-insensitive) and a keyword
    /// matched against title and description.
    pub fn search(&self, category: Option<&str>, q: Option<&str>) -> Vec<&Career> {
        let keyword = q
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase);

        self.careers
            .iter()
            .filter(|c| category.is_none_or(|cat| c.category.eq_ignore_ascii_case(cat)))
            .filter(|c| {
                keyword.as_ref().is_none_or(|k| {
                    c.title.to_lowercase().contains(k.as_str())
                        || c.description.to_lowercase().contains(k.as_str())
                })
            })
            .collect()
    }
}
