// src/matcher.rs

//! Resolves the subject keys used by the static career tables to live
//! catalog subjects.

use serde::Serialize;

use crate::{
    models::subject::{CatalogSubject, EnhancedSubject, StaticTable},
    utils::text::normalize,
};

/// Heuristics a catalog entry can satisfy, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// Slug equals the key.
    Exact,
    /// Slug contains the key or the key contains the slug.
    Substring,
    /// Normalized name and normalized key contain one another.
    Name,
    /// Normalized category contains the normalized key.
    Category,
}

/// The key in both raw and normalized form, computed once per lookup.
struct Probe<'a> {
    raw: &'a str,
    normalized: String,
}

type Rule = fn(&CatalogSubject, &Probe<'_>) -> bool;

/// Evaluated in order; the first rule that holds names the match.
const CASCADE: [(MatchRule, Rule); 4] = [
    (MatchRule::Exact, exact_slug),
    (MatchRule::Substring, slug_substring),
    (MatchRule::Name, normalized_name),
    (MatchRule::Category, normalized_category),
];

fn exact_slug(entry: &CatalogSubject, probe: &Probe<'_>) -> bool {
    entry.slug.as_deref() == Some(probe.raw)
}

fn slug_substring(entry: &CatalogSubject, probe: &Probe<'_>) -> bool {
    match entry.slug.as_deref() {
        Some(slug) if !slug.is_empty() => slug.contains(probe.raw) || probe.raw.contains(slug),
        _ => false,
    }
}

fn normalized_name(entry: &CatalogSubject, probe: &Probe<'_>) -> bool {
    let name = normalize(&entry.name);
    name.contains(&probe.normalized) || probe.normalized.contains(&name)
}

fn normalized_category(entry: &CatalogSubject, probe: &Probe<'_>) -> bool {
    let Some(category) = entry.category.as_deref() else {
        return false;
    };
    let category = normalize(category);
    category.contains(&probe.normalized)
}

fn rule_for(entry: &CatalogSubject, probe: &Probe<'_>) -> Option<MatchRule> {
    CASCADE
        .iter()
        .find(|(_, rule)| rule(entry, probe))
        .map(|(kind, _)| *kind)
}

/// Returns the strongest rule `entry` satisfies for `key`, if any.
pub fn match_rule(entry: &CatalogSubject, key: &str) -> Option<MatchRule> {
    let probe = Probe {
        raw: key,
        normalized: normalize(key),
    };
    rule_for(entry, &probe)
}

/// Finds the first catalog entry (in catalog order) satisfying any rule.
pub fn find_match<'c>(key: &str, catalog: &'c [CatalogSubject]) -> Option<(&'c CatalogSubject, MatchRule)> {
    let probe = Probe {
        raw: key,
        normalized: normalize(key),
    };
    catalog
        .iter()
        .find_map(|entry| rule_for(entry, &probe).map(|rule| (entry, rule)))
}

/// Resolves one subject key.
///
/// Topics always come from the static table. Without a catalog match the
/// record is built from the static table alone, and without a static entry
/// from the raw key.
pub fn resolve(key: &str, catalog: &[CatalogSubject], static_table: &StaticTable) -> EnhancedSubject {
    let fallback = static_table.get(key);
    let topics = fallback.map(|s| s.topics.clone()).unwrap_or_default();

    match find_match(key, catalog) {
        Some((entry, rule)) => {
            tracing::debug!("Subject key '{}' matched catalog {} by {:?}", key, entry.id, rule);
            EnhancedSubject {
                id: entry.id.clone(),
                name: entry.name.clone(),
                description: entry.description.clone().unwrap_or_default(),
                slug: entry.slug.clone().unwrap_or_default(),
                icon: entry.icon.clone(),
                category: entry.category.clone(),
                topics,
            }
        }
        None => {
            tracing::debug!("Subject key '{}' has no catalog match, using static data", key);
            EnhancedSubject {
                id: key.to_string(),
                name: fallback
                    .and_then(|s| s.name.clone())
                    .unwrap_or_else(|| key.to_string()),
                description: fallback
                    .and_then(|s| s.description.clone())
                    .unwrap_or_default(),
                slug: key.to_string(),
                icon: None,
                category: None,
                topics,
            }
        }
    }
}

/// Resolves each key independently, preserving input order.
pub fn resolve_all<S: AsRef<str>>(
    keys: &[S],
    catalog: &[CatalogSubject],
    static_table: &StaticTable,
) -> Vec<EnhancedSubject> {
    keys.iter()
        .map(|key| resolve(key.as_ref(), catalog, static_table))
        .collect()
}
