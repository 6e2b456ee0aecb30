// Room archetype selection.
//
// A free-text room label (usually the classifier's top label) is lowercased and
// tested against an ordered rule list. First match wins; no match falls back to
// Generic. Rule order is significant: "Living Room / Office" is Living.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Living,
    Dining,
    WorkRest,
    Generic,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Living => "living",
            Archetype::Dining => "dining",
            Archetype::WorkRest => "work_rest",
            Archetype::Generic => "generic",
        }
    }

    /// Built-in assets suggested for an empty room of this archetype.
    pub fn starter_assets(&self) -> &'static [&'static str] {
        match self {
            Archetype::Living => &["Couch.glb", "Table.glb", "Chair.glb"],
            Archetype::Dining => &["Table.glb", "Chair.glb", "Chair.glb"],
            Archetype::WorkRest => &["Table.glb", "Chair.glb"],
            Archetype::Generic => &["Table.glb", "Chair.glb", "Chair.glb"],
        }
    }
}

/// One entry of the ordered selection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeRule {
    pub archetype: Archetype,
    /// Lowercase substrings; any one matching selects `archetype`.
    pub keywords: Vec<String>,
}

impl ArchetypeRule {
    pub fn new(archetype: Archetype, keywords: &[&str]) -> Self {
        Self {
            archetype,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn matches(&self, lower_label: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && lower_label.contains(k.to_lowercase().as_str()))
    }
}

pub fn default_rules() -> Vec<ArchetypeRule> {
    vec![
        ArchetypeRule::new(Archetype::Living, &["living", "hall", "lounge"]),
        ArchetypeRule::new(Archetype::Dining, &["kitchen", "dining"]),
        ArchetypeRule::new(Archetype::WorkRest, &["office", "study", "bedroom"]),
    ]
}

pub fn select_archetype(label: &str, rules: &[ArchetypeRule]) -> Archetype {
    let lower = label.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.archetype)
        .unwrap_or(Archetype::Generic)
}

/// Starter furniture for a room label.
pub fn recommend_assets(label: &str, rules: &[ArchetypeRule]) -> Vec<String> {
    select_archetype(label, rules)
        .starter_assets()
        .iter()
        .map(|a| a.to_string())
        .collect()
}
