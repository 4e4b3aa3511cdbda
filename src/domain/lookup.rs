// ============================================================
// Layer 3 — LookupTable Domain Type
// ============================================================
// Distinct values per facet, precomputed so the client can
// build its filter drop-downs without scanning every chunk.
//
// Example lookup.json:
//   {
//     "module":     ["math", "reading-writing"],
//     "domain":     ["Algebra", "Craft and Structure"],
//     "difficulty": ["E", "H", "M"],
//     "skill":      ["Linear equations", "Words in Context"]
//   }
//
// BTreeMap keeps the facets in declaration order and BTreeSet
// keeps each value list sorted and free of duplicates.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// A categorical field whose distinct values are precomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Module,
    Domain,
    Difficulty,
    Skill,
}

impl Facet {
    /// Every facet, in output order
    pub const ALL: [Facet; 4] = [Facet::Module, Facet::Domain, Facet::Difficulty, Facet::Skill];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Module     => "module",
            Facet::Domain     => "domain",
            Facet::Difficulty => "difficulty",
            Facet::Skill      => "skill",
        }
    }
}

/// Facet name → sorted set of distinct non-empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LookupTable(BTreeMap<Facet, BTreeSet<String>>);

impl LookupTable {
    /// A table with every facet present and no values yet
    pub fn new() -> Self {
        Self(Facet::ALL.iter().map(|f| (*f, BTreeSet::new())).collect())
    }

    /// Record one observed value. Empty strings are ignored.
    pub fn insert(&mut self, facet: Facet, value: &str) {
        if value.is_empty() {
            return;
        }
        self.0.entry(facet).or_default().insert(value.to_string());
    }

    /// Sorted values for one facet
    pub fn values(&self, facet: Facet) -> impl Iterator<Item = &str> + '_ {
        self.0.get(&facet).into_iter().flatten().map(String::as_str)
    }

    /// Number of distinct values for one facet
    pub fn len(&self, facet: Facet) -> usize {
        self.0.get(&facet).map_or(0, BTreeSet::len)
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}
