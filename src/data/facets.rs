// ============================================================
// Layer 4 — Facet Builder
// ============================================================
// Scans the normalised questions once and collects the
// distinct non-empty values of each facet:
//
//   module     ← NormalizedQuestion.module
//   domain     ← NormalizedQuestion.primary_class_cd_desc
//   difficulty ← NormalizedQuestion.difficulty
//   skill      ← NormalizedQuestion.skill_desc
//
// LookupTable does the sorting and de-duplication, so the
// result does not depend on record order.

use crate::domain::lookup::{Facet, LookupTable};
use crate::domain::question::NormalizedQuestion;

/// The value a question contributes to one facet
pub fn facet_value(question: &NormalizedQuestion, facet: Facet) -> &str {
    match facet {
        Facet::Module     => &question.module,
        Facet::Domain     => question.domain(),
        Facet::Difficulty => &question.difficulty,
        Facet::Skill      => question.skill(),
    }
}

/// Build the lookup table for a full run
pub fn build_lookup(questions: &[NormalizedQuestion]) -> LookupTable {
    let mut table = LookupTable::new();

    for question in questions {
        for facet in Facet::ALL {
            table.insert(facet, facet_value(question, facet));
        }
    }

    for facet in Facet::ALL {
        tracing::debug!("Facet '{}': {} distinct values", facet.as_str(), table.len(facet));
        tracing::trace!("Facet '{}': {:?}", facet.as_str(), table.values(facet).collect::<Vec<_>>());
    }

    table
}
