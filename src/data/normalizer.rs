// ============================================================
// Layer 4 — Record Normalizer
// ============================================================
// Maps one RawRecord onto the fixed NormalizedQuestion schema.
//
// Different dumps name the same field differently, so every
// target field has an ordered list of candidate source fields.
// The first candidate holding a non-empty value wins; if none
// does, the field falls back to a default ("" or null).
//
//   target                 candidates
//   ─────────────────────  ──────────────────────────────────
//   uId                    uId, id, questionId
//   questionId             questionId, id, uId
//   module                 module, else inferred from category
//   primary_class_cd_desc  primary_class_cd_desc, domain
//   difficulty             difficulty, diff
//   score_band_range_cd    score_band_range_cd, band
//   stem_html              stem_html, stem, question_html
//   choices                choices, options
//   correct_choice_index   correct_choice_index, answer_index
//   explanation_html       explanation_html, explanation
//
// Normalising never fails. Odd types simply don't match and
// the chain moves on to the next candidate or the default.

use serde_json::Value;

use crate::domain::question::{NormalizedQuestion, MODULE_MATH, MODULE_READING_WRITING};
use crate::domain::record::RawRecord;

const UID_FIELDS:         &[&str] = &["uId", "id", "questionId"];
const QUESTION_ID_FIELDS: &[&str] = &["questionId", "id", "uId"];
const MODULE_FIELDS:      &[&str] = &["module"];
const DOMAIN_FIELDS:      &[&str] = &["primary_class_cd_desc", "domain"];
const SKILL_CD_FIELDS:    &[&str] = &["skill_cd"];
const SKILL_DESC_FIELDS:  &[&str] = &["skill_desc"];
const DIFFICULTY_FIELDS:  &[&str] = &["difficulty", "diff"];
const SCORE_BAND_FIELDS:  &[&str] = &["score_band_range_cd", "band"];
const STEM_FIELDS:        &[&str] = &["stem_html", "stem", "question_html"];
const CHOICES_FIELDS:     &[&str] = &["choices", "options"];
const EXPLANATION_FIELDS: &[&str] = &["explanation_html", "explanation"];

const CATEGORY_FIELD:       &str = "category";
const CORRECT_INDEX_FIELD:  &str = "correct_choice_index";
const ANSWER_INDEX_FIELD:   &str = "answer_index";

/// True when the record carries an identifier under any of
/// `uId`, `id` or `questionId`. Records failing this are dropped.
pub fn has_identifier(record: &RawRecord) -> bool {
    first_text(record, UID_FIELDS).is_some()
}

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalise one record. Pure, never fails.
    pub fn normalize(&self, record: &RawRecord) -> NormalizedQuestion {
        NormalizedQuestion {
            u_id:                  text_or_empty(record, UID_FIELDS),
            question_id:           text_or_empty(record, QUESTION_ID_FIELDS),
            module:                module_of(record),
            primary_class_cd_desc: text_or_empty(record, DOMAIN_FIELDS),
            skill_cd:              text_or_empty(record, SKILL_CD_FIELDS),
            skill_desc:            text_or_empty(record, SKILL_DESC_FIELDS),
            difficulty:            text_or_empty(record, DIFFICULTY_FIELDS),
            score_band_range_cd:   first_scalar(record, SCORE_BAND_FIELDS),
            stem_html:             text_or_empty(record, STEM_FIELDS),
            choices:               first_array(record, CHOICES_FIELDS),
            correct_choice_index:  correct_index_of(record),
            explanation_html:      text_or_empty(record, EXPLANATION_FIELDS),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Fallback chains ──────────────────────────────────────────────────────────

/// First non-empty string or number, rendered as text
fn first_text(record: &RawRecord, keys: &[&str]) -> Option<String> {
    record.present(keys).find_map(|value| match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn text_or_empty(record: &RawRecord, keys: &[&str]) -> String {
    first_text(record, keys).unwrap_or_default()
}

/// First non-empty string or number, kept as the source value
fn first_scalar(record: &RawRecord, keys: &[&str]) -> Option<Value> {
    record.present(keys)
        .find(|value| value.is_string() || value.is_number())
        .cloned()
}

fn first_array(record: &RawRecord, keys: &[&str]) -> Option<Vec<Value>> {
    record.present(keys).find_map(|value| value.as_array().cloned())
}

/// Explicit module wins; otherwise "math" when the category
/// mentions maths in any case, else "reading-writing".
fn module_of(record: &RawRecord) -> String {
    if let Some(module) = first_text(record, MODULE_FIELDS) {
        return module;
    }

    let category = record
        .get(CATEGORY_FIELD)
        .and_then(Value::as_str)
        .unwrap_or("");

    if category.to_lowercase().contains(MODULE_MATH) {
        MODULE_MATH.to_string()
    } else {
        MODULE_READING_WRITING.to_string()
    }
}

/// `correct_choice_index` only counts when it is already an
/// integer (0 included); otherwise `answer_index` is tried.
fn correct_index_of(record: &RawRecord) -> Option<i64> {
    record
        .get(CORRECT_INDEX_FIELD)
        .and_then(Value::as_i64)
        .or_else(|| record.get(ANSWER_INDEX_FIELD).and_then(Value::as_i64))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn norm(value: Value) -> NormalizedQuestion {
        Normalizer::new().normalize(&RawRecord::new(value))
    }

    #[test]
    fn test_identifier_fallbacks() {
        let q = norm(json!({"id": "abc"}));
        assert_eq!(q.u_id, "abc");
        assert_eq!(q.question_id, "abc");

        let q = norm(json!({"uId": "u1", "questionId": "q1"}));
        assert_eq!(q.u_id, "u1");
        assert_eq!(q.question_id, "q1");
    }

    #[test]
    fn test_numeric_identifier_becomes_text() {
        let q = norm(json!({"id": 42}));
        assert_eq!(q.u_id, "42");
    }

    #[test]
    fn test_has_identifier() {
        assert!(has_identifier(&RawRecord::new(json!({"questionId": "q"}))));
        assert!(!has_identifier(&RawRecord::new(json!({"uId": "", "stem": "x"}))));
        assert!(!has_identifier(&RawRecord::new(json!(["not", "an", "object"]))));
    }

    #[test]
    fn test_module_inferred_from_category() {
        assert_eq!(norm(json!({"id": "a", "category": "Math"})).module, "math");
        assert_eq!(norm(json!({"id": "a", "category": "SAT MATHEMATICS"})).module, "math");
        assert_eq!(norm(json!({"id": "a", "category": "Reading"})).module, "reading-writing");
        assert_eq!(norm(json!({"id": "a"})).module, "reading-writing");
    }

    #[test]
    fn test_explicit_module_wins() {
        let q = norm(json!({"id": "a", "module": "reading-writing", "category": "Math"}));
        assert_eq!(q.module, "reading-writing");
    }

    #[test]
    fn test_empty_values_fall_through() {
        let q = norm(json!({"id": "a", "difficulty": "", "diff": "H", "stem_html": null, "stem": "<p>s</p>"}));
        assert_eq!(q.difficulty, "H");
        assert_eq!(q.stem_html, "<p>s</p>");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let q = norm(json!({"id": "a"}));
        assert_eq!(q.primary_class_cd_desc, "");
        assert_eq!(q.skill_cd, "");
        assert_eq!(q.explanation_html, "");
        assert!(q.score_band_range_cd.is_none());
        assert!(q.choices.is_none());
        assert!(q.correct_choice_index.is_none());
    }

    #[test]
    fn test_choices_and_band_alternates() {
        let q = norm(json!({"id": "a", "options": ["A", "B"], "band": 3}));
        assert_eq!(q.choices, Some(vec![json!("A"), json!("B")]));
        assert_eq!(q.score_band_range_cd, Some(json!(3)));
    }

    #[test]
    fn test_correct_index_must_be_integer() {
        assert_eq!(norm(json!({"id": "a", "correct_choice_index": 0})).correct_choice_index, Some(0));
        assert_eq!(
            norm(json!({"id": "a", "correct_choice_index": "2", "answer_index": 1})).correct_choice_index,
            Some(1)
        );
        assert_eq!(norm(json!({"id": "a", "correct_choice_index": "2"})).correct_choice_index, None);
    }
}
