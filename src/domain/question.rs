// ============================================================
// Layer 3 — NormalizedQuestion Domain Type
// ============================================================
// The single output schema every input record is coerced to.
// Field names and order match what the client app reads from
// the chunk files, hence the serde renames on the two ids.

use serde::Serialize;
use serde_json::Value;

/// Module assigned to records whose category mentions maths.
pub const MODULE_MATH: &str = "math";

/// Module assigned to every other record without an explicit module.
pub const MODULE_READING_WRITING: &str = "reading-writing";

/// One exam question in the normalised schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedQuestion {
    /// Unique identifier, never empty once a record is kept
    #[serde(rename = "uId")]
    pub u_id: String,

    /// Secondary identifier, often the same as `u_id`
    #[serde(rename = "questionId")]
    pub question_id: String,

    /// "math", "reading-writing" or whatever the source set explicitly
    pub module: String,

    /// Domain description
    pub primary_class_cd_desc: String,

    pub skill_cd: String,

    pub skill_desc: String,

    /// Difficulty label such as "E", "M" or "H"
    pub difficulty: String,

    /// Score-band code, passed through as the source's scalar
    pub score_band_range_cd: Option<Value>,

    /// Question stem, HTML
    pub stem_html: String,

    /// Answer choices, null when the source has none
    pub choices: Option<Vec<Value>>,

    /// Zero-based index into `choices`
    pub correct_choice_index: Option<i64>,

    /// Explanation, HTML
    pub explanation_html: String,
}

impl NormalizedQuestion {
    /// Value of the domain facet (the domain description).
    pub fn domain(&self) -> &str {
        &self.primary_class_cd_desc
    }

    /// Value of the skill facet (the skill description).
    pub fn skill(&self) -> &str {
        &self.skill_desc
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialises_client_field_names() {
        let q = NormalizedQuestion {
            u_id:                  "a1".into(),
            question_id:           "q-a1".into(),
            module:                MODULE_MATH.into(),
            primary_class_cd_desc: "Algebra".into(),
            skill_cd:              "H.A.".into(),
            skill_desc:            "Linear equations".into(),
            difficulty:            "M".into(),
            score_band_range_cd:   Some(json!(5)),
            stem_html:             "<p>Solve</p>".into(),
            choices:               Some(vec![json!("1"), json!("2")]),
            correct_choice_index:  Some(1),
            explanation_html:      String::new(),
        };

        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["uId"], json!("a1"));
        assert_eq!(v["questionId"], json!("q-a1"));
        assert_eq!(v["correct_choice_index"], json!(1));
        assert!(v.get("u_id").is_none());
    }

    #[test]
    fn test_field_order_is_stable() {
        let q = NormalizedQuestion {
            u_id:                  "a".into(),
            question_id:           "a".into(),
            module:                MODULE_READING_WRITING.into(),
            primary_class_cd_desc: String::new(),
            skill_cd:              String::new(),
            skill_desc:            String::new(),
            difficulty:            String::new(),
            score_band_range_cd:   None,
            stem_html:             String::new(),
            choices:               None,
            correct_choice_index:  None,
            explanation_html:      String::new(),
        };

        let text = serde_json::to_string(&q).unwrap();
        assert!(text.starts_with(r#"{"uId":"a","questionId":"a","module":"reading-writing""#));
        assert!(text.ends_with(r#""correct_choice_index":null,"explanation_html":""}"#));
    }
}
