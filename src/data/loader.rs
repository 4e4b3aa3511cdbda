// ============================================================
// Layer 4 — Input Loader
// ============================================================
// Reads the question dump and turns it into an ordered list
// of RawRecords, whatever shape the file arrived in.
//
// Accepted shapes, tried in this order:
//
//   Braced     {"q1": {...}, "q2": {...}}   keyed object
//              [{...}, {...}]               clean array
//   Braceless  "q1": {...}, "q2": {...},    keyed entries missing
//                                           their enclosing braces
//   NdJson     {...}                        one value per line,
//              {...},                       trailing commas allowed
//
// Each strategy either returns the records or a ParseFailure.
// The loader keeps going until one succeeds; only the last
// failure is reported if none do.
//
// Keyed entries get their key injected as `uId` when the
// entry is an object without one.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::record::{InputShape, LoadedInput, RawRecord};
use crate::domain::traits::RecordSource;
use crate::error::PrepareError;

/// Why a single detection strategy rejected the input
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("input is not enclosed in braces or brackets")]
    NotEnclosed,
    #[error("expected a JSON object or array, found {0}")]
    NotACollection(&'static str),
    #[error("keyed entry '{0}' is not an object")]
    NotKeyed(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {source}")]
    Line {
        line:   usize,
        source: serde_json::Error,
    },
}

// ─── Strategies ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Braced,
    Braceless,
    NdJson,
}

impl Strategy {
    const ORDER: [Strategy; 3] = [Strategy::Braced, Strategy::Braceless, Strategy::NdJson];

    fn attempt(self, text: &str) -> Result<LoadedInput, ParseFailure> {
        match self {
            Strategy::Braced    => parse_braced(text),
            Strategy::Braceless => parse_braceless(text),
            Strategy::NdJson    => parse_ndjson(text),
        }
    }
}

/// Matches a comma left dangling before a closing brace
fn trailing_comma_re() -> &'static Regex {
    static TRAILING_COMMA_RE: OnceLock<Regex> = OnceLock::new();
    TRAILING_COMMA_RE.get_or_init(|| Regex::new(r",\s*\}").expect("valid trailing comma regex"))
}

fn parse_braced(text: &str) -> Result<LoadedInput, ParseFailure> {
    let enclosed = (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'));
    if !enclosed {
        return Err(ParseFailure::NotEnclosed);
    }

    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => keyed_records(map, InputShape::KeyedObject),
        Value::Array(items) => Ok(LoadedInput {
            shape:   InputShape::Array,
            records: items.into_iter().map(RawRecord::new).collect(),
        }),
        other => Err(ParseFailure::NotACollection(json_kind(&other))),
    }
}

fn parse_braceless(text: &str) -> Result<LoadedInput, ParseFailure> {
    let wrapped = format!("{{{}}}", text.trim().trim_matches(','));
    let repaired = trailing_comma_re().replace_all(&wrapped, "}");

    match serde_json::from_str::<Value>(&repaired)? {
        Value::Object(map) => keyed_records(map, InputShape::BracelessKeyed),
        other => Err(ParseFailure::NotACollection(json_kind(&other))),
    }
}

/// One record per entry. Every entry must be an object, so a
/// single NDJSON record such as `{"uId": "a", "stem": "x"}` is
/// rejected here and left for the NDJSON strategy.
fn keyed_records(map: Map<String, Value>, shape: InputShape) -> Result<LoadedInput, ParseFailure> {
    if let Some((key, _)) = map.iter().find(|(_, v)| !v.is_object()) {
        return Err(ParseFailure::NotKeyed(key.clone()));
    }

    Ok(LoadedInput {
        shape,
        records: map.into_iter().map(|(k, v)| RawRecord::keyed(&k, v)).collect(),
    })
}

/// All-or-nothing: one unparseable line fails the whole file.
fn parse_ndjson(text: &str) -> Result<LoadedInput, ParseFailure> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim().trim_end_matches(',');
        if line.is_empty() {
            continue;
        }
        let value = serde_json::from_str::<Value>(line)
            .map_err(|source| ParseFailure::Line { line: idx + 1, source })?;
        records.push(RawRecord::new(value));
    }

    Ok(LoadedInput { shape: InputShape::NdJson, records })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}

/// Detect the input shape and parse it.
///
/// Tries each strategy in order and returns the first success.
/// When all of them fail the last failure becomes
/// `PrepareError::UnparseableInput`.
pub fn parse_input(text: &str) -> Result<LoadedInput, PrepareError> {
    let text = text.trim_start_matches('\u{FEFF}').trim();

    let mut failure = ParseFailure::NotEnclosed;
    for strategy in Strategy::ORDER {
        match strategy.attempt(text) {
            Ok(loaded) => {
                tracing::debug!("{:?} strategy accepted the input as {}", strategy, loaded.shape);
                return Ok(loaded);
            }
            Err(e) => {
                tracing::debug!("{:?} strategy rejected the input: {}", strategy, e);
                failure = e;
            }
        }
    }

    Err(PrepareError::UnparseableInput(failure))
}

// ─── JsonLoader ───────────────────────────────────────────────────────────────
/// Loads raw records from one JSON / NDJSON file on disk.
/// Implements the RecordSource trait from Layer 3.
pub struct JsonLoader {
    path: PathBuf,
}

impl JsonLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonLoader {
    /// Read the whole file and parse it, keeping the detected shape
    fn load_all(&self) -> Result<LoadedInput, PrepareError> {
        let text = fs::read_to_string(&self.path).map_err(|source| PrepareError::Read {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Read {} bytes from '{}'", text.len(), self.path.display());

        let loaded = parse_input(&text)?;
        tracing::info!(
            "Loaded {} raw records from '{}' ({})",
            loaded.records.len(),
            self.path.display(),
            loaded.shape
        );
        Ok(loaded)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ids(loaded: &LoadedInput) -> Vec<Value> {
        loaded
            .records
            .iter()
            .map(|r| r.get("uId").cloned().unwrap_or(Value::Null))
            .collect()
    }

    #[test]
    fn test_keyed_object() {
        let loaded = parse_input(r#"{"b": {"stem": "x"}, "a": {"uId": "a", "stem": "y"}}"#).unwrap();
        assert_eq!(loaded.shape, InputShape::KeyedObject);
        // Input order is kept, not sorted
        assert_eq!(ids(&loaded), vec![json!("b"), json!("a")]);
    }

    #[test]
    fn test_clean_array() {
        let loaded = parse_input(r#"[{"uId": "a"}, {"uId": "b"}]"#).unwrap();
        assert_eq!(loaded.shape, InputShape::Array);
        assert_eq!(ids(&loaded), vec![json!("a"), json!("b")]);
    }

    #[test]
    fn test_braceless_keyed_entries_with_trailing_comma() {
        let text = "\"a\": {\"stem\": \"x\"},\n\"b\": {\"stem\": \"y\"},\n";
        let loaded = parse_input(text).unwrap();
        assert_eq!(loaded.shape, InputShape::BracelessKeyed);
        assert_eq!(ids(&loaded), vec![json!("a"), json!("b")]);
    }

    #[test]
    fn test_ndjson_with_trailing_commas_and_blank_lines() {
        let text = "{\"uId\": \"a\"},\n\n{\"uId\": \"b\"}\n";
        let loaded = parse_input(text).unwrap();
        assert_eq!(loaded.shape, InputShape::NdJson);
        assert_eq!(ids(&loaded), vec![json!("a"), json!("b")]);
    }

    #[test]
    fn test_all_shapes_yield_equivalent_records() {
        let keyed     = r#"{"a": {"uId": "a", "diff": "E"}, "b": {"uId": "b", "diff": "H"}}"#;
        let array     = r#"[{"uId": "a", "diff": "E"}, {"uId": "b", "diff": "H"}]"#;
        let ndjson    = "{\"uId\": \"a\", \"diff\": \"E\"}\n{\"uId\": \"b\", \"diff\": \"H\"}";
        let braceless = r#""a": {"uId": "a", "diff": "E"}, "b": {"uId": "b", "diff": "H"},"#;

        let expected = parse_input(keyed).unwrap().records;
        assert_eq!(parse_input(array).unwrap().records, expected);
        assert_eq!(parse_input(ndjson).unwrap().records, expected);
        assert_eq!(parse_input(braceless).unwrap().records, expected);
    }

    #[test]
    fn test_single_ndjson_record_is_not_a_keyed_object() {
        let ndjson = parse_input("{\"uId\": \"a\", \"stem\": \"x\"}\n").unwrap();
        let array  = parse_input(r#"[{"uId": "a", "stem": "x"}]"#).unwrap();

        assert_eq!(ndjson.shape, InputShape::NdJson);
        assert_eq!(ndjson.records, array.records);
        assert_eq!(ids(&ndjson), vec![json!("a")]);
    }

    #[test]
    fn test_keyed_object_with_scalar_entry_is_rejected() {
        // Not keyed, and two lines that are not JSON on their own
        let text = "{\"a\": {\"uId\": \"a\"},\n \"b\": 3}";
        let err = parse_input(text).unwrap_err();
        assert!(matches!(err, PrepareError::UnparseableInput(ParseFailure::Line { line: 1, .. })));
    }

    #[test]
    fn test_bad_ndjson_line_fails_whole_input() {
        let text = "{\"uId\": \"a\"}\nnot json at all\n{\"uId\": \"b\"}";
        let err = parse_input(text).unwrap_err();
        match err {
            PrepareError::UnparseableInput(ParseFailure::Line { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparseable_message_is_descriptive() {
        let err = parse_input("{\"a\": oops").unwrap_err();
        assert!(err.to_string().starts_with("could not parse input JSON"));
    }

    #[test]
    fn test_empty_input_gives_no_records() {
        let loaded = parse_input("   \n").unwrap();
        assert!(loaded.records.is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let loaded = parse_input("\u{FEFF}[{\"uId\": \"a\"}]").unwrap();
        assert_eq!(loaded.shape, InputShape::Array);
        assert_eq!(loaded.records.len(), 1);
    }

    #[test]
    fn test_loader_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"q1": {{"category": "Math"}}}}"#).unwrap();

        let loader = JsonLoader::new(file.path());
        let loaded = loader.load_all().unwrap();
        assert_eq!(loaded.shape, InputShape::KeyedObject);
        let records = loaded.records;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("uId"), Some(&json!("q1")));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonLoader::new(dir.path().join("nope.json"));
        assert!(matches!(loader.load_all(), Err(PrepareError::Read { .. })));
    }
}
