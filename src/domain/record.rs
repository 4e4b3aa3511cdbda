// ============================================================
// Layer 3 — RawRecord Domain Type
// ============================================================
// One entry from the input file, before normalisation.
// The shape is unknown up front, so the record wraps an
// untyped serde_json::Value. Field lookups on anything that
// is not a JSON object simply find nothing.

use std::fmt;

use serde_json::Value;

/// An untyped input record as produced by the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Build a record from one entry of a keyed object.
    ///
    /// The key is injected as `uId` when the value is an object
    /// without one. An explicit `uId` (even null) is left alone.
    pub fn keyed(key: &str, value: Value) -> Self {
        let mut value = value;
        if let Value::Object(map) = &mut value {
            map.entry("uId")
                .or_insert_with(|| Value::String(key.to_string()));
        }
        Self(value)
    }

    /// Look up a top-level field. Non-object records have no fields.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    /// Non-empty values of the candidate fields, in candidate order.
    ///
    /// Null, `false`, `0`, `""`, `[]` and `{}` all count as empty,
    /// so `["uId", "id"]` yields only `id` when `uId` is `""`.
    pub fn present<'a>(&'a self, keys: &'a [&'a str]) -> impl Iterator<Item = &'a Value> + 'a {
        keys.iter()
            .filter_map(move |key| self.get(key))
            .filter(|value| !is_empty_value(value))
    }
}

/// Which input shape the records were read as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    KeyedObject,
    Array,
    BracelessKeyed,
    NdJson,
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputShape::KeyedObject    => "keyed object",
            InputShape::Array          => "JSON array",
            InputShape::BracelessKeyed => "keyed entries without braces",
            InputShape::NdJson         => "newline-delimited JSON",
        };
        f.write_str(name)
    }
}

/// Records plus the shape they were read as
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedInput {
    pub shape:   InputShape,
    pub records: Vec<RawRecord>,
}

/// True for values that should not satisfy a fallback chain.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null         => true,
        Value::Bool(b)      => !b,
        Value::Number(n)    => n.as_f64() == Some(0.0),
        Value::String(s)    => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map)  => map.is_empty(),
    }
}
