//! Traversal masker
//!
//! Walks a JSON value and rebuilds it with every value under a masked key
//! passed through [`obscure`]. Strings under other keys that parse as JSON are
//! masked the same way and handed back as compact JSON text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::fields::FieldSet;
use crate::obscure::obscure;

/// How many values were obscured under one field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskInfo {
    pub field: String,
    pub count: usize,
}

/// Mask `value` using the baseline fields plus `extra_fields`
///
/// The input is borrowed and left untouched; the result is a fresh value.
pub fn mask<I, S>(value: &Value, extra_fields: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Masker::new(extra_fields).mask(value)
}

/// Reusable masker holding a prebuilt field set
#[derive(Debug, Clone, Default)]
pub struct Masker {
    fields: FieldSet,
}

type Tally = BTreeMap<String, usize>;

impl Masker {
    pub fn new<I, S>(extra_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_fields(FieldSet::new(extra_fields))
    }

    pub fn with_fields(fields: FieldSet) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Return a masked deep copy of `value`
    pub fn mask(&self, value: &Value) -> Value {
        self.walk(value, &mut Tally::new())
    }

    /// Mask `value` and report how many values were obscured per field
    ///
    /// Entries are sorted by field name. Fields that never occurred are left out.
    pub fn mask_with_report(&self, value: &Value) -> (Value, Vec<MaskInfo>) {
        let mut tally = Tally::new();
        let masked = self.walk(value, &mut tally);

        let report = tally
            .into_iter()
            .map(|(field, count)| MaskInfo { field, count })
            .collect::<Vec<_>>();

        for info in &report {
            debug!("Masked {} value(s) under {:?}", info.count, info.field);
        }

        (masked, report)
    }

    /// Parse `input` as a JSON document, mask it and serialize it compactly
    pub fn mask_str(&self, input: &str) -> Result<String> {
        let value: Value = serde_json::from_str(input).map_err(Error::InvalidJson)?;
        let masked = self.mask(&value);
        serde_json::to_string(&masked).map_err(Error::Serialization)
    }

    fn walk(&self, value: &Value, tally: &mut Tally) -> Value {
        match value {
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.walk(item, tally)).collect())
            }
            Value::Object(map) => Value::Object(self.walk_object(map, tally)),
            scalar => scalar.clone(),
        }
    }

    fn walk_object(&self, map: &Map<String, Value>, tally: &mut Tally) -> Map<String, Value> {
        let mut out = Map::with_capacity(map.len());

        for (key, value) in map {
            let masked = if self.fields.contains(key) {
                *tally.entry(key.clone()).or_default() += 1;
                obscure(value)
            } else {
                match value {
                    Value::Array(_) | Value::Object(_) => self.walk(value, tally),
                    Value::String(text) => self
                        .walk_embedded(text, tally)
                        .map(Value::String)
                        .unwrap_or_else(|| value.clone()),
                    scalar => scalar.clone(),
                }
            };
            out.insert(key.clone(), masked);
        }

        out
    }

    /// Mask a string that holds a JSON document
    ///
    /// Returns `None` when the text does not parse, in which case the caller
    /// keeps the original string.
    fn walk_embedded(&self, text: &str, tally: &mut Tally) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        let parsed: Value = serde_json::from_str(text).ok()?;
        trace!("Found embedded JSON document ({} bytes)", text.len());

        let masked = self.walk(&parsed, tally);
        serde_json::to_string(&masked).ok()
    }
}
