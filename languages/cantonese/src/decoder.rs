use std::collections::HashMap;

use dictforge_config::cantodict::CantoDictConfig;
use dictforge_core::{ConvertError, RawRow, Result};
use serde_json::{Number, Value};

/// Column value after decoding
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Structured(Value),
}

impl FieldValue {
    /// Empty text and JSON `null` count as absent
    pub fn is_absent(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Structured(value) => value.is_null(),
        }
    }
}

/// A source row with its structured columns parsed.
#[derive(Debug, Clone)]
pub struct DecodedRow {
    /// 1-based data row number, for error reporting
    pub row: usize,
    pub fields: HashMap<String, FieldValue>,
}

/// Parses the JSON-valued columns of raw rows.
pub struct FieldDecoder<'a> {
    config: &'a CantoDictConfig,
}

impl<'a> FieldDecoder<'a> {
    pub fn new(config: &'a CantoDictConfig) -> Self {
        Self { config }
    }

    pub fn decode(&self, row: usize, mut raw: RawRow) -> Result<DecodedRow> {
        let mut fields = HashMap::with_capacity(raw.len());

        // structured columns first, in configured order, so errors name a stable column
        for column in &self.config.structured_columns {
            let Some(text) = raw.remove(column) else {
                continue;
            };
            let value = if text.is_empty() {
                FieldValue::Text(text)
            } else {
                let parsed = serde_json::from_str(&text).map_err(|source| {
                    ConvertError::MalformedField {
                        row,
                        column: column.clone(),
                        source,
                    }
                })?;
                FieldValue::Structured(parsed)
            };
            fields.insert(column.clone(), value);
        }

        for (column, text) in raw {
            fields.insert(column, FieldValue::Text(text));
        }

        Ok(DecodedRow { row, fields })
    }
}

impl DecodedRow {
    fn present(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column).filter(|value| !value.is_absent())
    }

    fn shape_error(&self, column: &str, expected: &'static str) -> ConvertError {
        ConvertError::UnexpectedShape {
            row: self.row,
            column: column.to_string(),
            expected,
        }
    }

    /// Text of a column every row must carry
    pub fn required_text(&self, column: &str) -> Result<String> {
        match self.fields.get(column) {
            Some(FieldValue::Text(text)) => Ok(text.clone()),
            Some(FieldValue::Structured(Value::String(text))) => Ok(text.clone()),
            Some(FieldValue::Structured(Value::Null)) => Ok(String::new()),
            Some(FieldValue::Structured(_)) => Err(self.shape_error(column, "a string")),
            None => Err(ConvertError::MissingColumn {
                row: self.row,
                column: column.to_string(),
            }),
        }
    }

    pub fn optional_text(&self, column: &str) -> Result<Option<String>> {
        match self.present(column) {
            Some(FieldValue::Text(text)) => Ok(Some(text.clone())),
            Some(FieldValue::Structured(Value::String(text))) => Ok(Some(text.clone())),
            Some(FieldValue::Structured(_)) => Err(self.shape_error(column, "a string")),
            None => Ok(None),
        }
    }

    /// Identifier rendered the way it appears in `kind,id` keys
    pub fn identifier(&self, column: &str) -> Result<String> {
        match self.present(column) {
            Some(FieldValue::Text(text)) => Ok(text.clone()),
            Some(FieldValue::Structured(value)) => {
                scalar_key(value).ok_or_else(|| self.shape_error(column, "a number or string id"))
            }
            None => Ok(String::new()),
        }
    }

    pub fn string_list(&self, column: &str) -> Result<Vec<String>> {
        match self.present(column) {
            Some(FieldValue::Structured(Value::Array(items))) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text.clone()),
                    _ => Err(self.shape_error(column, "a list of strings")),
                })
                .collect(),
            Some(_) => Err(self.shape_error(column, "a list of strings")),
            None => Ok(Vec::new()),
        }
    }

    pub fn id_list(&self, column: &str) -> Result<Vec<String>> {
        match self.present(column) {
            Some(FieldValue::Structured(Value::Array(items))) => items
                .iter()
                .map(|item| {
                    scalar_key(item).ok_or_else(|| self.shape_error(column, "a list of ids"))
                })
                .collect(),
            Some(_) => Err(self.shape_error(column, "a list of ids")),
            None => Ok(Vec::new()),
        }
    }

    pub fn number(&self, column: &str) -> Result<Option<Number>> {
        match self.present(column) {
            Some(FieldValue::Structured(Value::Number(n))) => Ok(Some(n.clone())),
            Some(FieldValue::Text(text)) => serde_json::from_str::<Number>(text.trim())
                .map(Some)
                .map_err(|_| self.shape_error(column, "a number")),
            Some(FieldValue::Structured(_)) => Err(self.shape_error(column, "a number")),
            None => Ok(None),
        }
    }

    /// Decoded value kept as-is
    pub fn raw(&self, column: &str) -> Option<Value> {
        match self.present(column)? {
            FieldValue::Structured(value) => Some(value.clone()),
            FieldValue::Text(text) => Some(Value::String(text.clone())),
        }
    }
}

/// Integral floats print without a fraction (`2.0` keys as `2`)
fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
                Some(format!("{}", f as i128))
            }
            _ => Some(n.to_string()),
        },
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
