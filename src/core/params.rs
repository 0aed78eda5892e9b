use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while reading node parameters, before any request is sent.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("missing required parameter: {0}")]
    Missing(String),
    #[error("parameter '{name}' must be {expected}")]
    InvalidType { name: String, expected: &'static str },
    #[error("unknown field '{field}' in '{parameter}'")]
    UnknownField { parameter: String, field: String },
    #[error("unsupported operation '{operation}' for resource '{resource}'")]
    UnsupportedOperation { resource: String, operation: String },
}

/// Parameter values resolved by the host for one input item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemParameters(Map<String, Value>);

impl ItemParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.0.insert(name.to_string(), value.into());
    }

    fn value(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    pub fn required_str(&self, name: &str) -> Result<String, ParameterError> {
        match self.value(name) {
            Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
            Some(Value::String(_)) | None => Err(ParameterError::Missing(name.to_string())),
            Some(_) => Err(ParameterError::InvalidType {
                name: name.to_string(),
                expected: "a string",
            }),
        }
    }

    pub fn optional_str(&self, name: &str) -> Result<Option<String>, ParameterError> {
        match self.value(name) {
            None => Ok(None),
            Some(Value::String(text)) if text.is_empty() => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(ParameterError::InvalidType {
                name: name.to_string(),
                expected: "a string",
            }),
        }
    }

    pub fn str_or(&self, name: &str, default: &str) -> Result<String, ParameterError> {
        Ok(self
            .optional_str(name)?
            .unwrap_or_else(|| default.to_string()))
    }

    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool, ParameterError> {
        match self.value(name) {
            None => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(_) => Err(ParameterError::InvalidType {
                name: name.to_string(),
                expected: "a boolean",
            }),
        }
    }

    pub fn u64_or(&self, name: &str, default: u64) -> Result<u64, ParameterError> {
        match self.value(name) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .or_else(|| {
                    // Hosts hand whole numbers over as floats.
                    value
                        .as_f64()
                        .filter(|number| *number >= 0.0 && number.fract() == 0.0)
                        .map(|number| number as u64)
                })
                .ok_or_else(|| ParameterError::InvalidType {
                    name: name.to_string(),
                    expected: "a non-negative integer",
                }),
        }
    }

    pub fn object(&self, name: &str) -> Result<Map<String, Value>, ParameterError> {
        match self.value(name) {
            None => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(_) => Err(ParameterError::InvalidType {
                name: name.to_string(),
                expected: "an object",
            }),
        }
    }
}

impl From<Map<String, Value>> for ItemParameters {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
