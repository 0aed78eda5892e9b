use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Binary payload attached to an output item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryData {
    #[serde(serialize_with = "encode_base64", deserialize_with = "decode_base64")]
    pub data: Vec<u8>,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl BinaryData {
    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.unwrap_or_else(|| "application/octet-stream".to_string()),
            file_name: None,
        }
    }
}

fn encode_base64<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(data))
}

fn decode_base64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    STANDARD
        .decode(encoded.as_bytes())
        .map_err(serde::de::Error::custom)
}

/// Unit of data handed back to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    pub json: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<BTreeMap<String, BinaryData>>,
}

impl OutputItem {
    pub fn json(json: Map<String, Value>) -> Self {
        Self { json, binary: None }
    }

    pub fn binary(property: String, data: BinaryData) -> Self {
        let mut binary = BTreeMap::new();
        binary.insert(property, data);
        Self {
            json: Map::new(),
            binary: Some(binary),
        }
    }

    pub fn error(message: String) -> Self {
        let mut json = Map::new();
        json.insert("error".to_string(), Value::String(message));
        Self::json(json)
    }
}

/// What a single operation produced for one input item.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Data(Value),
    Binary(OutputItem),
}

impl OperationResult {
    /// Arrays fan out to one item per element, objects map to one item and
    /// null contributes nothing.
    pub fn into_items(self) -> Vec<OutputItem> {
        match self {
            OperationResult::Binary(item) => vec![item],
            OperationResult::Data(Value::Array(values)) => {
                values.into_iter().filter_map(value_to_item).collect()
            }
            OperationResult::Data(value) => value_to_item(value).into_iter().collect(),
        }
    }
}

fn value_to_item(value: Value) -> Option<OutputItem> {
    match value {
        Value::Null => None,
        Value::Object(map) => Some(OutputItem::json(map)),
        other => {
            let mut json = Map::new();
            json.insert("value".to_string(), other);
            Some(OutputItem::json(json))
        }
    }
}
