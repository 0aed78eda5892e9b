use serde_json::Value;

pub mod certificate;
pub mod certificate_request;
pub mod load_options;

pub use load_options::{
    get_application_server_types, get_applications, get_certificate_issuing_templates,
    load_options,
};

pub(crate) const DEFAULT_LIMIT: u64 = 50;

/// Moves `key` out of a response; a missing key yields null.
pub(crate) fn take_field(mut response: Value, key: &str) -> Value {
    response
        .get_mut(key)
        .map(Value::take)
        .unwrap_or(Value::Null)
}

/// Keeps the first `limit` entries of a list; anything else counts as empty.
pub(crate) fn truncate(list: Value, limit: u64) -> Vec<Value> {
    match list {
        Value::Array(mut items) => {
            items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
            items
        }
        _ => Vec::new(),
    }
}
