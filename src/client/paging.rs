use std::collections::HashSet;

use anyhow::Result;
use log::{debug, warn};
use serde_json::Value;

use super::{Method, Query, VaasTransport};

const NEXT_CURSOR: &str = "nextCursor";
const NEXT_OFFSET: &str = "nextOffset";

#[derive(Debug, Clone, PartialEq)]
enum Continuation {
    Cursor(String),
    Offset(Value),
}

impl Continuation {
    fn from_page(page: &Value) -> Option<Self> {
        if let Some(cursor) = page.get(NEXT_CURSOR).and_then(Value::as_str) {
            if !cursor.is_empty() {
                return Some(Continuation::Cursor(cursor.to_string()));
            }
        }
        page.get(NEXT_OFFSET)
            .filter(|offset| offset.is_number())
            .map(|offset| Continuation::Offset(offset.clone()))
    }

    fn key(&self) -> String {
        match self {
            Continuation::Cursor(cursor) => format!("cursor:{cursor}"),
            Continuation::Offset(offset) => format!("offset:{offset}"),
        }
    }

    fn apply(&self, query: &mut Query) {
        match self {
            Continuation::Cursor(cursor) => {
                query.insert("cursor".to_string(), Value::String(cursor.clone()));
            }
            Continuation::Offset(offset) => {
                query.insert("offset".to_string(), offset.clone());
            }
        }
    }
}

/// Fetches every page of a list endpoint and concatenates the `resource_key`
/// arrays in server order.
///
/// Stops on an empty page or when the response carries no continuation
/// (`nextCursor` / `nextOffset`). A continuation that was already sent once
/// ends the walk as well.
pub fn request_all_items(
    transport: &dyn VaasTransport,
    resource_key: &str,
    method: Method,
    path: &str,
    body: Option<&Value>,
    query: &Query,
) -> Result<Vec<Value>> {
    let mut query = query.clone();
    let mut items = Vec::new();
    let mut sent: HashSet<String> = HashSet::new();
    let mut page_number = 0;

    loop {
        page_number += 1;
        let mut page = transport.request(method, path, body, &query)?;
        let entries = match page.get_mut(resource_key).map(Value::take) {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        };
        debug!(
            "[vaas-paging] {path} page {page_number} returned {} {resource_key}",
            entries.len()
        );
        if entries.is_empty() {
            break;
        }
        items.extend(entries);

        let Some(next) = Continuation::from_page(&page) else {
            break;
        };
        if !sent.insert(next.key()) {
            warn!("[vaas-paging] {path} returned an already visited continuation; stopping");
            break;
        }
        next.apply(&mut query);
    }

    Ok(items)
}
