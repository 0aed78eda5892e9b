use anyhow::{Result, anyhow};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use vaas_node_lib::client::{BinaryResponse, Method, Query};
use vaas_node_lib::{ItemParameters, VaasNode, VaasTransport};

#[derive(Debug, Clone)]
pub enum StubResponse {
    Json(Value),
    Binary(Vec<u8>, Option<String>),
    Fail(String),
    /// Fails with `cause` wrapped in `context`, as the HTTP transport does.
    FailWithContext(String, String),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Query,
    pub binary: bool,
}

/// Transport that replays scripted responses in order and records every call.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<StubResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new(responses: Vec<StubResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn json(responses: Vec<Value>) -> Arc<Self> {
        Self::new(responses.into_iter().map(StubResponse::Json).collect())
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: RecordedCall) -> Result<StubResponse> {
        self.calls.lock().unwrap().push(call.clone());
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected call: {} {}", call.method, call.path))?;
        match response {
            StubResponse::Fail(message) => Err(anyhow!(message)),
            StubResponse::FailWithContext(context, cause) => Err(anyhow!(cause).context(context)),
            other => Ok(other),
        }
    }
}

impl VaasTransport for StubTransport {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &Query,
    ) -> Result<Value> {
        let call = RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
            query: query.clone(),
            binary: false,
        };
        match self.next(call)? {
            StubResponse::Json(value) => Ok(value),
            other => Err(anyhow!("scripted {other:?} for a JSON request")),
        }
    }

    fn request_binary(&self, method: Method, path: &str, query: &Query) -> Result<BinaryResponse> {
        let call = RecordedCall {
            method,
            path: path.to_string(),
            body: None,
            query: query.clone(),
            binary: true,
        };
        match self.next(call)? {
            StubResponse::Binary(data, content_type) => Ok(BinaryResponse { data, content_type }),
            other => Err(anyhow!("scripted {other:?} for a binary request")),
        }
    }
}

pub fn node_with(stub: &Arc<StubTransport>) -> VaasNode {
    vaas_node_lib::init_logging();
    VaasNode::new(stub.clone())
}

pub fn item(resource: &str, operation: &str) -> ItemParameters {
    ItemParameters::new()
        .with("resource", resource)
        .with("operation", operation)
}

pub fn ids(items: &[vaas_node_lib::OutputItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            item.json
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
