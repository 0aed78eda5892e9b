use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

use super::{BinaryResponse, Method, Query, VaasCredentials, VaasTransport};

const PROVIDER: &str = "Venafi";
const API_KEY_HEADER: &str = "tppl-api-key";

pub struct HttpClient;

impl HttpClient {
    pub fn shared() -> &'static Client {
        static CLIENT: OnceLock<Client> = OnceLock::new();
        CLIENT.get_or_init(|| {
            let timeout = resolve_timeout();
            Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|err| {
                    warn!("[vaas-http] failed to build shared client: {err}");
                    Client::new()
                })
        })
    }
}

fn resolve_timeout() -> Duration {
    const DEFAULT_TIMEOUT_SECS: u64 = 15;
    let Ok(raw) = std::env::var("VAAS_HTTP_TIMEOUT_SECS") else {
        return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
    };
    match raw.trim().parse::<u64>() {
        Ok(timeout) if timeout > 0 => Duration::from_secs(timeout),
        _ => {
            warn!("[vaas-http] invalid timeout value {raw:?}; using default");
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        }
    }
}

fn resolve_base_url(credentials: &VaasCredentials) -> String {
    std::env::var("VAAS_BASE_URL")
        .ok()
        .map(|raw| raw.trim().trim_end_matches('/').to_string())
        .filter(|raw| !raw.is_empty())
        .unwrap_or_else(|| credentials.region.base_url().to_string())
}

pub fn status_error(provider: &str, status: StatusCode, body: Option<String>) -> anyhow::Error {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return anyhow!("{provider} authentication failed");
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return anyhow!("{provider} rate limit exceeded");
    }
    if let Some(body) = body.filter(|body| !body.trim().is_empty()) {
        return anyhow!("{provider} API error: {body}");
    }
    anyhow!("{provider} API error: {status}")
}

/// Renders query values the way they appear in a URL: strings unquoted,
/// arrays repeated per element, nulls dropped.
pub(crate) fn query_pairs(query: &Query) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query {
        match value {
            Value::Null => {}
            Value::String(text) => pairs.push((key.clone(), text.clone())),
            Value::Array(values) => {
                for value in values {
                    if let Some(text) = scalar_to_string(value) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_to_string(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// reqwest-backed transport authenticating with the `tppl-api-key` header.
pub struct VaasHttpClient {
    credentials: VaasCredentials,
    base_url: String,
}

impl VaasHttpClient {
    pub fn new(credentials: VaasCredentials) -> Self {
        let base_url = resolve_base_url(&credentials);
        Self {
            credentials,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str, query: &Query) -> RequestBuilder {
        let client = HttpClient::shared();
        let url = self.url(path);
        let builder = match method {
            Method::Get => client.get(&url),
            Method::Post => client.post(&url),
        };
        let pairs = query_pairs(query);
        let builder = if pairs.is_empty() {
            builder
        } else {
            builder.query(&pairs)
        };
        builder.header(API_KEY_HEADER, &self.credentials.api_key)
    }
}

impl VaasTransport for VaasHttpClient {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &Query,
    ) -> Result<Value> {
        debug!("[vaas-http] {method} {path}");
        let mut builder = self
            .builder(method, path, query)
            .header("Accept", "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .with_context(|| format!("Failed to call Venafi API: {method} {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().ok();
            debug!("[vaas-http] {method} {path} failed with status {status}");
            return Err(status_error(PROVIDER, status, body));
        }

        let text = response
            .text()
            .context("Failed to read Venafi API response")?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).context("Failed to parse Venafi API response")
    }

    fn request_binary(
        &self,
        method: Method,
        path: &str,
        query: &Query,
    ) -> Result<BinaryResponse> {
        debug!("[vaas-http] {method} {path} (binary)");
        let response = self
            .builder(method, path, query)
            .send()
            .with_context(|| format!("Failed to call Venafi API: {method} {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().ok();
            return Err(status_error(PROVIDER, status, body));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let data = response
            .bytes()
            .context("Failed to read Venafi API response body")?
            .to_vec();
        debug!("[vaas-http] {method} {path} returned {} byte(s)", data.len());

        Ok(BinaryResponse { data, content_type })
    }
}
