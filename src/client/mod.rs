use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use serde_json::{Map, Value};

mod credentials;
pub(crate) mod http;
mod paging;

pub use credentials::{CREDENTIAL_NAME, VaasCredentials, VaasRegion};
pub use http::VaasHttpClient;
pub use paging::request_all_items;

/// Query-string parameters, kept as JSON values until the transport renders them.
pub type Query = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw response body returned by the contents endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryResponse {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// One authenticated call against the VaaS REST API.
///
/// Paths are relative to the API base URL (`/outagedetection/v1/...`).
pub trait VaasTransport: Send + Sync {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &Query,
    ) -> Result<Value>;

    fn request_binary(&self, method: Method, path: &str, query: &Query)
    -> Result<BinaryResponse>;
}

impl<T: VaasTransport + ?Sized> VaasTransport for Arc<T> {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &Query,
    ) -> Result<Value> {
        (**self).request(method, path, body, query)
    }

    fn request_binary(
        &self,
        method: Method,
        path: &str,
        query: &Query,
    ) -> Result<BinaryResponse> {
        (**self).request_binary(method, path, query)
    }
}

pub(crate) mod paths {
    pub const CERTIFICATE_REQUESTS: &str = "/outagedetection/v1/certificaterequests";
    pub const CERTIFICATES: &str = "/outagedetection/v1/certificates";
    pub const CERTIFICATE_DELETION: &str = "/outagedetection/v1/certificates/deletion";
    pub const APPLICATIONS: &str = "/outagedetection/v1/applications";
    pub const APPLICATION_SERVER_TYPES: &str = "/outagedetection/v1/applicationservertypes";
    pub const CERTIFICATE_ISSUING_TEMPLATES: &str = "/v1/certificateissuingtemplates";

    pub fn certificate_request(id: &str) -> String {
        format!("{CERTIFICATE_REQUESTS}/{id}")
    }

    pub fn certificate(id: &str) -> String {
        format!("{CERTIFICATES}/{id}")
    }

    pub fn certificate_contents(id: &str) -> String {
        format!("{CERTIFICATES}/{id}/contents")
    }
}
