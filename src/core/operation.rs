use serde::{Deserialize, Serialize};

use super::params::ParameterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Certificate,
    CertificateRequest,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Certificate => "certificate",
            Resource::CertificateRequest => "certificateRequest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "certificate" => Some(Resource::Certificate),
            "certificateRequest" => Some(Resource::CertificateRequest),
            _ => None,
        }
    }
}

/// Every (resource, operation) pair the node supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeOperation {
    CertificateRequestCreate,
    CertificateRequestGet,
    CertificateRequestGetAll,
    CertificateDelete,
    CertificateDownload,
    CertificateGet,
    CertificateGetAll,
    CertificateRenew,
}

impl NodeOperation {
    pub const ALL: [NodeOperation; 8] = [
        NodeOperation::CertificateRequestCreate,
        NodeOperation::CertificateRequestGet,
        NodeOperation::CertificateRequestGetAll,
        NodeOperation::CertificateDelete,
        NodeOperation::CertificateDownload,
        NodeOperation::CertificateGet,
        NodeOperation::CertificateGetAll,
        NodeOperation::CertificateRenew,
    ];

    pub fn resolve(resource: &str, operation: &str) -> Result<Self, ParameterError> {
        let unsupported = || ParameterError::UnsupportedOperation {
            resource: resource.to_string(),
            operation: operation.to_string(),
        };
        let parsed = Resource::parse(resource).ok_or_else(unsupported)?;
        NodeOperation::ALL
            .into_iter()
            .find(|op| op.resource() == parsed && op.operation() == operation)
            .ok_or_else(unsupported)
    }

    pub fn resource(&self) -> Resource {
        match self {
            NodeOperation::CertificateRequestCreate
            | NodeOperation::CertificateRequestGet
            | NodeOperation::CertificateRequestGetAll => Resource::CertificateRequest,
            NodeOperation::CertificateDelete
            | NodeOperation::CertificateDownload
            | NodeOperation::CertificateGet
            | NodeOperation::CertificateGetAll
            | NodeOperation::CertificateRenew => Resource::Certificate,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            NodeOperation::CertificateRequestCreate => "create",
            NodeOperation::CertificateRequestGet | NodeOperation::CertificateGet => "get",
            NodeOperation::CertificateRequestGetAll | NodeOperation::CertificateGetAll => {
                "getAll"
            }
            NodeOperation::CertificateDelete => "delete",
            NodeOperation::CertificateDownload => "download",
            NodeOperation::CertificateRenew => "renew",
        }
    }
}
