use serde::{Deserialize, Serialize};

/// Body of `POST /outagedetection/v1/certificaterequests` for a new certificate.
///
/// Carries either a caller-supplied CSR (`certificate_signing_request`) or the
/// attributes VaaS needs to generate one (`csr_attributes`), never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestSpec {
    pub application_id: String,
    pub certificate_issuing_template_id: String,
    #[serde(rename = "isVaaSGenerated", skip_serializing_if = "Option::is_none")]
    pub is_vaas_generated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_server_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr_attributes: Option<CsrAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_signing_request: Option<String>,
}

/// Subject and key details for a server-generated CSR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrAttributes {
    pub common_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_units: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type_parameters: Option<KeyTypeParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_alternative_names_by_type: Option<SubjectAltNamesByType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTypeParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_curve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_length: Option<u64>,
}

impl KeyTypeParameters {
    pub fn is_empty(&self) -> bool {
        self.key_type.is_none() && self.key_curve.is_none() && self.key_length.is_none()
    }
}

/// SAN values grouped by kind. A kind is only present when it has values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAltNamesByType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc822_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniform_resource_identifiers: Option<Vec<String>>,
}

impl SubjectAltNamesByType {
    pub fn is_empty(&self) -> bool {
        self.dns_names.is_none()
            && self.ip_addresses.is_none()
            && self.rfc822_names.is_none()
            && self.uniform_resource_identifiers.is_none()
    }

    pub fn push(&mut self, kind: SanKind, value: String) {
        let slot = match kind {
            SanKind::DnsNames => &mut self.dns_names,
            SanKind::IpAddresses => &mut self.ip_addresses,
            SanKind::Rfc822Names => &mut self.rfc822_names,
            SanKind::UniformResourceIdentifiers => &mut self.uniform_resource_identifiers,
        };
        slot.get_or_insert_with(Vec::new).push(value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SanKind {
    DnsNames,
    IpAddresses,
    Rfc822Names,
    UniformResourceIdentifiers,
}

impl SanKind {
    pub const ALL: [SanKind; 4] = [
        SanKind::DnsNames,
        SanKind::IpAddresses,
        SanKind::Rfc822Names,
        SanKind::UniformResourceIdentifiers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SanKind::DnsNames => "dnsNames",
            SanKind::IpAddresses => "ipAddresses",
            SanKind::Rfc822Names => "rfc822Names",
            SanKind::UniformResourceIdentifiers => "uniformResourceIdentifiers",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        SanKind::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// One row of the SAN list entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanEntry {
    pub type_name: String,
    #[serde(default)]
    pub value: String,
}

/// Renewal is submitted as a new certificate request that points at the
/// certificate being replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalRequest {
    pub certificate_signing_request: String,
    pub certificate_issuing_template_id: String,
    pub application_id: String,
    pub existing_certificate_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDeletionRequest {
    pub certificate_ids: Vec<String>,
}
