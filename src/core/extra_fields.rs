use serde_json::{Map, Value};

use super::params::ParameterError;

pub const REQUEST_OPTIONS: &[&str] = &[
    "validityPeriod",
    "certificateOwnerUserId",
    "applicationServerTypeId",
];
pub const DOWNLOAD_OPTIONS: &[&str] = &["chainOrder", "format"];
pub const CERTIFICATE_FILTERS: &[&str] = &[
    "applicationId",
    "certificateStatus",
    "certificateName",
    "subjectCN",
    "issuerCertificateIds",
];
pub const CSR_ADDITIONAL_FIELDS: &[&str] = &[
    "organization",
    "organizationalUnits",
    "locality",
    "state",
    "country",
    "keyType",
    "keyCurve",
    "keyLength",
    "subjectAltNamesUi",
];

/// Caller-supplied fields that are merged on top of a computed body or query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraFields(Map<String, Value>);

impl ExtraFields {
    /// Checks every key against `allowed`; nulls are dropped.
    pub fn validate(
        parameter: &str,
        fields: Map<String, Value>,
        allowed: &[&str],
    ) -> Result<Self, ParameterError> {
        let mut accepted = Map::new();
        for (key, value) in fields {
            if !allowed.contains(&key.as_str()) {
                return Err(ParameterError::UnknownField {
                    parameter: parameter.to_string(),
                    field: key,
                });
            }
            if !value.is_null() {
                accepted.insert(key, value);
            }
        }
        Ok(Self(accepted))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Later keys win on collision.
    pub fn merge_into(self, target: &mut Map<String, Value>) {
        for (key, value) in self.0 {
            target.insert(key, value);
        }
    }
}
