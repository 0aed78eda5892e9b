use serde::{Deserialize, Serialize};

/// Name under which the host stores the API credential for this node.
pub const CREDENTIAL_NAME: &str = "venafiAsAServiceApi";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaasRegion {
    #[default]
    Us,
    Eu,
}

impl VaasRegion {
    pub fn base_url(&self) -> &'static str {
        match self {
            VaasRegion::Us => "https://api.venafi.cloud",
            VaasRegion::Eu => "https://api.venafi.eu",
        }
    }
}

/// Credential object supplied by the host.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaasCredentials {
    pub api_key: String,
    #[serde(default)]
    pub region: VaasRegion,
}

impl VaasCredentials {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            region: VaasRegion::default(),
        }
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for VaasCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaasCredentials")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}
