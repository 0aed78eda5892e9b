pub mod client;
pub mod core;
pub mod description;

pub use crate::client::{VaasCredentials, VaasHttpClient, VaasRegion, VaasTransport};
pub use crate::core::{ExecutionSettings, ItemParameters, OutputItem, VaasNode};
pub use crate::description::NodeDescription;

use std::sync::Arc;

/// Installs `env_logger` with an `info` default; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Builds a node that talks to the live API with the given credential.
pub fn connect(credentials: VaasCredentials) -> VaasNode {
    let client = VaasHttpClient::new(credentials);
    log::info!("[vaas-node] using API at {}", client.base_url());
    VaasNode::new(Arc::new(client))
}
