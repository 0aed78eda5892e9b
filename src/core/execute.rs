use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};

use crate::client::VaasTransport;
use crate::description::NodeDescription;

use super::commands::{certificate, certificate_request};
use super::operation::NodeOperation;
use super::output::{OperationResult, OutputItem};
use super::params::{ItemParameters, ParameterError};

/// Per-run settings chosen in the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionSettings {
    /// Record a failing item as `{ "error": message }` and keep going.
    pub continue_on_fail: bool,
}

/// The VaaS node: turns input items into API calls and API responses into
/// output items.
#[derive(Clone)]
pub struct VaasNode {
    transport: Arc<dyn VaasTransport>,
}

impl VaasNode {
    pub fn new(transport: Arc<dyn VaasTransport>) -> Self {
        Self { transport }
    }

    pub fn description() -> NodeDescription {
        NodeDescription::venafi_as_a_service()
    }

    pub fn transport(&self) -> &dyn VaasTransport {
        self.transport.as_ref()
    }

    /// Resource and operation are taken from the first item and apply to the
    /// whole run. Items are processed one after another in input order.
    pub fn execute(
        &self,
        items: &[ItemParameters],
        settings: ExecutionSettings,
    ) -> Result<Vec<OutputItem>> {
        let Some(first) = items.first() else {
            return Ok(Vec::new());
        };
        let operation = resolve_operation(first)?;
        debug!(
            "[vaas-node] running {}.{} for {} item(s)",
            operation.resource().as_str(),
            operation.operation(),
            items.len()
        );

        let mut output = Vec::new();
        for (index, params) in items.iter().enumerate() {
            match self.run_item(operation, params) {
                Ok(result) => output.extend(result.into_items()),
                Err(err) if settings.continue_on_fail => {
                    warn!("[vaas-node] item {index} failed, continuing: {err:#}");
                    output.push(OutputItem::error(format!("{err:#}")));
                }
                Err(err) => {
                    warn!("[vaas-node] item {index} failed: {err:#}");
                    return Err(err);
                }
            }
        }
        Ok(output)
    }

    pub fn run_item(
        &self,
        operation: NodeOperation,
        params: &ItemParameters,
    ) -> Result<OperationResult> {
        let transport = self.transport();
        match operation {
            NodeOperation::CertificateRequestCreate => certificate_request::create(transport, params),
            NodeOperation::CertificateRequestGet => certificate_request::get(transport, params),
            NodeOperation::CertificateRequestGetAll => certificate_request::get_all(transport, params),
            NodeOperation::CertificateDelete => certificate::delete(transport, params),
            NodeOperation::CertificateDownload => certificate::download(transport, params),
            NodeOperation::CertificateGet => certificate::get(transport, params),
            NodeOperation::CertificateGetAll => certificate::get_all(transport, params),
            NodeOperation::CertificateRenew => certificate::renew(transport, params),
        }
    }
}

fn resolve_operation(params: &ItemParameters) -> Result<NodeOperation, ParameterError> {
    let resource = params.str_or("resource", "certificateRequest")?;
    let operation = params.required_str("operation")?;
    NodeOperation::resolve(&resource, &operation)
}
