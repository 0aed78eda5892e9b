use anyhow::Result;
use log::debug;
use serde_json::Value;

use crate::client::{Method, Query, VaasTransport, paths};
use crate::description::PropertyOption;

/// Applications the API key can request certificates for.
pub fn get_applications(transport: &dyn VaasTransport) -> Result<Vec<PropertyOption>> {
    list_options(transport, paths::APPLICATIONS, "applications", "name")
}

pub fn get_application_server_types(transport: &dyn VaasTransport) -> Result<Vec<PropertyOption>> {
    list_options(
        transport,
        paths::APPLICATION_SERVER_TYPES,
        "applicationServerTypes",
        "platformName",
    )
}

pub fn get_certificate_issuing_templates(
    transport: &dyn VaasTransport,
) -> Result<Vec<PropertyOption>> {
    list_options(
        transport,
        paths::CERTIFICATE_ISSUING_TEMPLATES,
        "certificateIssuingTemplates",
        "name",
    )
}

/// Dispatches a `loadOptionsMethod` name from the node description.
pub fn load_options(transport: &dyn VaasTransport, method: &str) -> Result<Vec<PropertyOption>> {
    match method {
        "getApplications" => get_applications(transport),
        "getApplicationServerTypes" => get_application_server_types(transport),
        "getCertificateIssuingTemplates" => get_certificate_issuing_templates(transport),
        other => Err(anyhow::anyhow!("unknown load options method: {other}")),
    }
}

fn list_options(
    transport: &dyn VaasTransport,
    path: &str,
    resource_key: &str,
    name_field: &str,
) -> Result<Vec<PropertyOption>> {
    let response = transport.request(Method::Get, path, None, &Query::new())?;
    let records = response
        .get(resource_key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut options = Vec::with_capacity(records.len());
    for record in records {
        let Some(id) = record.get("id").and_then(Value::as_str) else {
            debug!("[vaas-node] skipping {resource_key} record without id");
            continue;
        };
        let name = record
            .get(name_field)
            .and_then(Value::as_str)
            .unwrap_or(id)
            .to_string();
        options.push(PropertyOption::new(name, id));
    }
    Ok(options)
}
