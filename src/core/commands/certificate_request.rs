use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;

use crate::client::{Method, Query, VaasTransport, paths, request_all_items};
use crate::core::csr::build_csr_attributes;
use crate::core::extra_fields::{CSR_ADDITIONAL_FIELDS, ExtraFields, REQUEST_OPTIONS};
use crate::core::output::OperationResult;
use crate::core::params::ItemParameters;
use crate::core::types::CertificateRequestSpec;

use super::{DEFAULT_LIMIT, take_field, truncate};

const RESOURCE_KEY: &str = "certificateRequests";

/// Builds the request body for `create` without touching the network.
pub fn build_create_body(params: &ItemParameters) -> Result<Value> {
    let application_id = params.required_str("applicationId")?;
    let certificate_issuing_template_id = params.required_str("certificateIssuingTemplateId")?;
    let options = ExtraFields::validate("options", params.object("options")?, REQUEST_OPTIONS)?;
    let generate_csr = params.bool_or("generateCsr", false)?;

    let spec = if generate_csr {
        let additional_fields = ExtraFields::validate(
            "additionalFields",
            params.object("additionalFields")?,
            CSR_ADDITIONAL_FIELDS,
        )?;
        let mut fields = serde_json::Map::new();
        additional_fields.merge_into(&mut fields);
        let csr_attributes = build_csr_attributes(params.required_str("commonName")?, &fields)?;

        CertificateRequestSpec {
            application_id,
            certificate_issuing_template_id,
            is_vaas_generated: Some(params.bool_or("isVaaSGenerated", true)?),
            application_server_type_id: params.optional_str("applicationServerTypeId")?,
            csr_attributes: Some(csr_attributes),
            certificate_signing_request: None,
        }
    } else {
        CertificateRequestSpec {
            application_id,
            certificate_issuing_template_id,
            is_vaas_generated: None,
            application_server_type_id: None,
            csr_attributes: None,
            certificate_signing_request: Some(params.required_str("certificateSigningRequest")?),
        }
    };

    let mut body = match serde_json::to_value(&spec)
        .context("Failed to encode certificate request")?
    {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    options.merge_into(&mut body);
    Ok(Value::Object(body))
}

pub fn create(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let body = build_create_body(params)?;
    let response = transport.request(
        Method::Post,
        paths::CERTIFICATE_REQUESTS,
        Some(&body),
        &Query::new(),
    )?;
    Ok(OperationResult::Data(take_field(response, RESOURCE_KEY)))
}

pub fn get(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let id = params.required_str("certificateRequestId")?;
    let response = transport.request(
        Method::Get,
        &paths::certificate_request(&id),
        None,
        &Query::new(),
    )?;
    Ok(OperationResult::Data(response))
}

/// Without `returnAll` only the first page is read and then cut to `limit`.
pub fn get_all(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let query = Query::new();
    if params.bool_or("returnAll", false)? {
        let items = request_all_items(
            transport,
            RESOURCE_KEY,
            Method::Get,
            paths::CERTIFICATE_REQUESTS,
            None,
            &query,
        )?;
        return Ok(OperationResult::Data(Value::Array(items)));
    }

    let limit = params.u64_or("limit", DEFAULT_LIMIT)?;
    let response = transport.request(Method::Get, paths::CERTIFICATE_REQUESTS, None, &query)?;
    let items = truncate(take_field(response, RESOURCE_KEY), limit);
    debug!(
        "[vaas-node] certificate request list truncated to {} item(s)",
        items.len()
    );
    Ok(OperationResult::Data(Value::Array(items)))
}
