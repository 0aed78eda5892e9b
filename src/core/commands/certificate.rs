use anyhow::{Context, Result};
use log::debug;
use serde_json::{Value, json};

use crate::client::{Method, Query, VaasTransport, paths, request_all_items};
use crate::core::extra_fields::{
    CERTIFICATE_FILTERS, DOWNLOAD_OPTIONS, ExtraFields, REQUEST_OPTIONS,
};
use crate::core::output::{BinaryData, OperationResult, OutputItem};
use crate::core::params::ItemParameters;
use crate::core::types::{CertificateDeletionRequest, RenewalRequest};

use super::{DEFAULT_LIMIT, take_field, truncate};

const RESOURCE_KEY: &str = "certificates";
const REQUEST_RESOURCE_KEY: &str = "certificateRequests";

pub fn delete(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let certificate_id = params.required_str("certificateId")?;
    let body = serde_json::to_value(CertificateDeletionRequest {
        certificate_ids: vec![certificate_id],
    })
    .context("Failed to encode certificate deletion request")?;

    let response = transport.request(
        Method::Post,
        paths::CERTIFICATE_DELETION,
        Some(&body),
        &Query::new(),
    )?;
    Ok(OperationResult::Data(take_field(response, RESOURCE_KEY)))
}

pub fn download(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let certificate_id = params.required_str("certificateId")?;
    let binary_property = params.str_or("binaryProperty", "data")?;
    let options = ExtraFields::validate("options", params.object("options")?, DOWNLOAD_OPTIONS)?;

    let mut query = Query::new();
    options.merge_into(&mut query);

    let response = transport.request_binary(
        Method::Get,
        &paths::certificate_contents(&certificate_id),
        &query,
    )?;
    debug!(
        "[vaas-node] downloaded {} byte(s) for certificate {certificate_id}",
        response.data.len()
    );

    let data = BinaryData::new(response.data, response.content_type);
    Ok(OperationResult::Binary(OutputItem::binary(binary_property, data)))
}

pub fn get(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let certificate_id = params.required_str("certificateId")?;
    let response = transport.request(
        Method::Get,
        &paths::certificate(&certificate_id),
        None,
        &Query::new(),
    )?;
    Ok(OperationResult::Data(response))
}

pub fn get_all(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let filters = ExtraFields::validate("filters", params.object("filters")?, CERTIFICATE_FILTERS)?;
    let mut query = Query::new();
    filters.merge_into(&mut query);

    if params.bool_or("returnAll", false)? {
        let items = request_all_items(
            transport,
            RESOURCE_KEY,
            Method::Get,
            paths::CERTIFICATES,
            None,
            &query,
        )?;
        return Ok(OperationResult::Data(Value::Array(items)));
    }

    let limit = params.u64_or("limit", DEFAULT_LIMIT)?;
    query.insert("limit".to_string(), json!(limit));
    let response = transport.request(Method::Get, paths::CERTIFICATES, None, &query)?;
    Ok(OperationResult::Data(Value::Array(truncate(
        take_field(response, RESOURCE_KEY),
        limit,
    ))))
}

pub fn build_renew_body(params: &ItemParameters) -> Result<Value> {
    let request = RenewalRequest {
        certificate_signing_request: params.required_str("certificateSigningRequest")?,
        certificate_issuing_template_id: params.required_str("certificateIssuingTemplateId")?,
        application_id: params.required_str("applicationId")?,
        existing_certificate_id: params.required_str("existingCertificateId")?,
    };
    let options = ExtraFields::validate("options", params.object("options")?, REQUEST_OPTIONS)?;

    let mut body = match serde_json::to_value(&request)
        .context("Failed to encode renewal request")?
    {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    options.merge_into(&mut body);
    Ok(Value::Object(body))
}

pub fn renew(transport: &dyn VaasTransport, params: &ItemParameters) -> Result<OperationResult> {
    let body = build_renew_body(params)?;
    let response = transport.request(
        Method::Post,
        paths::CERTIFICATE_REQUESTS,
        Some(&body),
        &Query::new(),
    )?;
    Ok(OperationResult::Data(take_field(response, REQUEST_RESOURCE_KEY)))
}
