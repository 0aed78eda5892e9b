use anyhow::{Result, anyhow};
use serde_json::json;

use vaas_node_lib::ExecutionSettings;
use vaas_node_lib::client::Method;

use super::test_utils::{StubTransport, ids, item, node_with};

#[test]
fn create_with_literal_csr_posts_csr_and_returns_requests() -> Result<()> {
    let stub = StubTransport::json(vec![json!({
        "certificateRequests": [{"id": "req-1", "status": "REQUESTED"}]
    })]);
    let node = node_with(&stub);

    let params = item("certificateRequest", "create")
        .with("applicationId", "app-1")
        .with("certificateIssuingTemplateId", "cit-1")
        .with("generateCsr", false)
        .with("certificateSigningRequest", "-----BEGIN CERTIFICATE REQUEST-----");

    let output = node.execute(&[params], ExecutionSettings::default())?;

    assert_eq!(ids(&output), vec!["req-1"]);
    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].path, "/outagedetection/v1/certificaterequests");
    let body = calls[0]
        .body
        .as_ref()
        .ok_or_else(|| anyhow!("create must send a body"))?;
    assert!(body.get("csrAttributes").is_none());
    assert_eq!(
        body["certificateSigningRequest"],
        json!("-----BEGIN CERTIFICATE REQUEST-----")
    );
    Ok(())
}

#[test]
fn create_with_generated_csr_groups_sans_and_key_parameters() -> Result<()> {
    let stub = StubTransport::json(vec![json!({
        "certificateRequests": [{"id": "req-2"}]
    })]);
    let node = node_with(&stub);

    let params = item("certificateRequest", "create")
        .with("applicationId", "app-1")
        .with("certificateIssuingTemplateId", "cit-1")
        .with("generateCsr", true)
        .with("applicationServerTypeId", "ast-1")
        .with("isVaaSGenerated", true)
        .with("commonName", "example.com")
        .with(
            "additionalFields",
            json!({
                "organization": "Example Inc",
                "keyType": "RSA",
                "keyLength": 2048,
                "subjectAltNamesUi": {
                    "subjectAltNamesValues": [
                        {"typeName": "dnsNames", "value": "www.example.com"},
                        {"typeName": "ipAddresses", "value": "192.0.2.10"},
                        {"typeName": "dnsNames", "value": "api.example.com"},
                        {"typeName": "registeredId", "value": "1.2.3"}
                    ]
                }
            }),
        );

    node.execute(&[params], ExecutionSettings::default())?;

    let calls = stub.calls();
    let body = calls[0]
        .body
        .as_ref()
        .ok_or_else(|| anyhow!("create must send a body"))?;
    assert!(body.get("certificateSigningRequest").is_none());
    assert_eq!(body["isVaaSGenerated"], json!(true));
    assert_eq!(body["applicationServerTypeId"], json!("ast-1"));
    assert_eq!(
        body["csrAttributes"],
        json!({
            "commonName": "example.com",
            "organization": "Example Inc",
            "keyTypeParameters": {"keyType": "RSA", "keyLength": 2048},
            "subjectAlternativeNamesByType": {
                "dnsNames": ["www.example.com", "api.example.com"],
                "ipAddresses": ["192.0.2.10"]
            }
        })
    );
    Ok(())
}

#[test]
fn create_with_generated_csr_requires_common_name() -> Result<()> {
    let stub = StubTransport::json(vec![]);
    let node = node_with(&stub);

    let params = item("certificateRequest", "create")
        .with("applicationId", "app-1")
        .with("certificateIssuingTemplateId", "cit-1")
        .with("generateCsr", true);

    let err = node
        .execute(&[params], ExecutionSettings::default())
        .expect_err("missing commonName must fail");

    assert!(err.to_string().contains("commonName"));
    assert!(stub.calls().is_empty(), "no request may be sent");
    Ok(())
}

#[test]
fn get_returns_the_raw_object() -> Result<()> {
    let stub = StubTransport::json(vec![json!({"id": "req-9", "status": "ISSUED"})]);
    let node = node_with(&stub);

    let output = node.execute(
        &[item("certificateRequest", "get").with("certificateRequestId", "req-9")],
        ExecutionSettings::default(),
    )?;

    assert_eq!(output.len(), 1);
    assert_eq!(output[0].json["status"], json!("ISSUED"));
    assert_eq!(
        stub.calls()[0].path,
        "/outagedetection/v1/certificaterequests/req-9"
    );
    assert!(stub.calls()[0].body.is_none());
    Ok(())
}

#[test]
fn get_all_return_all_concatenates_pages_in_order() -> Result<()> {
    let stub = StubTransport::json(vec![
        json!({"certificateRequests": [{"id": "1"}, {"id": "2"}], "nextCursor": "p2"}),
        json!({"certificateRequests": [{"id": "3"}, {"id": "4"}], "nextCursor": "p3"}),
        json!({"certificateRequests": [{"id": "5"}, {"id": "6"}]}),
    ]);
    let node = node_with(&stub);

    let output = node.execute(
        &[item("certificateRequest", "getAll").with("returnAll", true)],
        ExecutionSettings::default(),
    )?;

    assert_eq!(ids(&output), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(stub.calls().len(), 3);
    Ok(())
}

#[test]
fn get_all_with_limit_truncates_first_page() -> Result<()> {
    let stub = StubTransport::json(vec![json!({
        "certificateRequests": [
            {"id": "1"}, {"id": "2"}, {"id": "3"}, {"id": "4"}, {"id": "5"}
        ]
    })]);
    let node = node_with(&stub);

    let output = node.execute(
        &[item("certificateRequest", "getAll")
            .with("returnAll", false)
            .with("limit", 2)],
        ExecutionSettings::default(),
    )?;

    assert_eq!(ids(&output), vec!["1", "2"]);
    Ok(())
}

/// Only the first page is consulted when `returnAll` is off, so a limit larger
/// than one page under-returns even if the server has more.
#[test]
fn get_all_with_limit_never_reads_a_second_page() -> Result<()> {
    let stub = StubTransport::json(vec![
        json!({"certificateRequests": [{"id": "1"}, {"id": "2"}], "nextCursor": "p2"}),
        json!({"certificateRequests": [{"id": "3"}]}),
    ]);
    let node = node_with(&stub);

    let output = node.execute(
        &[item("certificateRequest", "getAll")
            .with("returnAll", false)
            .with("limit", 10)],
        ExecutionSettings::default(),
    )?;

    assert_eq!(ids(&output), vec!["1", "2"]);
    assert_eq!(stub.calls().len(), 1);
    Ok(())
}
