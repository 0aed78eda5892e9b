use anyhow::Result;
use serde_json::json;

use vaas_node_lib::ExecutionSettings;
use vaas_node_lib::core::ParameterError;

use super::test_utils::{StubResponse, StubTransport, item, node_with};

fn three_gets() -> Vec<vaas_node_lib::ItemParameters> {
    ["a", "b", "c"]
        .into_iter()
        .map(|id| item("certificate", "get").with("certificateId", id))
        .collect()
}

fn second_call_fails() -> Vec<StubResponse> {
    vec![
        StubResponse::Json(json!({"id": "a"})),
        StubResponse::Fail("Venafi API request failed (404 Not Found)".to_string()),
        StubResponse::Json(json!({"id": "c"})),
    ]
}

#[test]
fn continue_on_fail_records_error_in_place() -> Result<()> {
    let stub = StubTransport::new(second_call_fails());
    let node = node_with(&stub);

    let output = node.execute(
        &three_gets(),
        ExecutionSettings {
            continue_on_fail: true,
        },
    )?;

    assert_eq!(output.len(), 3);
    assert_eq!(output[0].json["id"], json!("a"));
    assert!(
        output[1].json["error"]
            .as_str()
            .unwrap_or_default()
            .contains("404")
    );
    assert_eq!(output[2].json["id"], json!("c"));
    assert_eq!(stub.calls().len(), 3);
    Ok(())
}

#[test]
fn failure_aborts_run_without_continue_on_fail() -> Result<()> {
    let stub = StubTransport::new(second_call_fails());
    let node = node_with(&stub);

    let err = node
        .execute(&three_gets(), ExecutionSettings::default())
        .expect_err("second item must abort the run");

    assert!(err.to_string().contains("404"));
    assert_eq!(stub.calls().len(), 2, "third item must not be attempted");
    Ok(())
}

#[test]
fn empty_input_produces_no_output_and_no_calls() -> Result<()> {
    let stub = StubTransport::new(vec![]);
    let node = node_with(&stub);

    let output = node.execute(&[], ExecutionSettings::default())?;

    assert!(output.is_empty());
    assert!(stub.calls().is_empty());
    Ok(())
}

#[test]
fn unsupported_operation_fails_before_any_call() -> Result<()> {
    let stub = StubTransport::new(vec![]);
    let node = node_with(&stub);

    let err = node
        .execute(
            &[item("certificateRequest", "delete")],
            ExecutionSettings {
                continue_on_fail: true,
            },
        )
        .expect_err("certificateRequest has no delete operation");

    assert!(matches!(
        err.downcast_ref::<ParameterError>(),
        Some(ParameterError::UnsupportedOperation { .. })
    ));
    assert!(stub.calls().is_empty());
    Ok(())
}

#[test]
fn operation_of_first_item_applies_to_every_item() -> Result<()> {
    let stub = StubTransport::json(vec![json!({"id": "a"}), json!({"id": "b"})]);
    let node = node_with(&stub);

    node.execute(
        &[
            item("certificate", "get").with("certificateId", "a"),
            item("certificateRequest", "getAll").with("certificateId", "b"),
        ],
        ExecutionSettings::default(),
    )?;

    let calls = stub.calls();
    assert_eq!(calls[0].path, "/outagedetection/v1/certificates/a");
    assert_eq!(calls[1].path, "/outagedetection/v1/certificates/b");
    Ok(())
}

#[test]
fn missing_parameter_becomes_error_item() -> Result<()> {
    let stub = StubTransport::json(vec![json!({"id": "a"})]);
    let node = node_with(&stub);

    let output = node.execute(
        &[
            item("certificate", "get"),
            item("certificate", "get").with("certificateId", "a"),
        ],
        ExecutionSettings {
            continue_on_fail: true,
        },
    )?;

    assert_eq!(output.len(), 2);
    assert!(
        output[0].json["error"]
            .as_str()
            .unwrap_or_default()
            .contains("certificateId")
    );
    assert_eq!(output[1].json["id"], json!("a"));
    assert_eq!(stub.calls().len(), 1);
    Ok(())
}

#[test]
fn error_record_keeps_transport_cause() -> Result<()> {
    let stub = StubTransport::new(vec![StubResponse::FailWithContext(
        "Failed to call Venafi API: GET /outagedetection/v1/certificates/a".to_string(),
        "error trying to connect: Connection refused (os error 111)".to_string(),
    )]);
    let node = node_with(&stub);

    let output = node.execute(
        &[item("certificate", "get").with("certificateId", "a")],
        ExecutionSettings {
            continue_on_fail: true,
        },
    )?;

    let message = output[0].json["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("Failed to call Venafi API"));
    assert!(message.contains("Connection refused"));
    Ok(())
}
