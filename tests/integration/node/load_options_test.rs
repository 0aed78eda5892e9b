use anyhow::Result;
use serde_json::json;

use vaas_node_lib::core::commands::load_options;
use vaas_node_lib::description::PropertyOption;

use super::test_utils::StubTransport;

#[test]
fn applications_map_name_and_id() -> Result<()> {
    let stub = StubTransport::json(vec![json!({
        "applications": [
            {"id": "app-1", "name": "Web"},
            {"id": "app-2"},
            {"name": "no id"}
        ]
    })]);

    let options = load_options(&*stub, "getApplications")?;

    assert_eq!(
        options,
        vec![
            PropertyOption::new("Web", "app-1"),
            PropertyOption::new("app-2", "app-2"),
        ]
    );
    assert_eq!(stub.calls()[0].path, "/outagedetection/v1/applications");
    Ok(())
}

#[test]
fn application_server_types_use_platform_name() -> Result<()> {
    let stub = StubTransport::json(vec![json!({
        "applicationServerTypes": [{"id": "ast-1", "platformName": "Apache"}]
    })]);

    let options = load_options(&*stub, "getApplicationServerTypes")?;

    assert_eq!(options, vec![PropertyOption::new("Apache", "ast-1")]);
    Ok(())
}

#[test]
fn issuing_templates_come_from_unprefixed_path() -> Result<()> {
    let stub = StubTransport::json(vec![json!({
        "certificateIssuingTemplates": [{"id": "cit-1", "name": "Default"}]
    })]);

    let options = load_options(&*stub, "getCertificateIssuingTemplates")?;

    assert_eq!(options, vec![PropertyOption::new("Default", "cit-1")]);
    assert_eq!(stub.calls()[0].path, "/v1/certificateissuingtemplates");
    Ok(())
}

#[test]
fn missing_list_yields_no_options() -> Result<()> {
    let stub = StubTransport::json(vec![json!({})]);
    assert!(load_options(&*stub, "getApplications")?.is_empty());
    Ok(())
}

#[test]
fn unknown_method_is_rejected() {
    let stub = StubTransport::json(vec![]);
    assert!(load_options(&*stub, "getZones").is_err());
    assert!(stub.calls().is_empty());
}
