use serde_json::{Value, json};

use super::{NodeProperty, PropertyOption};
use crate::core::operation::Resource;
use crate::core::types::SanKind;

const RESOURCE: Resource = Resource::CertificateRequest;

pub fn operations() -> Vec<NodeProperty> {
    vec![
        NodeProperty::options(
            "operation",
            "Operation",
            vec![
                PropertyOption::new("Create", "create")
                    .described("Create a new certificate request"),
                PropertyOption::new("Get", "get").described("Get a certificate request"),
                PropertyOption::new("Get All", "getAll")
                    .described("Retrieve all certificate requests"),
            ],
        )
        .show(RESOURCE, &[]),
    ]
}

pub fn fields() -> Vec<NodeProperty> {
    let mut fields = create_fields();
    fields.extend([
        NodeProperty::string("certificateRequestId", "Certificate Request ID")
            .required()
            .show(RESOURCE, &["get"]),
        NodeProperty::boolean("returnAll", "Return All", false)
            .description("Whether to return all results or only up to a given limit")
            .show(RESOURCE, &["getAll"]),
        NodeProperty::number("limit", "Limit", 50)
            .min_value(0)
            .description("Max number of results to return")
            .show(RESOURCE, &["getAll"])
            .show_when("returnAll", Value::Bool(false)),
    ]);
    fields
}

fn create_fields() -> Vec<NodeProperty> {
    let generated = Value::Bool(true);
    vec![
        NodeProperty::dynamic_options("applicationId", "Application Name", "getApplications")
            .required()
            .show(RESOURCE, &["create"]),
        NodeProperty::dynamic_options(
            "certificateIssuingTemplateId",
            "Certificate Issuing Template Name",
            "getCertificateIssuingTemplates",
        )
        .required()
        .show(RESOURCE, &["create"]),
        NodeProperty::boolean("generateCsr", "Generate CSR", false)
            .show(RESOURCE, &["create"]),
        NodeProperty::dynamic_options(
            "applicationServerTypeId",
            "Application Server Type",
            "getApplicationServerTypes",
        )
        .required()
        .show(RESOURCE, &["create"])
        .show_when("generateCsr", generated.clone()),
        NodeProperty::boolean("isVaaSGenerated", "Generated By VaaS", true)
            .description("Whether the key pair and CSR are generated by the service")
            .show(RESOURCE, &["create"])
            .show_when("generateCsr", generated.clone()),
        NodeProperty::string("commonName", "Common Name")
            .required()
            .description("The fully qualified domain name the certificate is issued for")
            .show(RESOURCE, &["create"])
            .show_when("generateCsr", generated.clone()),
        NodeProperty::string("certificateSigningRequest", "Certificate Signing Request")
            .required()
            .show(RESOURCE, &["create"])
            .show_when("generateCsr", Value::Bool(false)),
        NodeProperty::collection("additionalFields", "Additional Fields", csr_fields())
            .show(RESOURCE, &["create"])
            .show_when("generateCsr", generated),
        NodeProperty::collection("options", "Options", request_options())
            .show(RESOURCE, &["create"]),
    ]
}

fn csr_fields() -> Vec<NodeProperty> {
    vec![
        NodeProperty::string("organization", "Organization")
            .description("The name of your organization, without abbreviation"),
        NodeProperty::string("organizationalUnits", "Organizational Units")
            .multiple_values()
            .default_value(json!([])),
        NodeProperty::string("locality", "City/Locality"),
        NodeProperty::string("state", "State"),
        NodeProperty::string("country", "Country")
            .description("Two-letter ISO country code"),
        NodeProperty::options(
            "keyType",
            "Key Type",
            vec![
                PropertyOption::new("RSA", "RSA"),
                PropertyOption::new("EC", "EC"),
            ],
        ),
        NodeProperty::options(
            "keyCurve",
            "Key Curve",
            vec![
                PropertyOption::new("P256", "P256"),
                PropertyOption::new("P384", "P384"),
                PropertyOption::new("P521", "P521"),
                PropertyOption::new("ED25519", "ED25519"),
            ],
        ),
        NodeProperty::options(
            "keyLength",
            "Key Length",
            [1024u64, 2048, 3072, 4096]
                .into_iter()
                .map(|len| PropertyOption::new(len.to_string(), len))
                .collect(),
        )
        .default_value(json!(2048)),
        NodeProperty::fixed_collection(
            "subjectAltNamesUi",
            "Subject Alternative Names",
            "subjectAltNamesValues",
            "Subject Alternative Name",
            vec![
                NodeProperty::options(
                    "typeName",
                    "Type",
                    vec![
                        PropertyOption::new("DNS", SanKind::DnsNames.as_str()),
                        PropertyOption::new("IP Address", SanKind::IpAddresses.as_str()),
                        PropertyOption::new("Email", SanKind::Rfc822Names.as_str()),
                        PropertyOption::new("URI", SanKind::UniformResourceIdentifiers.as_str()),
                    ],
                ),
                NodeProperty::string("value", "Value"),
            ],
        ),
    ]
}

/// Shared with certificate renewal.
pub(super) fn request_options() -> Vec<NodeProperty> {
    vec![
        NodeProperty::options(
            "validityPeriod",
            "Validity Period",
            vec![
                PropertyOption::new("1 Day", "P1D"),
                PropertyOption::new("30 Days", "P30D"),
                PropertyOption::new("90 Days", "P90D"),
                PropertyOption::new("1 Year", "P1Y"),
            ],
        )
        .default_value(json!("P1Y")),
        NodeProperty::string("certificateOwnerUserId", "Certificate Owner User ID"),
        NodeProperty::dynamic_options(
            "applicationServerTypeId",
            "Application Server Type",
            "getApplicationServerTypes",
        ),
    ]
}
