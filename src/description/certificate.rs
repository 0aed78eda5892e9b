use serde_json::{Value, json};

use super::certificate_request::request_options;
use super::{NodeProperty, PropertyOption};
use crate::core::operation::Resource;

const RESOURCE: Resource = Resource::Certificate;

pub fn operations() -> Vec<NodeProperty> {
    vec![
        NodeProperty::options(
            "operation",
            "Operation",
            vec![
                PropertyOption::new("Delete", "delete").described("Delete a certificate"),
                PropertyOption::new("Download", "download").described("Download a certificate"),
                PropertyOption::new("Get", "get").described("Retrieve a certificate"),
                PropertyOption::new("Get All", "getAll").described("Retrieve all certificates"),
                PropertyOption::new("Renew", "renew").described("Renew a certificate"),
            ],
        )
        .show(RESOURCE, &[]),
    ]
}

pub fn fields() -> Vec<NodeProperty> {
    vec![
        NodeProperty::string("certificateId", "Certificate ID")
            .required()
            .show(RESOURCE, &["delete", "download", "get"]),
        NodeProperty::string("binaryProperty", "Binary Property")
            .default_value(json!("data"))
            .required()
            .description("Name of the binary property the certificate is written to")
            .show(RESOURCE, &["download"]),
        NodeProperty::collection(
            "options",
            "Options",
            vec![
                NodeProperty::options(
                    "chainOrder",
                    "Chain Order",
                    vec![
                        PropertyOption::new("End Entity First", "EE_FIRST"),
                        PropertyOption::new("End Entity Only", "EE_ONLY"),
                        PropertyOption::new("Root First", "ROOT_FIRST"),
                    ],
                ),
                NodeProperty::options(
                    "format",
                    "Format",
                    vec![PropertyOption::new("PEM", "PEM"), PropertyOption::new("DER", "DER")],
                ),
            ],
        )
        .show(RESOURCE, &["download"]),
        NodeProperty::boolean("returnAll", "Return All", false)
            .description("Whether to return all results or only up to a given limit")
            .show(RESOURCE, &["getAll"]),
        NodeProperty::number("limit", "Limit", 50)
            .min_value(0)
            .description("Max number of results to return")
            .show(RESOURCE, &["getAll"])
            .show_when("returnAll", Value::Bool(false)),
        NodeProperty::collection(
            "filters",
            "Filters",
            vec![
                NodeProperty::dynamic_options("applicationId", "Application Name", "getApplications"),
                NodeProperty::options(
                    "certificateStatus",
                    "Certificate Status",
                    vec![
                        PropertyOption::new("Active", "ACTIVE"),
                        PropertyOption::new("Retired", "RETIRED"),
                        PropertyOption::new("Deleted", "DELETED"),
                    ],
                ),
                NodeProperty::string("certificateName", "Certificate Name"),
                NodeProperty::string("subjectCN", "Subject Common Name"),
                NodeProperty::string("issuerCertificateIds", "Issuer Certificate IDs")
                    .multiple_values()
                    .default_value(json!([])),
            ],
        )
        .show(RESOURCE, &["getAll"]),
        NodeProperty::dynamic_options("applicationId", "Application Name", "getApplications")
            .required()
            .show(RESOURCE, &["renew"]),
        NodeProperty::string("existingCertificateId", "Existing Certificate ID")
            .required()
            .show(RESOURCE, &["renew"]),
        NodeProperty::dynamic_options(
            "certificateIssuingTemplateId",
            "Certificate Issuing Template Name",
            "getCertificateIssuingTemplates",
        )
        .required()
        .show(RESOURCE, &["renew"]),
        NodeProperty::string("certificateSigningRequest", "Certificate Signing Request")
            .required()
            .show(RESOURCE, &["renew"]),
        NodeProperty::collection("options", "Options", request_options())
            .show(RESOURCE, &["renew"]),
    ]
}
