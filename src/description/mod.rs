//! Declarative parameter schema rendered by the host.
//!
//! Nothing here runs at execution time; the dispatcher reads the same
//! parameter names and falls back to the defaults declared here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::CREDENTIAL_NAME;
use crate::core::operation::{NodeOperation, Resource};

mod certificate;
mod certificate_request;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    pub name: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyOption {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    String,
    Boolean,
    Number,
    Options,
    Collection,
    FixedCollection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_options_method: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub multiple_values: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayOptions {
    pub show: BTreeMap<String, Vec<Value>>,
}

/// Entries of a property's `options` list: plain choices, collection
/// children, or named groups of a fixed collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyChoice {
    Option(PropertyOption),
    Property(NodeProperty),
    Group(PropertyGroup),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGroup {
    pub name: String,
    pub display_name: String,
    pub values: Vec<NodeProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub default: Value,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_options: Option<TypeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
}

impl NodeProperty {
    fn new(name: &str, display_name: &str, kind: PropertyType, default: Value) -> Self {
        Self {
            display_name: display_name.to_string(),
            name: name.to_string(),
            kind,
            default,
            required: false,
            description: None,
            placeholder: None,
            options: Vec::new(),
            type_options: None,
            display_options: None,
        }
    }

    pub fn string(name: &str, display_name: &str) -> Self {
        Self::new(name, display_name, PropertyType::String, Value::String(String::new()))
    }

    pub fn boolean(name: &str, display_name: &str, default: bool) -> Self {
        Self::new(name, display_name, PropertyType::Boolean, Value::Bool(default))
    }

    pub fn number(name: &str, display_name: &str, default: u64) -> Self {
        Self::new(name, display_name, PropertyType::Number, Value::from(default))
    }

    pub fn options(name: &str, display_name: &str, choices: Vec<PropertyOption>) -> Self {
        let default = choices
            .first()
            .map(|choice| choice.value.clone())
            .unwrap_or(Value::String(String::new()));
        let mut property = Self::new(name, display_name, PropertyType::Options, default);
        property.options = choices.into_iter().map(PropertyChoice::Option).collect();
        property
    }

    /// A dropdown filled at render time by one of the load-options lookups.
    pub fn dynamic_options(name: &str, display_name: &str, method: &str) -> Self {
        let mut property = Self::new(
            name,
            display_name,
            PropertyType::Options,
            Value::String(String::new()),
        );
        property.type_options_mut().load_options_method = Some(method.to_string());
        property
    }

    pub fn collection(name: &str, display_name: &str, children: Vec<NodeProperty>) -> Self {
        let mut property = Self::new(
            name,
            display_name,
            PropertyType::Collection,
            Value::Object(Default::default()),
        );
        property.placeholder = Some("Add Field".to_string());
        property.options = children.into_iter().map(PropertyChoice::Property).collect();
        property
    }

    pub fn fixed_collection(
        name: &str,
        display_name: &str,
        group: &str,
        group_display_name: &str,
        values: Vec<NodeProperty>,
    ) -> Self {
        let mut property = Self::new(
            name,
            display_name,
            PropertyType::FixedCollection,
            Value::Object(Default::default()),
        );
        property.type_options_mut().multiple_values = true;
        property.options = vec![PropertyChoice::Group(PropertyGroup {
            name: group.to_string(),
            display_name: group_display_name.to_string(),
            values,
        })];
        property
    }

    pub fn default_value(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn multiple_values(mut self) -> Self {
        self.type_options_mut().multiple_values = true;
        self
    }

    pub fn min_value(mut self, min: u64) -> Self {
        self.type_options_mut().min_value = Some(min);
        self
    }

    /// Restricts the property to the given resource and operations.
    pub fn show(mut self, resource: Resource, operations: &[&str]) -> Self {
        let show = &mut self.display_options.get_or_insert_with(Default::default).show;
        show.insert(
            "resource".to_string(),
            vec![Value::String(resource.as_str().to_string())],
        );
        if !operations.is_empty() {
            show.insert(
                "operation".to_string(),
                operations
                    .iter()
                    .map(|op| Value::String(op.to_string()))
                    .collect(),
            );
        }
        self
    }

    /// Adds a further condition on another parameter's value.
    pub fn show_when(mut self, parameter: &str, value: Value) -> Self {
        self.display_options
            .get_or_insert_with(Default::default)
            .show
            .insert(parameter.to_string(), vec![value]);
        self
    }

    fn type_options_mut(&mut self) -> &mut TypeOptions {
        self.type_options.get_or_insert_with(Default::default)
    }

    /// Names of collection children, empty for other property types.
    pub fn child_names(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter_map(|choice| match choice {
                PropertyChoice::Property(child) => Some(child.name.as_str()),
                _ => None,
            })
            .collect()
    }

    fn shown_for(&self, operation: NodeOperation) -> bool {
        let Some(display) = &self.display_options else {
            return true;
        };
        let matches = |key: &str, expected: &str| {
            display
                .show
                .get(key)
                .map(|values| values.iter().any(|value| value.as_str() == Some(expected)))
                .unwrap_or(true)
        };
        matches("resource", operation.resource().as_str())
            && matches("operation", operation.operation())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialRequirement {
    pub name: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub group: Vec<String>,
    pub version: u32,
    pub subtitle: String,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub credentials: Vec<CredentialRequirement>,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescription {
    pub fn venafi_as_a_service() -> Self {
        let mut properties = vec![
            NodeProperty::options(
                "resource",
                "Resource",
                vec![
                    PropertyOption::new("Certificate", Resource::Certificate.as_str()),
                    PropertyOption::new(
                        "Certificate Request",
                        Resource::CertificateRequest.as_str(),
                    ),
                ],
            )
            .default_value(Value::String(
                Resource::CertificateRequest.as_str().to_string(),
            ))
            .description("The resource to operate on"),
        ];
        properties.extend(certificate::operations());
        properties.extend(certificate::fields());
        properties.extend(certificate_request::operations());
        properties.extend(certificate_request::fields());

        Self {
            display_name: "Venafi TLS Protect Cloud".to_string(),
            name: "venafiAsAService".to_string(),
            group: vec!["input".to_string()],
            version: 1,
            subtitle: r#"={{$parameter["operation"] + ": " + $parameter["resource"]}}"#
                .to_string(),
            description: "Consume Venafi TLS Protect Cloud API".to_string(),
            inputs: vec!["main".to_string()],
            outputs: vec!["main".to_string()],
            credentials: vec![CredentialRequirement {
                name: CREDENTIAL_NAME.to_string(),
                required: true,
            }],
            properties,
        }
    }

    /// Properties visible once `operation` is selected.
    pub fn properties_for(&self, operation: NodeOperation) -> Vec<&NodeProperty> {
        self.properties
            .iter()
            .filter(|property| property.shown_for(operation))
            .collect()
    }

    pub fn property(&self, operation: NodeOperation, name: &str) -> Option<&NodeProperty> {
        self.properties_for(operation)
            .into_iter()
            .find(|property| property.name == name)
    }
}
