use log::debug;
use serde_json::{Map, Value};

use super::params::{ItemParameters, ParameterError};
use super::types::{CsrAttributes, KeyTypeParameters, SanEntry, SanKind, SubjectAltNamesByType};

pub const SAN_COLLECTION: &str = "subjectAltNamesUi";
pub const SAN_VALUES: &str = "subjectAltNamesValues";

/// Groups SAN rows by kind, keeping input order within each kind.
/// Rows with an unrecognised kind are skipped.
pub fn group_subject_alt_names(entries: &[SanEntry]) -> SubjectAltNamesByType {
    let mut grouped = SubjectAltNamesByType::default();
    for entry in entries {
        match SanKind::parse(&entry.type_name) {
            Some(kind) => grouped.push(kind, entry.value.clone()),
            None => debug!(
                "[vaas-node] ignoring SAN entry with unsupported type '{}'",
                entry.type_name
            ),
        }
    }
    grouped
}

/// Builds the CSR attributes from the common name and the validated
/// `additionalFields` collection.
pub fn build_csr_attributes(
    common_name: String,
    additional_fields: &Map<String, Value>,
) -> Result<CsrAttributes, ParameterError> {
    let fields = ItemParameters::from(additional_fields.clone());

    let key_type_parameters = KeyTypeParameters {
        key_type: fields.optional_str("keyType")?,
        key_curve: fields.optional_str("keyCurve")?,
        key_length: fields.u64_or("keyLength", 0).map(|len| Some(len).filter(|len| *len > 0))?,
    };

    let sans = group_subject_alt_names(&san_entries(additional_fields)?);

    Ok(CsrAttributes {
        common_name,
        organization: fields.optional_str("organization")?,
        organizational_units: organizational_units(additional_fields.get("organizationalUnits"))?,
        locality: fields.optional_str("locality")?,
        state: fields.optional_str("state")?,
        country: fields.optional_str("country")?,
        key_type_parameters: Some(key_type_parameters).filter(|params| !params.is_empty()),
        subject_alternative_names_by_type: Some(sans).filter(|sans| !sans.is_empty()),
    })
}

fn organizational_units(value: Option<&Value>) -> Result<Option<Vec<String>>, ParameterError> {
    let invalid = || ParameterError::InvalidType {
        name: "organizationalUnits".to_string(),
        expected: "a string or a list of strings",
    };
    let units = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(unit)) => vec![unit.clone()],
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| value.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(invalid()),
    };
    let units: Vec<String> = units.into_iter().filter(|unit| !unit.is_empty()).collect();
    Ok(Some(units).filter(|units| !units.is_empty()))
}

fn san_entries(additional_fields: &Map<String, Value>) -> Result<Vec<SanEntry>, ParameterError> {
    let Some(collection) = additional_fields.get(SAN_COLLECTION) else {
        return Ok(Vec::new());
    };
    let rows = match collection.get(SAN_VALUES) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(rows) => rows,
    };
    serde_json::from_value(rows.clone()).map_err(|_| ParameterError::InvalidType {
        name: format!("{SAN_COLLECTION}.{SAN_VALUES}"),
        expected: "a list of {typeName, value} entries",
    })
}
