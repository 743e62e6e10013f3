//! Schema file model.
//!
//! A schema file is the same JSON document the AWS CLI accepts for
//! `create-table --cli-input-json`: a top-level object with `TableName`,
//! `AttributeDefinitions`, `KeySchema` and the optional billing, index,
//! stream and tag sections.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// One table definition, deserialized from a schema file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableSchema {
    pub table_name: String,
    #[serde(default)]
    pub attribute_definitions: Vec<AttributeDefinition>,
    #[serde(default)]
    pub key_schema: Vec<KeySchemaElement>,
    pub billing_mode: Option<String>,
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    pub global_secondary_indexes: Option<Vec<GlobalSecondaryIndex>>,
    pub local_secondary_indexes: Option<Vec<LocalSecondaryIndex>>,
    pub stream_specification: Option<StreamSpecification>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub attribute_name: String,
    /// `S`, `N` or `B`.
    pub attribute_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    pub attribute_name: String,
    /// `HASH` or `RANGE`.
    pub key_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndex {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    pub projection: Projection,
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalSecondaryIndex {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    pub projection: Projection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    pub projection_type: Option<String>,
    pub non_key_attributes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamSpecification {
    pub stream_enabled: bool,
    pub stream_view_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Failure to load a schema file for table creation.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("cannot read {0}: {1}")]
    Read(String, std::io::Error),
    #[error("invalid schema JSON in {0}: {1}")]
    Parse(String, serde_json::Error),
}

/// Load and deserialize a full schema file.
pub fn load(path: &Path) -> Result<TableSchema, SchemaError> {
    let text = fs::read_to_string(path)
        .map_err(|e| SchemaError::Read(path.display().to_string(), e))?;
    serde_json::from_str(&text).map_err(|e| SchemaError::Parse(path.display().to_string(), e))
}

/// Extract the `TableName` attribute from a schema file.
///
/// Never fails: an unreadable file, malformed JSON, or a missing or
/// non-string `TableName` all degrade to the empty-string sentinel, which
/// the reconciler treats as a name-extraction failure without touching the
/// remote store.
pub fn table_name_from_file(path: &Path) -> String {
    debug!("Getting table name from JSON: {}", path.display());

    let Ok(text) = fs::read_to_string(path) else {
        debug!("Table name extraction failed: unreadable file.");
        return String::new();
    };
    let Ok(root) = serde_json::from_str::<serde_json::Value>(&text) else {
        debug!("Table name extraction failed: malformed JSON.");
        return String::new();
    };

    match root.get("TableName").and_then(|v| v.as_str()) {
        Some(name) => {
            debug!("Extracted table name: {}", name);
            name.to_string()
        }
        None => {
            debug!("Table name extraction failed: missing or non-string TableName.");
            String::new()
        }
    }
}
