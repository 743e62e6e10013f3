//! Conversions from the schema file model to AWS SDK types.
//!
//! String-valued fields like `AttributeType` and `KeyType` pass through
//! `From<&str>` unchecked; an invalid value reaches the service and comes
//! back as a ValidationException in the create diagnostic, the same way the
//! CLI would reject it. This tool does not validate schemas itself.

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, KeyType,
    LocalSecondaryIndex, Projection, ProjectionType, ProvisionedThroughput, ScalarAttributeType,
    StreamSpecification, StreamViewType, Tag,
};

use super::CreateTableError;
use crate::schema;

fn build_err(what: &str, e: impl std::fmt::Display) -> CreateTableError {
    CreateTableError {
        diagnostic: format!("Failed to build {}: {}", what, e),
    }
}

pub(crate) fn attribute_definitions(
    defs: &[schema::AttributeDefinition],
) -> Result<Vec<AttributeDefinition>, CreateTableError> {
    defs.iter()
        .map(|d| {
            AttributeDefinition::builder()
                .attribute_name(&d.attribute_name)
                .attribute_type(ScalarAttributeType::from(d.attribute_type.as_str()))
                .build()
                .map_err(|e| build_err("attribute definition", e))
        })
        .collect()
}

pub(crate) fn key_schema(
    elements: &[schema::KeySchemaElement],
) -> Result<Vec<KeySchemaElement>, CreateTableError> {
    elements
        .iter()
        .map(|k| {
            KeySchemaElement::builder()
                .attribute_name(&k.attribute_name)
                .key_type(KeyType::from(k.key_type.as_str()))
                .build()
                .map_err(|e| build_err("key schema element", e))
        })
        .collect()
}

pub(crate) fn billing_mode(mode: Option<&str>) -> Option<BillingMode> {
    mode.map(BillingMode::from)
}

pub(crate) fn provisioned_throughput(
    throughput: Option<&schema::ProvisionedThroughput>,
) -> Result<Option<ProvisionedThroughput>, CreateTableError> {
    throughput
        .map(|t| {
            ProvisionedThroughput::builder()
                .read_capacity_units(t.read_capacity_units)
                .write_capacity_units(t.write_capacity_units)
                .build()
                .map_err(|e| build_err("provisioned throughput", e))
        })
        .transpose()
}

fn projection(p: &schema::Projection) -> Projection {
    Projection::builder()
        .set_projection_type(p.projection_type.as_deref().map(ProjectionType::from))
        .set_non_key_attributes(p.non_key_attributes.clone())
        .build()
}

pub(crate) fn global_secondary_indexes(
    gsis: Option<&[schema::GlobalSecondaryIndex]>,
) -> Result<Option<Vec<GlobalSecondaryIndex>>, CreateTableError> {
    gsis.map(|indexes| {
        indexes
            .iter()
            .map(|gsi| {
                GlobalSecondaryIndex::builder()
                    .index_name(&gsi.index_name)
                    .set_key_schema(Some(key_schema(&gsi.key_schema)?))
                    .projection(projection(&gsi.projection))
                    .set_provisioned_throughput(provisioned_throughput(
                        gsi.provisioned_throughput.as_ref(),
                    )?)
                    .build()
                    .map_err(|e| build_err("global secondary index", e))
            })
            .collect()
    })
    .transpose()
}

pub(crate) fn local_secondary_indexes(
    lsis: Option<&[schema::LocalSecondaryIndex]>,
) -> Result<Option<Vec<LocalSecondaryIndex>>, CreateTableError> {
    lsis.map(|indexes| {
        indexes
            .iter()
            .map(|lsi| {
                LocalSecondaryIndex::builder()
                    .index_name(&lsi.index_name)
                    .set_key_schema(Some(key_schema(&lsi.key_schema)?))
                    .projection(projection(&lsi.projection))
                    .build()
                    .map_err(|e| build_err("local secondary index", e))
            })
            .collect()
    })
    .transpose()
}

pub(crate) fn stream_specification(
    spec: Option<&schema::StreamSpecification>,
) -> Result<Option<StreamSpecification>, CreateTableError> {
    spec.map(|s| {
        StreamSpecification::builder()
            .stream_enabled(s.stream_enabled)
            .set_stream_view_type(s.stream_view_type.as_deref().map(StreamViewType::from))
            .build()
            .map_err(|e| build_err("stream specification", e))
    })
    .transpose()
}

pub(crate) fn tags(tags: &[schema::Tag]) -> Result<Option<Vec<Tag>>, CreateTableError> {
    if tags.is_empty() {
        return Ok(None);
    }
    tags.iter()
        .map(|t| {
            Tag::builder()
                .key(&t.key)
                .value(&t.value)
                .build()
                .map_err(|e| build_err("tag", e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_attribute_definitions() {
        let defs = vec![
            schema::AttributeDefinition {
                attribute_name: "id".to_string(),
                attribute_type: "S".to_string(),
            },
            schema::AttributeDefinition {
                attribute_name: "count".to_string(),
                attribute_type: "N".to_string(),
            },
        ];
        let converted = attribute_definitions(&defs).unwrap();
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].attribute_name(), "id");
        assert_eq!(converted[0].attribute_type(), &ScalarAttributeType::S);
        assert_eq!(converted[1].attribute_type(), &ScalarAttributeType::N);
    }

    #[test]
    fn converts_key_schema() {
        let elements = vec![
            schema::KeySchemaElement {
                attribute_name: "id".to_string(),
                key_type: "HASH".to_string(),
            },
            schema::KeySchemaElement {
                attribute_name: "ts".to_string(),
                key_type: "RANGE".to_string(),
            },
        ];
        let converted = key_schema(&elements).unwrap();
        assert_eq!(converted[0].key_type(), &KeyType::Hash);
        assert_eq!(converted[1].key_type(), &KeyType::Range);
    }

    #[test]
    fn unknown_attribute_type_passes_through() {
        // Not validated locally; the service rejects it in its own words.
        let defs = vec![schema::AttributeDefinition {
            attribute_name: "id".to_string(),
            attribute_type: "BOGUS".to_string(),
        }];
        let converted = attribute_definitions(&defs).unwrap();
        assert_eq!(converted[0].attribute_type().as_str(), "BOGUS");
    }

    #[test]
    fn converts_billing_mode() {
        assert_eq!(
            billing_mode(Some("PAY_PER_REQUEST")),
            Some(BillingMode::PayPerRequest)
        );
        assert_eq!(billing_mode(None), None);
    }

    #[test]
    fn converts_throughput() {
        let t = schema::ProvisionedThroughput {
            read_capacity_units: 5,
            write_capacity_units: 10,
        };
        let converted = provisioned_throughput(Some(&t)).unwrap().unwrap();
        assert_eq!(converted.read_capacity_units(), 5);
        assert_eq!(converted.write_capacity_units(), 10);
        assert!(provisioned_throughput(None).unwrap().is_none());
    }

    #[test]
    fn converts_gsi_with_projection() {
        let gsis = vec![schema::GlobalSecondaryIndex {
            index_name: "by_email".to_string(),
            key_schema: vec![schema::KeySchemaElement {
                attribute_name: "email".to_string(),
                key_type: "HASH".to_string(),
            }],
            projection: schema::Projection {
                projection_type: Some("KEYS_ONLY".to_string()),
                non_key_attributes: None,
            },
            provisioned_throughput: None,
        }];
        let converted = global_secondary_indexes(Some(&gsis)).unwrap().unwrap();
        assert_eq!(converted[0].index_name(), "by_email");
        assert_eq!(
            converted[0].projection().unwrap().projection_type(),
            Some(&ProjectionType::KeysOnly)
        );
    }

    #[test]
    fn empty_tags_become_none() {
        assert!(tags(&[]).unwrap().is_none());
        let some = tags(&[schema::Tag {
            key: "env".to_string(),
            value: "dev".to_string(),
        }])
        .unwrap()
        .unwrap();
        assert_eq!(some[0].key(), "env");
        assert_eq!(some[0].value(), "dev");
    }
}
