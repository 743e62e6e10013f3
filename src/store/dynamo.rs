//! SDK-backed table store.

use std::path::Path;
use std::sync::Arc;

use aws_sdk_dynamodb::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use super::client::build_client;
use super::{CreateTableError, TableStore, convert};
use crate::errors::{FatalError, sdk_diagnostic};
use crate::schema;

/// DynamoDB-backed [`TableStore`].
///
/// Owns its Tokio runtime and blocks on it for every call, so the caller
/// sees the same fully-synchronous, one-call-at-a-time behavior the
/// CLI-subprocess original had.
pub struct DynamoStore {
    client: Client,
    runtime: Arc<Runtime>,
}

impl DynamoStore {
    /// Connect using the default credential chain, with an optional
    /// endpoint override for DynamoDB Local.
    pub fn connect(endpoint_url: Option<String>) -> Result<Self, FatalError> {
        let runtime = Runtime::new().map_err(FatalError::Runtime)?;
        let client = runtime.block_on(build_client(endpoint_url));
        Ok(DynamoStore {
            client,
            runtime: Arc::new(runtime),
        })
    }
}

impl TableStore for DynamoStore {
    fn check_access(&self) -> bool {
        debug!("Checking if DynamoDB can be accessed.");
        let result = self
            .runtime
            .block_on(self.client.list_tables().limit(1).send());
        match result {
            Ok(_) => true,
            Err(e) => {
                debug!("ListTables failed: {}", sdk_diagnostic(&e));
                false
            }
        }
    }

    fn table_exists(&self, name: &str) -> bool {
        debug!("Checking if table exists: {}", name);
        self.runtime
            .block_on(self.client.describe_table().table_name(name).send())
            .is_ok()
    }

    fn delete_table(&self, name: &str) -> bool {
        debug!("Deleting table: {}", name);
        match self
            .runtime
            .block_on(self.client.delete_table().table_name(name).send())
        {
            Ok(_) => true,
            Err(e) => {
                debug!("DeleteTable failed: {}", sdk_diagnostic(&e));
                false
            }
        }
    }

    fn create_table_from_file(&self, path: &Path) -> Result<(), CreateTableError> {
        debug!("Creating table from schema file: {}", path.display());

        let table = schema::load(path).map_err(|e| CreateTableError {
            diagnostic: e.to_string(),
        })?;

        let request = self
            .client
            .create_table()
            .table_name(&table.table_name)
            .set_attribute_definitions(Some(convert::attribute_definitions(
                &table.attribute_definitions,
            )?))
            .set_key_schema(Some(convert::key_schema(&table.key_schema)?))
            .set_billing_mode(convert::billing_mode(table.billing_mode.as_deref()))
            .set_provisioned_throughput(convert::provisioned_throughput(
                table.provisioned_throughput.as_ref(),
            )?)
            .set_global_secondary_indexes(convert::global_secondary_indexes(
                table.global_secondary_indexes.as_deref(),
            )?)
            .set_local_secondary_indexes(convert::local_secondary_indexes(
                table.local_secondary_indexes.as_deref(),
            )?)
            .set_stream_specification(convert::stream_specification(
                table.stream_specification.as_ref(),
            )?)
            .set_tags(convert::tags(&table.tags)?);

        self.runtime
            .block_on(request.send())
            .map(|_| ())
            .map_err(|e| CreateTableError {
                diagnostic: sdk_diagnostic(&e),
            })
    }
}
