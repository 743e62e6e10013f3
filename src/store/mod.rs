//! Remote table store capability.
//!
//! The reconciler never talks to DynamoDB directly; it goes through the
//! [`TableStore`] trait so tests can substitute a recording fake. The real
//! implementation is [`DynamoStore`], backed by the AWS SDK.

mod client;
mod convert;
mod dynamo;

pub use dynamo::DynamoStore;

use std::path::Path;

use thiserror::Error;

/// Table creation failure carrying the diagnostic text captured from the
/// store. The run loop echoes it to the user line by line; it is not parsed
/// or classified further.
#[derive(Debug, Error)]
#[error("{diagnostic}")]
pub struct CreateTableError {
    pub diagnostic: String,
}

/// Capability interface over the remote table store.
///
/// The existence, delete and access probes report plain success/failure,
/// mirroring the exit status of the AWS CLI commands the original tool
/// shelled out to.
pub trait TableStore {
    /// Connectivity and credential pre-check (ListTables). A `false` here
    /// aborts the whole run before any file is processed.
    fn check_access(&self) -> bool;

    /// Whether a table named `name` exists. Any query failure counts as
    /// absent.
    fn table_exists(&self, name: &str) -> bool;

    /// Delete the table named `name`. True on success.
    fn delete_table(&self, name: &str) -> bool;

    /// Create the table described by the schema file at `path`.
    fn create_table_from_file(&self, path: &Path) -> Result<(), CreateTableError>;
}
