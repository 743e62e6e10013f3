//! Per-file reconciliation.
//!
//! For one schema file, decides and executes one of skip, create, or
//! delete-then-create against the table store, given the force flag and the
//! store's current state for that table name. This is the whole decision
//! logic of the tool; everything else is plumbing around it.

use std::path::Path;

use tracing::{error, info};

use crate::config::Config;
use crate::errors::FatalError;
use crate::scan;
use crate::schema;
use crate::store::TableStore;

/// What happened to one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Table already exists and force was not set; nothing was done.
    Skipped,
    /// Table did not exist and was created.
    Created,
    /// Existing table was deleted and recreated under force.
    DeletedAndCreated,
    /// The create call failed; the diagnostic was surfaced to the user.
    FailedCreate,
    /// The force-delete failed. The create is still attempted afterwards,
    /// but the file is reported as failed regardless of its result.
    FailedDelete,
    /// No usable `TableName` in the file; the store was never called.
    FailedNameExtraction,
}

/// Reconcile one schema file against the store.
///
/// Issues exactly one existence query for files with a usable name, and at
/// most one delete plus one create. Progress and failures are reported on
/// the console as each step completes.
pub fn reconcile(store: &dyn TableStore, path: &Path, force: bool) -> ReconcileOutcome {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let table_name = schema::table_name_from_file(path);
    if table_name.is_empty() {
        eprintln!("  - Could not get table name from {}.", filename);
        error!("Could not get table name from {}.", filename);
        return ReconcileOutcome::FailedNameExtraction;
    }

    println!("  Processing {} table...", table_name);
    info!("Processing {} table...", table_name);

    let exists = store.table_exists(&table_name);

    if exists && !force {
        println!("  - Skipping {}, table already exists.", filename);
        info!("Skipping {}, table already exists.", filename);
        return ReconcileOutcome::Skipped;
    }

    let mut delete_failed = false;
    if exists && force {
        if store.delete_table(&table_name) {
            println!("  + Deleted table for {}.", filename);
            info!("Deleted table for {}.", filename);
        } else {
            // Observed behavior carried over from the original tool: a
            // failed delete does not stop the create attempt below.
            eprintln!("  - Error deleting table for {}.", filename);
            error!("Error deleting table for {}.", filename);
            delete_failed = true;
        }
    }

    match store.create_table_from_file(path) {
        Ok(()) => {
            println!("  + Created table for {}.", filename);
            info!("Created table for {}.", filename);
            if delete_failed {
                ReconcileOutcome::FailedDelete
            } else if exists {
                ReconcileOutcome::DeletedAndCreated
            } else {
                ReconcileOutcome::Created
            }
        }
        Err(err) => {
            eprintln!("  - Error creating table for {}:", filename);
            error!("Error creating table for {}", filename);
            for line in err.diagnostic.lines() {
                eprintln!("    {}", line);
            }
            if delete_failed {
                ReconcileOutcome::FailedDelete
            } else {
                ReconcileOutcome::FailedCreate
            }
        }
    }
}

/// Process every schema file in the configured directory, strictly in
/// order, one remote call at a time. Per-file failures never abort the run.
pub fn run(store: &dyn TableStore, config: &Config) -> Result<Vec<ReconcileOutcome>, FatalError> {
    println!(
        "Loading JSON files from directory: {}",
        config.schema_dir.display()
    );
    info!(
        "Loading JSON files from directory: {}",
        config.schema_dir.display()
    );

    let files = scan::schema_files(&config.schema_dir)?;

    println!();
    println!("Creating tables...");
    info!("Creating tables...");

    let mut outcomes = Vec::with_capacity(files.len());
    for file in &files {
        outcomes.push(reconcile(store, file, config.force));
    }

    println!();
    println!("Finished creating tables.");
    info!("Finished creating tables.");

    Ok(outcomes)
}
