//! Schema directory enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::FatalError;

/// List the schema files in `dir`.
///
/// Only entries whose name ends in the literal, case-sensitive `.json`
/// suffix are considered; `Foo.JSON` and `table.json5` are excluded. The
/// result is sorted by file name so runs are deterministic (the underlying
/// OS enumeration order is not).
pub fn schema_files(dir: &Path) -> Result<Vec<PathBuf>, FatalError> {
    let entries =
        fs::read_dir(dir).map_err(|e| FatalError::DirectoryOpen(dir.display().to_string(), e))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let name = path.file_name()?.to_str()?;
            if is_schema_file(name) {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    files.sort();
    debug!("Found {} schema files in {}", files.len(), dir.display());
    Ok(files)
}

/// Exact 5-character suffix check, matching the original tool.
fn is_schema_file(name: &str) -> bool {
    name.len() > 5 && name.ends_with(".json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn suffix_check_is_exact_and_case_sensitive() {
        assert!(is_schema_file("orders.json"));
        assert!(is_schema_file("a.json"));
        assert!(!is_schema_file("Foo.JSON"));
        assert!(!is_schema_file("table.json5"));
        assert!(!is_schema_file("orders.Json"));
        // A bare ".json" has no stem; the original's length check excludes it.
        assert!(!is_schema_file(".json"));
        assert!(!is_schema_file("json"));
    }

    #[test]
    fn scans_only_json_files_sorted() {
        let dir = tempdir().unwrap();
        for name in ["users.json", "orders.json", "Foo.JSON", "notes.txt", "x.json5"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = schema_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["orders.json", "users.json"]);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let err = schema_files(Path::new("/nonexistent/schemas")).unwrap_err();
        assert!(matches!(err, FatalError::DirectoryOpen(..)));
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let dir = tempdir().unwrap();
        assert!(schema_files(dir.path()).unwrap().is_empty());
    }
}
