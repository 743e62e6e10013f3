//! Error types for dynomigrate.
//!
//! Two layers:
//! - [`FatalError`] covers everything that aborts the run before any schema
//!   file is processed (bad configuration, logging init, connectivity).
//!   Per-file failures are not errors at this layer; they become
//!   [`crate::reconciler::ReconcileOutcome`] values and the run continues.
//! - [`sdk_diagnostic`] turns an AWS SDK error into the text shown to the
//!   user. Uses typed `SdkError` variant matching — no string parsing of
//!   debug output.

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// A failure that aborts the whole run.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("JSON directory path is required. Please specify with -p or --path.")]
    MissingPath,
    #[error("Unable to create application directory {0}: {1}")]
    AppDir(String, std::io::Error),
    #[error("Log initialization failed: {0}")]
    LogInit(String),
    #[error("Failed to create async runtime: {0}")]
    Runtime(std::io::Error),
    #[error("Unable to access DynamoDB.")]
    Connectivity,
    #[error("Could not open directory {0}: {1}")]
    DirectoryOpen(String, std::io::Error),
}

impl FatalError {
    /// Process exit code for this failure. All fatal paths exit 1, matching
    /// the original tool's EXIT_FAILURE sentinel.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Extract user-facing diagnostic text from an AWS SDK error.
///
/// For service errors, uses `ProvideErrorMetadata` to get the error code and
/// message. Dispatch and timeout failures get a short fixed description so
/// the user sees "could not reach DynamoDB" instead of a debug dump.
pub fn sdk_diagnostic<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::fmt::Debug + std::fmt::Display,
    R: std::fmt::Debug,
{
    match err {
        SdkError::DispatchFailure(dispatch) => {
            if dispatch.is_timeout() {
                "Connection timed out to DynamoDB. Check your network or endpoint.".to_string()
            } else {
                "Connection failed to DynamoDB. Check if the endpoint is reachable.".to_string()
            }
        }
        SdkError::TimeoutError(_) => {
            "Connection timed out to DynamoDB. Check your network or endpoint.".to_string()
        }
        SdkError::ServiceError(service_err) => {
            let meta = service_err.err().meta();
            match (meta.code(), meta.message()) {
                (Some(code), Some(message)) => format!("{}: {}", code, message),
                (Some(code), None) => code.to_string(),
                (None, Some(message)) => message.to_string(),
                (None, None) => service_err.err().to_string(),
            }
        }
        other => format!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors_exit_nonzero() {
        assert_eq!(FatalError::MissingPath.exit_code(), 1);
        assert_eq!(FatalError::Connectivity.exit_code(), 1);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(FatalError::DirectoryOpen("x".into(), io).exit_code(), 1);
    }

    #[test]
    fn missing_path_message_names_the_flag() {
        let msg = FatalError::MissingPath.to_string();
        assert!(msg.contains("-p or --path"));
    }
}
