//! Driver error classification shared by the document-store adapters.

use std::future::Future;
use std::time::Duration;

use mongodb::error::{CommandError, Error as DriverError, ErrorKind, WriteError, WriteFailure};
use tracing::debug;

use crate::domain::ports::BookRepositoryError;

/// Server code for a unique index violation.
pub(crate) const DUPLICATE_KEY_CODE: i32 = 11000;
/// Server code answered when creating a collection that already exists.
pub(crate) const NAMESPACE_EXISTS_CODE: i32 = 48;

/// Server error code carried by a command or single-write failure.
pub(crate) fn server_code(error: &DriverError) -> Option<i32> {
    match error.kind.as_ref() {
        ErrorKind::Command(CommandError { code, .. }) => Some(*code),
        ErrorKind::Write(WriteFailure::WriteError(WriteError { code, .. })) => Some(*code),
        _ => None,
    }
}

/// Whether the deployment could not be reached at all.
pub(crate) fn is_unreachable(error: &DriverError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Authentication { .. }
    )
}

/// Map a driver failure onto the repository port error.
pub(crate) fn map_driver_error(error: DriverError, operation: &str) -> BookRepositoryError {
    debug!(%operation, error = %error, "document store operation failed");
    if server_code(&error) == Some(DUPLICATE_KEY_CODE) {
        return BookRepositoryError::duplicate(error.to_string());
    }
    if is_unreachable(&error) {
        return BookRepositoryError::connection(error.to_string());
    }
    BookRepositoryError::query(error.to_string())
}

/// Run one store round trip under `deadline`.
pub(crate) async fn with_deadline<T, F>(
    deadline: Duration,
    operation: &str,
    fut: F,
) -> Result<T, BookRepositoryError>
where
    F: Future<Output = Result<T, DriverError>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(|err| map_driver_error(err, operation)),
        Err(_) => Err(BookRepositoryError::timeout(operation)),
    }
}
