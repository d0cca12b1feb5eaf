//! Storage error type.
//!
//! Storage errors never reach the views: the stores log them and degrade to
//! "absent"/"empty" (reads) or leave the previous value in place (writes).
//! They exist so backends can report what went wrong and tests can assert it.

use thiserror::Error;

/// Errors reported by a [`StorageArea`](crate::StorageArea) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage area is disabled or could not be opened.
    #[error("storage area is unavailable")]
    Unavailable,

    /// Writing the value would exceed the area's quota.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded {
        /// Key that was being written.
        key: String,
    },

    /// Filesystem operation failed, including a value file that is not
    /// UTF-8.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
