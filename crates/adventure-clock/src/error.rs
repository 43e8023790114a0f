//! Error types for the clock worker.

use std::path::PathBuf;

/// Failures of the time worker. There is no fallback for any of them:
/// the player treats an unavailable clock as fatal.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The worker task panicked or was torn down before publishing.
    #[error("time worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// The worker could not write the mirror file.
    #[error("cannot publish time to {path}: {source}")]
    Publish {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker finished without leaving a value in the slot.
    #[error("time worker finished without publishing")]
    NothingPublished,

    /// An earlier request failed; the service no longer hands out times.
    #[error("time service stopped after an earlier failure")]
    Stopped,
}
