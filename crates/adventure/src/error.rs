//! Unified error type for the adventure binaries.

use adventure_clock::ClockError;
use adventure_graph::GraphError;
use adventure_store::StoreError;

/// Top-level error that wraps every crate-specific error.
///
/// Bad player input is not an error at all; it is handled inside the
/// game loop. Everything that reaches this type ends the process.
#[derive(Debug, thiserror::Error)]
pub enum AdventureError {
    /// A map invariant does not hold (e.g. no start room).
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Writing or reading the map directory failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The time worker failed.
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// Terminal I/O failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input closed before the end room was reached.
    #[error("input closed before reaching the end room")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_graph_error() {
        let err: AdventureError = GraphError::MissingRole(adventure_graph::Role::Start).into();
        assert!(matches!(err, AdventureError::Graph(_)));
        assert!(err.to_string().contains("START_ROOM"));
    }

    #[test]
    fn test_from_store_error() {
        let err: AdventureError = StoreError::Empty("maps".into()).into();
        assert!(matches!(err, AdventureError::Store(_)));
        assert!(err.to_string().contains("maps"));
    }

    #[test]
    fn test_from_clock_error() {
        let err: AdventureError = ClockError::NothingPublished.into();
        assert!(matches!(err, AdventureError::Clock(_)));
    }

    #[test]
    fn test_from_io_error() {
        let err: AdventureError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, AdventureError::Io(_)));
    }
}
