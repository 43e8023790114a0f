//! Error types for the storage layer.

use std::path::PathBuf;

use adventure_graph::GraphError;

use crate::format::DecodeError;

/// Errors that can occur while writing or reading a map directory.
///
/// All of these are fatal to the process that hits them; nothing here is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The map directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or directory could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A room file could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A room file does not follow the expected line layout.
    #[error("malformed room file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Two room files in one directory declare the same room name.
    #[error("{path} redefines room {name:?}")]
    DuplicateRoom { path: PathBuf, name: String },

    /// A room file names a connection that has no file of its own.
    #[error("{path} connects to unknown room {name:?}")]
    UnknownConnection { path: PathBuf, name: String },

    /// The map directory holds no room files.
    #[error("no room files in {0}")]
    Empty(PathBuf),

    /// No directory under `root` starts with `prefix`.
    #[error("no map directory matching {prefix:?} in {root}")]
    NoMapFound { root: PathBuf, prefix: String },

    /// The loaded rooms could not be assembled into a graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
