//! Saving and loading whole map directories.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use adventure_graph::{Graph, RoomId};
use tracing::{debug, info, warn};

use crate::format::{ROOM_FILE_SUFFIX, decode_room, encode_room, room_file_name};
use crate::{StoreConfig, StoreError};

/// Reads and writes maps under the directory described by a [`StoreConfig`].
#[derive(Debug, Clone)]
pub struct RoomStore {
    config: StoreConfig,
}

impl RoomStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Creates a fresh map directory named `<prefix><suffix>` and returns its path.
    pub fn create_map_dir(&self, suffix: impl std::fmt::Display) -> Result<PathBuf, StoreError> {
        let dir = self.config.map_dir(suffix);
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        debug!(dir = %dir.display(), "map directory created");
        Ok(dir)
    }

    /// Writes one `<Name>_room` file per room into `dir`.
    pub fn save(&self, graph: &Graph, dir: &Path) -> Result<(), StoreError> {
        for room in graph.rooms() {
            let path = dir.join(room_file_name(room.name()));
            fs::write(&path, encode_room(graph, room))
                .map_err(|source| StoreError::Write { path: path.clone(), source })?;
        }
        info!(dir = %dir.display(), rooms = graph.len(), "map saved");
        Ok(())
    }

    /// Reads every `*_room` file in `dir` and resolves connections by name.
    ///
    /// Files are read in file-name order, so room ids are stable for a
    /// given directory. Degrees and roles are taken as written; only
    /// structural problems (unknown targets, self-loops, repeats, more than
    /// six connections) are rejected.
    pub fn load(&self, dir: &Path) -> Result<Graph, StoreError> {
        let mut files = Vec::new();
        let entries = fs::read_dir(dir).map_err(|source| StoreError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Read {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let is_room_file = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(ROOM_FILE_SUFFIX));
            if is_room_file && path.is_file() {
                files.push(path);
            }
        }
        if files.is_empty() {
            return Err(StoreError::Empty(dir.to_path_buf()));
        }
        files.sort();

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            let text = fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            let record = decode_room(&text).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
            if path.file_name().and_then(|n| n.to_str()) != Some(room_file_name(&record.name).as_str()) {
                warn!(path = %path.display(), name = %record.name, "room file name does not match room name");
            }
            records.push((path, record));
        }

        let mut graph = Graph::new();
        let mut ids: HashMap<String, RoomId> = HashMap::new();
        for (path, record) in &records {
            if ids.contains_key(&record.name) {
                return Err(StoreError::DuplicateRoom {
                    path: path.clone(),
                    name: record.name.clone(),
                });
            }
            let id = graph.add_room(record.name.clone(), record.role);
            ids.insert(record.name.clone(), id);
        }
        for (path, record) in &records {
            let from = ids[&record.name];
            for target in &record.connections {
                let to = *ids.get(target).ok_or_else(|| StoreError::UnknownConnection {
                    path: path.clone(),
                    name: target.clone(),
                })?;
                graph.add_edge(from, to)?;
            }
        }

        info!(dir = %dir.display(), rooms = graph.len(), "map loaded");
        Ok(graph)
    }

    /// The most recently modified directory under the root whose name
    /// starts with the configured prefix.
    pub fn newest_dir(&self) -> Result<PathBuf, StoreError> {
        let root = &self.config.root;
        let entries = fs::read_dir(root).map_err(|source| StoreError::Read {
            path: root.clone(),
            source,
        })?;

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries.flatten() {
            let matches_prefix = entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.starts_with(&self.config.prefix));
            if !matches_prefix {
                continue;
            }
            let Ok(meta) = entry.metadata() else { continue };
            if !meta.is_dir() {
                continue;
            }
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            let path = entry.path();
            let is_newer = match &newest {
                None => true,
                Some((time, best)) => (modified, &path) > (*time, best),
            };
            if is_newer {
                newest = Some((modified, path));
            }
        }

        newest
            .map(|(_, path)| path)
            .ok_or_else(|| StoreError::NoMapFound {
                root: root.clone(),
                prefix: self.config.prefix.clone(),
            })
    }

    /// Loads the map in [`newest_dir`](Self::newest_dir).
    pub fn load_newest(&self) -> Result<Graph, StoreError> {
        let dir = self.newest_dir()?;
        debug!(dir = %dir.display(), "newest map directory");
        self.load(&dir)
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
