//! Where maps live on disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Location and naming of map directories.
///
/// Each generated map goes into `root/<prefix><suffix>`; the loader picks
/// the newest directory under `root` whose name starts with `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory that holds the map directories.
    pub root: PathBuf,
    /// Name prefix shared by every map directory.
    pub prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            prefix: Self::DEFAULT_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    pub const DEFAULT_PREFIX: &'static str = "adventure.rooms.";

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces values that would make the store unusable.
    ///
    /// An empty prefix would match every entry under `root`, and a prefix
    /// containing a path separator can never match a directory name.
    pub fn validated(mut self) -> Self {
        if self.prefix.is_empty() || self.prefix.contains(['/', '\\']) {
            warn!(prefix = %self.prefix, "invalid map prefix, using default");
            self.prefix = Self::DEFAULT_PREFIX.to_string();
        }
        if self.root.as_os_str().is_empty() {
            self.root = PathBuf::from(".");
        }
        self
    }

    /// Path of the map directory with the given suffix.
    pub fn map_dir(&self, suffix: impl std::fmt::Display) -> PathBuf {
        self.root.join(format!("{}{}", self.prefix, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.prefix, "adventure.rooms.");
    }

    #[test]
    fn test_map_dir_joins_prefix_and_suffix() {
        let config = StoreConfig::default().with_root("/tmp/maps").with_prefix("me.rooms.");
        assert_eq!(config.map_dir(1234), PathBuf::from("/tmp/maps/me.rooms.1234"));
    }

    #[test]
    fn test_validated_restores_bad_prefix() {
        let config = StoreConfig::default().with_prefix("").validated();
        assert_eq!(config.prefix, StoreConfig::DEFAULT_PREFIX);
        let config = StoreConfig::default().with_prefix("a/b").validated();
        assert_eq!(config.prefix, StoreConfig::DEFAULT_PREFIX);
    }

    #[test]
    fn test_validated_keeps_good_values() {
        let config = StoreConfig::default().with_prefix("x.").with_root("maps").validated();
        assert_eq!(config.prefix, "x.");
        assert_eq!(config.root, PathBuf::from("maps"));
    }
}
