//! Clock configuration.

use std::path::PathBuf;

/// Settings for a [`TimeService`](crate::TimeService).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockConfig {
    /// When set, every published time is also written to this file
    /// (one line, overwritten on each publish).
    pub mirror_file: Option<PathBuf>,
}

impl ClockConfig {
    pub fn with_mirror_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.mirror_file = Some(path.into());
        self
    }

    /// Drops an empty mirror path instead of failing on the first publish.
    pub fn validated(mut self) -> Self {
        if self
            .mirror_file
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            tracing::warn!("empty time mirror path, mirroring disabled");
            self.mirror_file = None;
        }
        self
    }
}
