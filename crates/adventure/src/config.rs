//! Process configuration, read from the environment.

use adventure_clock::ClockConfig;
use adventure_store::StoreConfig;
use tracing::warn;

/// Environment variable names.
pub(crate) mod env {
    pub const ROOT: &str = "ADVENTURE_ROOT";
    pub const PREFIX: &str = "ADVENTURE_PREFIX";
    pub const SEED: &str = "ADVENTURE_SEED";
    pub const TIME_FILE: &str = "ADVENTURE_TIME_FILE";
}

/// File the player mirrors the time into unless told otherwise.
pub const DEFAULT_TIME_FILE: &str = "currentTime.txt";

/// Everything both binaries can be configured with.
///
/// Neither binary takes flags; overrides come from the environment:
///
/// | Variable              | Effect                                            |
/// |-----------------------|---------------------------------------------------|
/// | `ADVENTURE_ROOT`      | directory holding map directories (default `.`)   |
/// | `ADVENTURE_PREFIX`    | map directory prefix (default `adventure.rooms.`) |
/// | `ADVENTURE_SEED`      | fixed RNG seed for `buildrooms`                   |
/// | `ADVENTURE_TIME_FILE` | time mirror file; empty disables it               |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventureConfig {
    pub store: StoreConfig,
    pub clock: ClockConfig,
    /// Seed for map generation. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            clock: ClockConfig::default().with_mirror_file(DEFAULT_TIME_FILE),
            seed: None,
        }
    }
}

impl AdventureConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values
    /// are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(root) = lookup(env::ROOT) {
            config.store = config.store.with_root(root);
        }
        if let Some(prefix) = lookup(env::PREFIX) {
            config.store = config.store.with_prefix(prefix);
        }
        if let Some(raw) = lookup(env::SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => warn!(value = %raw, error = %e, "ignoring invalid {}", env::SEED),
            }
        }
        if let Some(path) = lookup(env::TIME_FILE) {
            config.clock = ClockConfig::default().with_mirror_file(path);
        }
        config.validated()
    }

    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validated(mut self) -> Self {
        self.store = self.store.validated();
        self.clock = self.clock.validated();
        self
    }
}
