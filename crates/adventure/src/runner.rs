//! Entry points behind the two binaries.

use std::path::PathBuf;

use adventure_clock::TimeService;
use adventure_graph::GraphBuilder;
use adventure_store::RoomStore;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use crate::{AdventureConfig, AdventureError, GameLoop, Summary};

/// Builds a random map and saves it under `<prefix><pid>`.
///
/// Returns the directory that was written.
pub fn generate(config: &AdventureConfig) -> Result<PathBuf, AdventureError> {
    let graph = match config.seed {
        Some(seed) => GraphBuilder::from_seed(seed).build(),
        None => GraphBuilder::from_entropy().build(),
    };
    graph.validate()?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(&graph) {
            Ok(json) => debug!(graph = %json, "generated map"),
            Err(e) => debug!(error = %e, "cannot render map"),
        }
    }

    let store = RoomStore::new(config.store.clone());
    let dir = store.create_map_dir(std::process::id())?;
    store.save(&graph, &dir)?;
    info!(dir = %dir.display(), seed = ?config.seed, "map generated");
    Ok(dir)
}

/// Loads the newest map and plays it to the end over `input`/`output`.
///
/// The time service lives exactly as long as the game.
pub async fn play<R, W>(
    config: &AdventureConfig,
    input: R,
    output: W,
) -> Result<Summary, AdventureError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let store = RoomStore::new(config.store.clone());
    let graph = store.load_newest()?;
    let mut game = GameLoop::new(&graph)?;

    let mut clock = TimeService::start(config.clock.clone()).await;
    let result = game.run(input, output, &mut clock).await;
    let stopped = clock.shutdown().await;

    let summary = result?;
    stopped?;
    Ok(summary)
}
