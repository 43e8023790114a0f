//! Generates a random room map in a fresh `<prefix><pid>` directory.

use std::process::ExitCode;

use adventure::{AdventureConfig, generate, init_tracing};

fn main() -> ExitCode {
    init_tracing();
    let config = AdventureConfig::from_env();

    match generate(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "map generation failed");
            eprintln!("buildrooms: {e}");
            ExitCode::FAILURE
        }
    }
}
