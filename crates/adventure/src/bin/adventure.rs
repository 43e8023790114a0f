//! Plays the most recently generated room map on the terminal.

use std::process::ExitCode;

use adventure::{AdventureConfig, init_tracing, play};
use tokio::io::{BufReader, stdin, stdout};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let config = AdventureConfig::from_env();

    match play(&config, BufReader::new(stdin()), stdout()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            eprintln!("adventure: {e}");
            ExitCode::FAILURE
        }
    }
}
