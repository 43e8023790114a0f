//! # Adventure
//!
//! A tiny text adventure over a randomly generated map of seven rooms.
//!
//! Two binaries share this library:
//!
//! - `buildrooms` generates a map and writes it to a fresh directory
//!   ([`generate`]).
//! - `adventure` loads the newest map and lets the player walk from the
//!   start room to the end room ([`play`]), asking for the time along
//!   the way if they like.

mod config;
mod error;
mod game;
mod logging;
mod runner;

pub use config::AdventureConfig;
pub use error::AdventureError;
pub use game::{GameLoop, PROMPT, Step, Summary, TIME_COMMAND, step};
pub use logging::init_tracing;
pub use runner::{generate, play};

pub mod prelude {
    pub use adventure_clock::{ClockConfig, TimeService};
    pub use adventure_graph::{Graph, GraphBuilder, Role, Room, RoomId};
    pub use adventure_store::{RoomStore, StoreConfig};

    pub use crate::{AdventureConfig, AdventureError, GameLoop, Step, Summary};
}
