//! On-demand wall-clock service for the adventure player.
//!
//! Two actors share a single time slot behind a [`tokio::sync::Mutex`]:
//!
//! - the **main actor** (whoever owns the [`TimeService`]) holds the lock
//!   at all times, except while a time request is in flight;
//! - a **worker task** is spawned ahead of each request. It blocks on the
//!   lock, and once main lets go it reads the local time, publishes it,
//!   and exits.
//!
//! # Protocol
//!
//! ```text
//! main:   hold ── release ── join(worker) ── lock ── spawn next ── read ── hold
//! worker:   (blocked on lock) ── lock ── now() ── publish ── unlock ── exit
//! ```
//!
//! Main waits for the worker task to *finish*, not merely for the lock to
//! be free, so the value it reads is always the one computed for this
//! request. At most one worker exists at a time and workers are never
//! cancelled.

mod config;
mod error;
mod service;

pub use config::ClockConfig;
pub use error::ClockError;
pub use service::{TIME_FORMAT, TimeService, TimeStamp, format_time};
