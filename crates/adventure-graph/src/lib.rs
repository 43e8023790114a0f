//! Room graph model and random map construction.
//!
//! A map is a small undirected graph of named rooms. The [`GraphBuilder`]
//! produces one by rejection sampling: it keeps adding random edges until
//! every room has at least [`MIN_CONNECTIONS`] neighbours, while never
//! letting any room exceed [`MAX_CONNECTIONS`].
//!
//! # Key types
//!
//! - [`Graph`] — the arena that owns every [`Room`]
//! - [`Room`] — a named node with a [`Role`] and a list of neighbour ids
//! - [`RoomBank`] — the fixed catalog of candidate room names
//! - [`GraphBuilder`] — the constrained random generator
//! - [`GraphError`] — invariant violations on a built or loaded graph

mod bank;
mod builder;
mod error;
mod graph;
mod room;

pub use bank::{ROOM_NAMES, RoomBank};
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::Graph;
pub use room::{Role, Room, RoomId};

/// Number of rooms selected from the bank for every map.
pub const SELECTED_ROOMS: usize = 7;

/// Minimum number of connections every room must reach before the graph is full.
pub const MIN_CONNECTIONS: usize = 3;

/// Hard cap on connections per room.
pub const MAX_CONNECTIONS: usize = 6;
