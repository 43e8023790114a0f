//! Constrained random map generation.
//!
//! The builder works in three phases, each of which is also exposed on its
//! own so tests can observe the intermediate graph:
//!
//! ```text
//! select_rooms → fill_connections → assign_start_end
//! ```
//!
//! Every phase is plain rejection sampling: draw a random candidate, throw
//! it away if it breaks a constraint, draw again.
//!
//! ## Termination
//!
//! Rejection loops only end if an accepted candidate always exists. For
//! [`GraphBuilder::fill_connections`] with [`SELECTED_ROOMS`] = 7 rooms and
//! at most [`MAX_CONNECTIONS`](crate::MAX_CONNECTIONS) = 6 edges per room:
//!
//! 1. While the graph is not full, some room has fewer than 3 edges, so the
//!    draw for `a` (any room below 6) has at least one winner.
//! 2. Once `a` has fewer than 6 edges, at least one of the other 6 rooms is
//!    not yet connected to it. That room cannot have 6 edges either, since
//!    a room with 6 edges is connected to every other room, `a` included.
//!    So the draw for `b` has a winner too.
//! 3. Every pass of the outer loop adds one undirected edge, and a
//!    7-room graph holds at most 21. The outer loop ends after at most 21
//!    passes.
//!
//! Each inner draw succeeds with probability at least 1/7 per attempt, so
//! the expected number of redraws is bounded. [`GraphBuilder::select_rooms`]
//! and [`GraphBuilder::assign_start_end`] follow the same pattern: the bank
//! holds more names than are selected, and there are always two distinct
//! rooms to pick from.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::{Graph, Role, RoomBank, RoomId, SELECTED_ROOMS};

/// Builds random maps from a source of randomness.
///
/// Generic over the RNG so callers can pass a seeded generator and get a
/// reproducible map.
#[derive(Debug)]
pub struct GraphBuilder<R> {
    rng: R,
}

impl GraphBuilder<StdRng> {
    /// Builder seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Builder with a fixed seed. The same seed always yields the same map.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GraphBuilder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Runs all three phases and returns a finished map.
    pub fn build(&mut self) -> Graph {
        let mut graph = self.select_rooms();
        let edges = self.fill_connections(&mut graph);
        let (start, end) = self.assign_start_end(&mut graph);
        debug!(
            rooms = graph.len(),
            edges,
            start = graph.rooms()[start.index()].name(),
            end = graph.rooms()[end.index()].name(),
            "map built"
        );
        graph
    }

    /// Creates [`SELECTED_ROOMS`] unconnected `Mid` rooms with distinct
    /// names drawn from the bank. Ids run from 0 in draw order.
    pub fn select_rooms(&mut self) -> Graph {
        let mut graph = Graph::new();
        let mut taken = HashSet::with_capacity(SELECTED_ROOMS);
        for _ in 0..SELECTED_ROOMS {
            let name = RoomBank::select_name(&mut self.rng, &taken);
            taken.insert(name);
            graph.add_room(name, Role::Mid);
        }
        graph
    }

    /// Adds random edges until [`Graph::is_full`] holds. Returns the number
    /// of undirected edges added.
    pub fn fill_connections(&mut self, graph: &mut Graph) -> usize {
        let mut added = 0;
        while !graph.is_full() {
            self.add_random_connection(graph);
            added += 1;
        }
        added
    }

    /// Adds one random undirected edge and returns its endpoints.
    ///
    /// Room `a` is redrawn until it has spare capacity. Room `b` is redrawn
    /// until it has spare capacity, differs from `a`, and is not already
    /// connected to it. With seven rooms any two unconnected rooms both
    /// have at most five edges, so once `a` is chosen some `b` always
    /// qualifies.
    ///
    /// # Panics
    ///
    /// Panics if no eligible pair exists at all. That cannot happen for a
    /// graph that is not yet full and means the construction logic is broken.
    pub fn add_random_connection(&mut self, graph: &mut Graph) -> (RoomId, RoomId) {
        assert!(
            graph.has_eligible_pair(),
            "construction invariant violated: no eligible edge left in a graph that is not full"
        );

        let a = loop {
            let candidate = self.random_room(graph);
            if graph.rooms()[candidate.index()].has_capacity() {
                break candidate;
            }
        };
        let b = loop {
            let candidate = self.random_room(graph);
            if graph.is_eligible_pair(a, candidate) {
                break candidate;
            }
        };

        graph.connect_pair(a, b);
        trace!(%a, %b, "connected");
        (a, b)
    }

    /// Marks one random room `Start` and a different random room `End`.
    pub fn assign_start_end(&mut self, graph: &mut Graph) -> (RoomId, RoomId) {
        assert!(graph.len() >= 2, "a map needs at least two rooms");
        let start = self.random_room(graph);
        let end = loop {
            let candidate = self.random_room(graph);
            if candidate != start {
                break candidate;
            }
        };
        graph.set_role(start, Role::Start);
        graph.set_role(end, Role::End);
        (start, end)
    }

    fn random_room(&mut self, graph: &Graph) -> RoomId {
        RoomId(self.rng.random_range(0..graph.len()))
    }
}
