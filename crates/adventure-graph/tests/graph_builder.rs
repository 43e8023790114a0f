//! Integration tests for map generation.
//!
//! The structural properties are checked over many seeds with proptest;
//! the fullness scenario replays a fixed seed edge by edge.

use std::collections::HashSet;

use adventure_graph::{
    Graph, GraphBuilder, MAX_CONNECTIONS, MIN_CONNECTIONS, ROOM_NAMES, Role, RoomId,
    SELECTED_ROOMS,
};
use proptest::prelude::*;

// =========================================================================
// Helpers
// =========================================================================

fn every_room_has_min_degree(graph: &Graph) -> bool {
    graph
        .rooms()
        .iter()
        .all(|room| room.connect_count() >= MIN_CONNECTIONS)
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_built_map_passes_validation(seed in any::<u64>()) {
        let graph = GraphBuilder::from_seed(seed).build();
        prop_assert!(graph.validate().is_ok(), "{:?}", graph.validate());
    }

    #[test]
    fn prop_degree_stays_in_bounds(seed in any::<u64>()) {
        let graph = GraphBuilder::from_seed(seed).build();
        for room in graph.rooms() {
            let degree = room.connect_count();
            prop_assert!(
                (MIN_CONNECTIONS..=MAX_CONNECTIONS).contains(&degree),
                "{} has {} connections", room.name(), degree
            );
        }
    }

    #[test]
    fn prop_connections_are_symmetric(seed in any::<u64>()) {
        let graph = GraphBuilder::from_seed(seed).build();
        for room in graph.rooms() {
            for &other in room.connections() {
                let back = graph.room(other).unwrap();
                prop_assert!(back.is_connected_to(room.id()));
            }
        }
    }

    #[test]
    fn prop_no_self_loops_or_repeats(seed in any::<u64>()) {
        let graph = GraphBuilder::from_seed(seed).build();
        for room in graph.rooms() {
            prop_assert!(!room.is_connected_to(room.id()));
            let names = graph.connection_names(room.id());
            let unique: HashSet<_> = names.iter().collect();
            prop_assert_eq!(unique.len(), names.len());
        }
    }

    #[test]
    fn prop_exactly_one_start_and_end(seed in any::<u64>()) {
        let graph = GraphBuilder::from_seed(seed).build();
        let starts = graph.rooms().iter().filter(|r| r.role() == Role::Start).count();
        let ends = graph.rooms().iter().filter(|r| r.role() == Role::End).count();
        prop_assert_eq!(starts, 1);
        prop_assert_eq!(ends, 1);
        prop_assert_ne!(graph.start().unwrap().id(), graph.end().unwrap().id());
    }

    #[test]
    fn prop_names_distinct_and_from_catalog(seed in any::<u64>()) {
        let graph = GraphBuilder::from_seed(seed).build();
        let names: HashSet<_> = graph.rooms().iter().map(|r| r.name()).collect();
        prop_assert_eq!(names.len(), SELECTED_ROOMS);
        prop_assert!(names.iter().all(|n| ROOM_NAMES.contains(n)));
    }
}

// =========================================================================
// Fullness scenario
// =========================================================================

#[test]
fn test_is_full_flips_exactly_when_all_rooms_reach_min_degree() {
    let mut builder = GraphBuilder::from_seed(2020);
    let mut graph = builder.select_rooms();
    assert_eq!(
        graph.ids().collect::<Vec<_>>(),
        (0..SELECTED_ROOMS).map(RoomId).collect::<Vec<_>>()
    );
    assert!(!graph.is_full());

    let mut steps = 0;
    while !every_room_has_min_degree(&graph) {
        assert!(!graph.is_full(), "reported full after {steps} edges");
        builder.add_random_connection(&mut graph);
        steps += 1;
    }
    assert!(graph.is_full(), "not full once every room has degree >= 3");
    // Seven rooms of degree three need at least eleven edges.
    assert!(steps >= (SELECTED_ROOMS * MIN_CONNECTIONS).div_ceil(2));
}

#[test]
fn test_fill_connections_stops_as_soon_as_full() {
    let mut builder = GraphBuilder::from_seed(77);
    let mut graph = builder.select_rooms();
    let added = builder.fill_connections(&mut graph);
    assert!(graph.is_full());

    let total: usize = graph.rooms().iter().map(|r| r.connect_count()).sum();
    assert_eq!(total, added * 2);
    // The last edge must have been the one that completed fullness, so at
    // least one of the rooms is still at exactly the minimum.
    assert!(graph
        .rooms()
        .iter()
        .any(|r| r.connect_count() == MIN_CONNECTIONS));
}

#[test]
fn test_different_seeds_usually_differ() {
    let maps: HashSet<Vec<String>> = (0..20)
        .map(|seed| {
            GraphBuilder::from_seed(seed)
                .build()
                .rooms()
                .iter()
                .map(|r| r.name().to_string())
                .collect()
        })
        .collect();
    assert!(maps.len() > 1);
}
