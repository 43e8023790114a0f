//! The fixed catalog of room names.

use std::collections::HashSet;

use rand::Rng;

use crate::SELECTED_ROOMS;

/// Every name a room can have. Maps use [`SELECTED_ROOMS`] of these.
pub const ROOM_NAMES: [&str; 10] = [
    "Gallery", "Ballroom", "Billiard", "Library", "Office", "Armory", "Stables", "Chambers",
    "Kitchen", "Theater",
];

// The catalog must always leave at least one name free while selecting.
const _: () = assert!(ROOM_NAMES.len() > SELECTED_ROOMS);

/// Draws room names from [`ROOM_NAMES`] without repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomBank;

impl RoomBank {
    /// Returns `true` if `name` is one of the catalog names.
    pub fn contains(name: &str) -> bool {
        ROOM_NAMES.contains(&name)
    }

    /// Draws a uniformly random catalog name that is not in `excluding`.
    ///
    /// Draws are rejected and retried until a fresh one comes up. While
    /// fewer than [`SELECTED_ROOMS`] names are excluded there are always at
    /// least three candidates left, so the loop terminates.
    ///
    /// # Panics
    ///
    /// Panics if every catalog name is excluded.
    pub fn select_name<R: Rng + ?Sized>(
        rng: &mut R,
        excluding: &HashSet<&'static str>,
    ) -> &'static str {
        assert!(
            ROOM_NAMES.iter().any(|name| !excluding.contains(name)),
            "room bank exhausted: all {} names are already selected",
            ROOM_NAMES.len()
        );
        loop {
            let name = ROOM_NAMES[rng.random_range(0..ROOM_NAMES.len())];
            if !excluding.contains(name) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_select_name_skips_excluded() {
        let mut rng = StdRng::seed_from_u64(11);
        let excluding: HashSet<&'static str> = ROOM_NAMES[..9].iter().copied().collect();
        for _ in 0..20 {
            assert_eq!(RoomBank::select_name(&mut rng, &excluding), "Theater");
        }
    }

    #[test]
    fn test_select_name_comes_from_catalog() {
        let mut rng = StdRng::seed_from_u64(3);
        let name = RoomBank::select_name(&mut rng, &HashSet::new());
        assert!(RoomBank::contains(name));
    }

    #[test]
    #[should_panic(expected = "room bank exhausted")]
    fn test_select_name_panics_when_exhausted() {
        let mut rng = StdRng::seed_from_u64(0);
        let excluding: HashSet<&'static str> = ROOM_NAMES.iter().copied().collect();
        RoomBank::select_name(&mut rng, &excluding);
    }
}
