mod common;

use proptest::prelude::*;
use starsector_lib::{
    LocalOffset, SearchStatus, SectorCoordinates, StarSystemCoordinates, StellarPathfinder,
};

use common::{corridor, empty_galaxy, place};

#[test]
fn corridor_route_goes_through_relay() {
    let corridor = corridor();
    let mut pathfinder = StellarPathfinder::new(&corridor.galaxy);
    pathfinder
        .init(corridor.start, corridor.target, 6.0)
        .expect("init");

    while pathfinder.update().expect("update") == SearchStatus::Searching {}

    assert!(pathfinder.has_found_path());
    assert_eq!(
        pathfinder.path().expect("path"),
        vec![corridor.start, corridor.intermediate, corridor.target]
    );
    assert_eq!(pathfinder.iterations(), 3);
    assert_eq!(pathfinder.path_distance(), Some(10.0));
    assert_eq!(pathfinder.progress(), 1.0);
}

#[test]
fn start_equal_to_target_finishes_in_one_update() {
    let corridor = corridor();
    let mut pathfinder = StellarPathfinder::new(&corridor.galaxy);
    pathfinder
        .init(corridor.start, corridor.start, 6.0)
        .expect("init");

    assert_eq!(pathfinder.update().expect("update"), SearchStatus::Found);
    assert!(pathfinder.has_found_path());
    assert_eq!(pathfinder.path().expect("path"), vec![corridor.start]);
    assert_eq!(pathfinder.iterations(), 1);
    assert_eq!(pathfinder.progress(), 1.0);
}

#[test]
fn unreachable_target_exhausts_the_reachable_cluster() {
    let mut galaxy = empty_galaxy();
    let start = place(&mut galaxy, "Start", (0, 0, 0), (0.0, 0.0, 0.0));
    place(&mut galaxy, "Above", (0, 0, 0), (0.0, 0.4, 0.0));
    place(&mut galaxy, "Below", (0, 0, 0), (0.0, -0.4, 0.0));
    place(&mut galaxy, "Relay", (1, 0, 0), (0.0, 0.0, 0.0));
    let target = place(&mut galaxy, "Far", (4, 0, 0), (0.0, 0.0, 0.0));

    let mut pathfinder = StellarPathfinder::new(&galaxy);
    pathfinder.init(start, target, 6.0).expect("init");

    let mut updates = 0;
    while pathfinder.update().expect("update") == SearchStatus::Searching {
        updates += 1;
        assert!(updates < 100, "search should terminate");
    }

    assert_eq!(pathfinder.status(), SearchStatus::Exhausted);
    assert!(!pathfinder.has_found_path());
    assert_eq!(pathfinder.iterations(), 4);
    assert_eq!(pathfinder.open_len(), 0);
    assert!(pathfinder.path().is_err());

    // Exhaustion is terminal.
    assert_eq!(pathfinder.update().expect("update"), SearchStatus::Exhausted);
    assert_eq!(pathfinder.iterations(), 4);
}

#[test]
fn prefers_more_hops_when_they_are_shorter() {
    let mut galaxy = empty_galaxy();
    // Start at x=0, target at x=9. A single waypoint above the axis costs
    // about 9.85 ly; two on-axis waypoints cost exactly 9 ly.
    let start = place(&mut galaxy, "Start", (0, 0, 0), (0.0, 0.0, 0.0));
    let _detour = place(&mut galaxy, "Detour", (1, 0, 0), (-0.1, 0.4, 0.0));
    let first = place(&mut galaxy, "First", (1, 0, 0), (-0.4, 0.0, 0.0));
    let second = place(&mut galaxy, "Second", (1, 0, 0), (0.2, 0.0, 0.0));
    let target = place(&mut galaxy, "Target", (2, 0, 0), (-0.2, 0.0, 0.0));

    let mut pathfinder = StellarPathfinder::new(&galaxy);
    pathfinder.init(start, target, 5.0).expect("init");
    while pathfinder.update().expect("update") == SearchStatus::Searching {}

    assert_eq!(
        pathfinder.path().expect("path"),
        vec![start, first, second, target]
    );
    let distance = pathfinder.path_distance().expect("found");
    assert!((distance - 9.0).abs() < 1e-9, "distance {distance}");
}

#[test]
fn progress_stays_within_bounds_during_search() {
    let corridor = corridor();
    let mut pathfinder = StellarPathfinder::new(&corridor.galaxy);
    pathfinder
        .init(corridor.start, corridor.target, 6.0)
        .expect("init");
    assert_eq!(pathfinder.progress(), 0.0);

    while pathfinder.update().expect("update") == SearchStatus::Searching {
        let progress = pathfinder.progress();
        assert!((0.0..=1.0).contains(&progress));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn progress_is_always_a_ratio(
        offsets in proptest::collection::vec((-0.5f64..0.5, -0.5f64..0.5), 1..8),
        jump_range in 3.0f64..12.0,
    ) {
        let mut galaxy = empty_galaxy();
        let start = place(&mut galaxy, "Start", (0, 0, 0), (0.0, 0.0, 0.0));
        let target = place(&mut galaxy, "Target", (3, 0, 0), (0.0, 0.0, 0.0));
        for (i, (dx, dy)) in offsets.iter().enumerate() {
            let coordinates = StarSystemCoordinates::new(
                SectorCoordinates::new(i as i64 % 4 - 1, 0, 0),
                LocalOffset::new(*dx, *dy, 0.0),
            );
            // Coincident draws are rejected; the search does not need them.
            let _ = galaxy.register_custom_system(format!("P{i}"), coordinates);
        }

        let mut pathfinder = StellarPathfinder::new(&galaxy);
        pathfinder.init(start, target, jump_range).expect("init");
        for _ in 0..64 {
            let status = pathfinder.update().expect("update");
            let progress = pathfinder.progress();
            prop_assert!((0.0..=1.0).contains(&progress));
            if status != SearchStatus::Searching {
                break;
            }
        }
    }
}
