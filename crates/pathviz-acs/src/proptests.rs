use proptest::prelude::*;

use crate::{AcsConfig, AntColony, Location, is_permutation, tour_length};

fn points() -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec((0i32..50, 0i32..50), 2..10).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Location::new(x as f64, y as f64))
            .collect()
    })
}

fn distinct(locs: &[Location]) -> bool {
    locs.iter().any(|l| *l != locs[0])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn emissions_are_strictly_improving_permutations(locs in points(), seed in any::<u64>()) {
        prop_assume!(distinct(&locs));
        let cfg = AcsConfig::default().with_seed(seed).with_max_iterations(8);
        let colony = AntColony::new(locs.clone(), cfg).unwrap();
        let seed_length = colony.seed_length();
        let run: Vec<_> = colony.improvements().collect();

        prop_assert!(!run.is_empty());
        prop_assert_eq!(run[0].ant, None);
        prop_assert_eq!(run[0].length, seed_length);
        for imp in &run {
            prop_assert!(is_permutation(&imp.tour, locs.len()));
            prop_assert!((tour_length(&imp.tour, &locs) - imp.length).abs() < 1e-9);
            if imp.iteration == 0 {
                prop_assert!(imp.length <= seed_length);
            }
        }
        for w in run.windows(2) {
            prop_assert!(w[1].length < w[0].length);
            prop_assert!(w[1].iteration >= w[0].iteration);
        }
    }

    #[test]
    fn constructed_tours_cover_every_location(locs in points(), seed in any::<u64>()) {
        prop_assume!(distinct(&locs));
        let cfg = AcsConfig::default().with_seed(seed);
        let mut colony = AntColony::new(locs.clone(), cfg).unwrap();
        for _ in 0..5 {
            prop_assert!(is_permutation(&colony.construct_tour(), locs.len()));
        }
    }
}
