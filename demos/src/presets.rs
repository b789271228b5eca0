//! Compiled-in grids, in the text form accepted by [`Grid::from_ascii`].

use pathviz_core::Grid;

use crate::DemoError;

/// `(name, grid)` pairs.
pub const PRESETS: &[(&str, &str)] = &[
    ("open", OPEN),
    ("wall", WALL),
    ("split", SPLIT),
    ("maze", MAZE),
    ("stars", STARS),
];

const OPEN: &str = "
    S.......
    ........
    ........
    ........
    ........
    ........
    ........
    .......E
";

const WALL: &str = "
    S.#.E
    ..#..
    ..#..
    ..#..
    .....
";

const SPLIT: &str = "
    S.#..
    ..#..
    ..#.E
    ..#..
    ..#..
";

const MAZE: &str = "
    S...#....
    .##.#.##.
    .#..#..#.
    .#.###.#.
    .#.....#.
    .#####.#.
    .....#.#.
    .###.#.#.
    ...#...#E
";

// Barriers only: a point set for the colony.
const STARS: &str = "
    ..........
    .#......#.
    ....#.....
    ..........
    .#.....#..
    ...#......
    ..........
    ......#...
    .#.......#
    ..........
";

/// Names of every preset, in listing order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// Parse the preset called `name`.
pub fn load(name: &str) -> Result<Grid, DemoError> {
    let (_, text) = PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| DemoError::UnknownPreset(name.to_string()))?;
    Ok(Grid::from_ascii(text)?)
}

#[cfg(test)]
mod tests {
    use pathviz_core::CellState;

    use super::*;

    #[test]
    fn every_preset_parses() {
        for name in names() {
            let g = load(name).unwrap();
            assert!(!g.is_empty(), "{name}");
        }
    }

    #[test]
    fn stars_is_a_point_set() {
        let g = load("stars").unwrap();
        assert_eq!(g.count(CellState::Barrier), 9);
        assert_eq!(g.start(), None);
        assert_eq!(g.barrier_locations().len(), 9);
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(load("nope"), Err(DemoError::UnknownPreset(n)) if n == "nope"));
    }
}
