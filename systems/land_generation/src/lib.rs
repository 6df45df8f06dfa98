#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Random land generator producing wall/floor maps.
//!
//! Every cell is visited exactly once in random order. A visited cell turns
//! into floor unless five or more of its eight neighbours already are floor,
//! which leaves scattered cactus clusters between open patches.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Symbol emitted for open floor.
pub const FLOOR: char = '.';

/// Symbol emitted for a wall.
pub const WALL: char = '#';

const CROWDED_NEIGHBOURS: usize = 5;

const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Seeded generator of random lands.
#[derive(Debug)]
pub struct LandGenerator {
    rng: ChaCha8Rng,
}

impl LandGenerator {
    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates a `columns` x `rows` land, one newline-terminated line per row.
    pub fn generate(&mut self, columns: usize, rows: usize) -> String {
        if columns == 0 {
            return "\n".repeat(rows);
        }

        let floors = self.floor_mask(columns, rows);
        let mut land = String::with_capacity((columns + 1) * rows);
        for row in floors.chunks(columns) {
            land.extend(row.iter().map(|&floor| if floor { FLOOR } else { WALL }));
            land.push('\n');
        }
        land
    }

    fn floor_mask(&mut self, columns: usize, rows: usize) -> Vec<bool> {
        let mut floors = vec![false; columns * rows];
        let mut unvisited: Vec<usize> = (0..floors.len()).collect();

        while !unvisited.is_empty() {
            let pick = self.rng.gen_range(0..unvisited.len());
            let cell = unvisited.swap_remove(pick);
            if floor_neighbours(&floors, columns, rows, cell) < CROWDED_NEIGHBOURS {
                floors[cell] = true;
            }
        }

        floors
    }
}

fn floor_neighbours(floors: &[bool], columns: usize, rows: usize, cell: usize) -> usize {
    let x = (cell % columns) as i64;
    let y = (cell / columns) as i64;
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(|(dx, dy)| {
            let nx = usize::try_from(x + dx).ok().filter(|nx| *nx < columns)?;
            let ny = usize::try_from(y + dy).ok().filter(|ny| *ny < rows)?;
            Some(ny * columns + nx)
        })
        .filter(|index| floors[*index])
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn land_has_requested_shape() {
        let land = LandGenerator::new(1).generate(12, 7);
        let lines: Vec<_> = land.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|line| line.chars().count() == 12));
        assert!(land
            .chars()
            .all(|symbol| symbol == FLOOR || symbol == WALL || symbol == '\n'));
    }

    #[test]
    fn same_seed_generates_same_land() {
        assert_eq!(
            LandGenerator::new(42).generate(9, 9),
            LandGenerator::new(42).generate(9, 9)
        );
    }

    #[test]
    fn first_visited_cell_is_always_floor() {
        let land = LandGenerator::new(7).generate(1, 1);
        assert_eq!(land, ".\n");
    }

    #[test]
    fn no_wall_is_left_with_fewer_than_five_floor_neighbours() {
        let columns = 10;
        let rows = 10;
        let mut generator = LandGenerator::new(99);
        let floors = generator.floor_mask(columns, rows);

        for (cell, floor) in floors.iter().enumerate() {
            if !floor {
                assert!(
                    floor_neighbours(&floors, columns, rows, cell) >= CROWDED_NEIGHBOURS,
                    "wall at cell {cell} is not crowded"
                );
            }
        }
    }

    #[test]
    fn empty_land_is_empty() {
        assert_eq!(LandGenerator::new(0).generate(0, 0), "");
        assert_eq!(LandGenerator::new(0).generate(4, 0), "");
    }

    #[test]
    fn zero_columns_still_emit_every_row() {
        assert_eq!(LandGenerator::new(0).generate(0, 3), "\n\n\n");
    }
}
