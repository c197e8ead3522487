//! Neighbor generation and step costs on a [`Grid`].

use sitepath_core::Position;

use crate::distance::chebyshev;
use crate::grid::Grid;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for Grid {
    /// Candidates are the eight compass neighbors (N, NE, E, SE, S, SW, W,
    /// NW); those outside the grid or marked as obstacles are dropped.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        for n in p.neighbors_8() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Grid {
    /// Terrain cost of the destination cell.
    fn cost(&self, _from: Position, to: Position) -> u32 {
        // Neighbors are always in bounds; the fallback only guards misuse.
        self.terrain_cost(to).unwrap_or(u32::MAX)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Position, to: Position) -> u32 {
        chebyshev(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(g: &Grid, p: Position) -> Vec<Position> {
        let mut buf = Vec::new();
        g.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn interior_cell_has_eight_in_compass_order() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            neighbors_of(&g, Position::new(1, 1)),
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(0, 2),
                Position::new(0, 1),
                Position::new(0, 0),
            ]
        );
    }

    #[test]
    fn corner_is_clipped_to_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            neighbors_of(&g, Position::ZERO),
            vec![Position::new(1, 0), Position::new(1, 1), Position::new(0, 1)]
        );
    }

    #[test]
    fn obstacles_are_skipped() {
        let mut g = Grid::new(3, 3).unwrap();
        g.mark_obstacle(Position::new(1, 1)).unwrap();
        g.mark_obstacle(Position::new(1, 0)).unwrap();
        assert_eq!(neighbors_of(&g, Position::ZERO), vec![Position::new(0, 1)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let g = Grid::new(1, 1).unwrap();
        assert!(neighbors_of(&g, Position::ZERO).is_empty());
    }

    #[test]
    fn cost_is_destination_terrain() {
        let g = Grid::with_costs(2, 1, &[5, 3]).unwrap();
        assert_eq!(g.cost(Position::new(0, 0), Position::new(1, 0)), 3);
        assert_eq!(g.cost(Position::new(1, 0), Position::new(0, 0)), 5);
    }

    #[test]
    fn estimate_is_chebyshev() {
        let g = Grid::new(10, 10).unwrap();
        assert_eq!(g.estimate(Position::ZERO, Position::new(9, 4)), 9);
    }
}
