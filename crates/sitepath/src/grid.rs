//! Static site grid: dimensions, per-cell terrain costs and obstacles.

use log::debug;
use sitepath_core::{Bounds, Position};

use crate::error::GridError;
use crate::obstacles::ObstacleSet;

/// Terrain cost of every cell in a grid built with [`Grid::new`].
pub const DEFAULT_TERRAIN_COST: u32 = 1;

/// A fixed-size site grid.
///
/// Per-cell tables are indexed by the canonical key `x * height + y`
/// (see [`Bounds::key`]). Dimensions never change after construction.
/// Obstacles may be marked at any time before the searches that depend on
/// them; they are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    costs: Vec<u32>,
    obstacles: ObstacleSet,
}

impl Grid {
    /// Create a `width` × `height` grid with every terrain cost set to 1 and
    /// no obstacles.
    ///
    /// Fails with `TooLarge` if the cost table cannot be allocated.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let bounds = checked_bounds(width, height)?;
        let too_large = GridError::TooLarge { width, height };
        let cells = bounds.checked_len().ok_or(too_large.clone())?;
        let mut costs = Vec::new();
        costs.try_reserve_exact(cells).map_err(|_| too_large)?;
        costs.resize(cells, DEFAULT_TERRAIN_COST);
        Ok(Self {
            bounds,
            costs,
            obstacles: ObstacleSet::new(),
        })
    }

    /// Create a grid from a row-major table of terrain costs
    /// (`costs[y * width + x]`). Every cost must be at least 1.
    pub fn with_costs(width: i32, height: i32, costs: &[u32]) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        if costs.len() != grid.bounds.len() {
            return Err(GridError::CostTableSize {
                expected: grid.bounds.len(),
                found: costs.len(),
            });
        }
        for (p, &cost) in grid.bounds.iter().zip(costs) {
            grid.set_cost(p, cost)?;
        }
        Ok(grid)
    }

    pub(crate) fn set_cost(&mut self, p: Position, cost: u32) -> Result<(), GridError> {
        if cost < 1 {
            return Err(GridError::InvalidTerrainCost { pos: p, cost });
        }
        let key = self.key(p)?;
        self.costs[key] = cost;
        Ok(())
    }

    /// The grid rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// Canonical key of `p`, or `OutOfBounds`.
    #[inline]
    pub(crate) fn key(&self, p: Position) -> Result<usize, GridError> {
        self.bounds.key(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// Cost of stepping onto `p`.
    ///
    /// Only meaningful for cells that are not obstacles.
    pub fn terrain_cost(&self, p: Position) -> Result<u32, GridError> {
        Ok(self.costs[self.key(p)?])
    }

    /// Mark `p` as permanently impassable. Marking twice is not an error.
    pub fn mark_obstacle(&mut self, p: Position) -> Result<(), GridError> {
        let key = self.key(p)?;
        if self.obstacles.insert(key) {
            debug!("obstacle marked at {p}");
        }
        Ok(())
    }

    /// Whether `p` is an obstacle. Positions outside the grid are not.
    #[inline]
    pub fn is_obstacle(&self, p: Position) -> bool {
        self.bounds
            .key(p)
            .is_some_and(|key| self.obstacles.contains(key))
    }

    /// Whether `p` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Position) -> bool {
        self.bounds
            .key(p)
            .is_some_and(|key| !self.obstacles.contains(key))
    }

    /// Number of distinct obstacle cells.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// All obstacle positions, ordered by canonical key.
    pub fn obstacles(&self) -> Vec<Position> {
        self.obstacles
            .sorted_keys()
            .into_iter()
            .map(|k| self.bounds.position(k))
            .collect()
    }
}

fn checked_bounds(width: i32, height: i32) -> Result<Bounds, GridError> {
    if width <= 0 || height <= 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(Bounds::sized(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5).unwrap();
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.bounds(), Bounds::sized(10, 5));
        assert_eq!(g.obstacle_count(), 0);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
            assert_eq!(
                Grid::new(w, h),
                Err(GridError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn huge_dimensions_are_an_error() {
        assert_eq!(
            Grid::new(i32::MAX, i32::MAX),
            Err(GridError::TooLarge {
                width: i32::MAX,
                height: i32::MAX
            })
        );
        assert!(matches!(
            Grid::with_costs(i32::MAX, i32::MAX, &[]),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn default_terrain_cost_is_one() {
        let g = Grid::new(3, 4).unwrap();
        for p in g.bounds() {
            assert_eq!(g.terrain_cost(p), Ok(1));
        }
    }

    #[test]
    fn terrain_cost_out_of_bounds() {
        let g = Grid::new(3, 3).unwrap();
        for p in [Position::new(3, 0), Position::new(0, -1)] {
            assert_eq!(
                g.terrain_cost(p),
                Err(GridError::OutOfBounds {
                    pos: p,
                    bounds: g.bounds()
                })
            );
        }
    }

    #[test]
    fn with_costs_is_row_major() {
        let g = Grid::with_costs(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(g.terrain_cost(Position::new(2, 0)), Ok(3));
        assert_eq!(g.terrain_cost(Position::new(0, 1)), Ok(4));
        assert_eq!(g.terrain_cost(Position::new(2, 1)), Ok(6));
    }

    #[test]
    fn with_costs_validates() {
        assert_eq!(
            Grid::with_costs(2, 2, &[1, 1, 1]),
            Err(GridError::CostTableSize {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Grid::with_costs(2, 2, &[1, 1, 0, 1]),
            Err(GridError::InvalidTerrainCost {
                pos: Position::new(0, 1),
                cost: 0
            })
        );
    }

    #[test]
    fn mark_obstacle_is_idempotent() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = Position::new(2, 3);
        assert!(!g.is_obstacle(p));
        g.mark_obstacle(p).unwrap();
        g.mark_obstacle(p).unwrap();
        assert!(g.is_obstacle(p));
        assert!(!g.is_passable(p));
        assert_eq!(g.obstacle_count(), 1);
        assert_eq!(g.obstacles(), vec![p]);
    }

    #[test]
    fn mark_obstacle_out_of_bounds() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = Position::new(4, 1);
        assert_eq!(
            g.mark_obstacle(p),
            Err(GridError::OutOfBounds {
                pos: p,
                bounds: g.bounds()
            })
        );
        assert_eq!(g.obstacle_count(), 0);
        assert!(!g.is_obstacle(p));
        assert!(!g.is_passable(p));
    }

    #[test]
    fn obstacle_keeps_its_terrain_cost() {
        let mut g = Grid::with_costs(2, 1, &[1, 7]).unwrap();
        g.mark_obstacle(Position::new(1, 0)).unwrap();
        assert_eq!(g.terrain_cost(Position::new(1, 0)), Ok(7));
    }
}
