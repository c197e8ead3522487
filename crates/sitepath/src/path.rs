use std::fmt;

use sitepath_core::{Bounds, Position};

use crate::error::GridError;
use crate::grid::Grid;

/// An ordered route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Path(Vec<Position>);

impl Path {
    /// Walk predecessor links back from `goal_key` until a key with no
    /// predecessor (the start), then reverse into start→goal order.
    pub(crate) fn reconstruct(
        bounds: Bounds,
        goal_key: usize,
        parent: impl Fn(usize) -> Option<usize>,
    ) -> Self {
        let mut positions = vec![bounds.position(goal_key)];
        let mut cur = goal_key;
        while let Some(prev) = parent(cur) {
            positions.push(bounds.position(prev));
            cur = prev;
        }
        positions.reverse();
        Self(positions)
    }

    /// First position of the route.
    pub fn start(&self) -> Option<Position> {
        self.0.first().copied()
    }

    /// Last position of the route.
    pub fn goal(&self) -> Option<Position> {
        self.0.last().copied()
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Number of positions, endpoints included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves (`len - 1`).
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    pub fn contains(&self, p: Position) -> bool {
        self.0.contains(&p)
    }

    /// Total traversal cost on `grid`: the terrain cost of every position
    /// after the start.
    pub fn cost(&self, grid: &Grid) -> Result<u64, GridError> {
        self.0.iter().skip(1).try_fold(0u64, |acc, &p| {
            grid.terrain_cost(p).map(|c| acc + u64::from(c))
        })
    }

    pub fn into_vec(self) -> Vec<Position> {
        self.0
    }
}

impl From<Vec<Position>> for Path {
    fn from(v: Vec<Position>) -> Self {
        Self(v)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_reverses_predecessor_chain() {
        let b = Bounds::sized(3, 3);
        let key = |x, y| b.key(Position::new(x, y)).unwrap();
        let (start, mid, goal) = (key(0, 0), key(1, 1), key(2, 2));
        let path = Path::reconstruct(b, goal, |k| {
            if k == goal {
                Some(mid)
            } else if k == mid {
                Some(start)
            } else {
                None
            }
        });
        assert_eq!(
            path.positions(),
            &[Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)]
        );
        assert_eq!(path.start(), Some(Position::new(0, 0)));
        assert_eq!(path.goal(), Some(Position::new(2, 2)));
        assert_eq!(path.steps(), 2);
    }

    #[test]
    fn reconstruct_single_node() {
        let b = Bounds::sized(2, 2);
        let path = Path::reconstruct(b, 3, |_| None);
        assert_eq!(path.into_vec(), vec![Position::new(1, 1)]);
    }

    #[test]
    fn cost_skips_start() {
        let g = Grid::with_costs(3, 1, &[9, 2, 4]).unwrap();
        let path = Path::from(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);
        assert_eq!(path.cost(&g), Ok(6));
        assert_eq!(Path::from(vec![Position::ZERO]).cost(&g), Ok(0));
    }

    #[test]
    fn display() {
        let path = Path::from(vec![Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(path.to_string(), "(0, 0) -> (1, 0)");
    }
}
