use sitepath_core::Position;

/// Chebyshev (L∞) distance between two positions.
///
/// The exact step count between two cells under 8-directional movement, so
/// it never overestimates when every step costs at least 1.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_takes_the_larger_axis() {
        let o = Position::ZERO;
        assert_eq!(chebyshev(o, o), 0);
        assert_eq!(chebyshev(o, Position::new(2, 2)), 2);
        assert_eq!(chebyshev(o, Position::new(5, 1)), 5);
        assert_eq!(chebyshev(Position::new(-3, 4), Position::new(1, 2)), 4);
    }

    #[test]
    fn chebyshev_is_symmetric() {
        let a = Position::new(7, -2);
        let b = Position::new(-1, 3);
        assert_eq!(chebyshev(a, b), chebyshev(b, a));
    }

    #[test]
    fn chebyshev_changes_by_at_most_one_per_step() {
        let goal = Position::new(4, 9);
        let p = Position::new(2, 2);
        for n in p.neighbors_8() {
            assert!(chebyshev(p, goal).abs_diff(chebyshev(n, goal)) <= 1);
        }
    }
}
