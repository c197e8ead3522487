use sitepath_core::{Bounds, Position};
use thiserror::Error;

/// Errors reported by grid construction, obstacle marking and path queries.
///
/// "No path exists" is not an error: see [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was not strictly positive.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// The cell table for these dimensions cannot be allocated.
    #[error("grid dimensions {width}x{height} are too large to allocate")]
    TooLarge { width: i32, height: i32 },

    /// A referenced position lies outside the grid.
    #[error("position {pos} is outside grid bounds {bounds}")]
    OutOfBounds { pos: Position, bounds: Bounds },

    /// The start or goal of a search is an obstacle.
    #[error("endpoint {0} is an obstacle")]
    UnreachableEndpoint(Position),

    /// A terrain cost below 1 was supplied.
    #[error("terrain cost {cost} at {pos} is below the minimum of 1")]
    InvalidTerrainCost { pos: Position, cost: u32 },

    /// A cost table did not have exactly one entry per cell.
    #[error("expected {expected} terrain costs, got {found}")]
    CostTableSize { expected: usize, found: usize },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors that can occur when parsing a text site layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout contains no rows.
    #[error("layout is empty")]
    Empty,

    /// Rows have inconsistent widths.
    #[error("layout row {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside `#`, `.` and `1`..`9` was found.
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Position },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = GridError::OutOfBounds {
            pos: Position::new(5, 5),
            bounds: Bounds::sized(3, 3),
        };
        assert_eq!(
            e.to_string(),
            "position (5, 5) is outside grid bounds [(0, 0)-(3, 3))"
        );
        assert_eq!(
            GridError::UnreachableEndpoint(Position::new(1, 2)).to_string(),
            "endpoint (1, 2) is an obstacle"
        );
    }

    #[test]
    fn layout_errors_convert() {
        let e: GridError = LayoutError::Empty.into();
        assert_eq!(e, GridError::Layout(LayoutError::Empty));
        assert_eq!(e.to_string(), "layout is empty");
    }
}
