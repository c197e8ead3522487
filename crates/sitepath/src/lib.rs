//! Obstacle-aware A* pathfinding over static site grids.
//!
//! A [`Grid`] owns fixed dimensions, a per-cell terrain cost and a set of
//! permanently impassable cells. [`Grid::find_optimal_path`] runs an A*
//! search with 8-directional movement and returns an optimal route:
//!
//! ```
//! use sitepath::{Grid, Position, SearchOutcome};
//!
//! let mut site = Grid::new(3, 3)?;
//! site.mark_obstacle(Position::new(1, 1))?;
//! let outcome = site.find_optimal_path(Position::new(0, 0), Position::new(2, 2))?;
//! assert_eq!(outcome.path().map(|p| p.len()), Some(4));
//! assert!(matches!(
//!     site.find_optimal_path(Position::new(0, 0), Position::new(1, 1)),
//!     Err(sitepath::GridError::UnreachableEndpoint(_))
//! ));
//! # Ok::<(), sitepath::GridError>(())
//! ```
//!
//! # Search rules
//!
//! - Moving onto a cell costs its terrain cost (at least 1).
//! - The heuristic is Chebyshev distance, admissible for these moves.
//! - Frontier ties break on lowest cost-so-far, then lowest `(x, y)`, so
//!   identical queries always return identical routes.
//! - Searches take `&self` and keep all scratch state per call; one grid can
//!   serve many searches, including from several threads.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor generation |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate |

mod config;
mod distance;
mod error;
mod frontier;
mod grid;
mod layout;
mod neighbors;
mod obstacles;
mod path;
mod search;
mod traits;

pub use config::SearchConfig;
pub use distance::chebyshev;
pub use error::{GridError, LayoutError};
pub use grid::{DEFAULT_TERRAIN_COST, Grid};
pub use path::Path;
pub use search::{SearchOutcome, astar};
pub use sitepath_core::{Bounds, Position};
pub use traits::{AstarPather, Pather, WeightedPather};
