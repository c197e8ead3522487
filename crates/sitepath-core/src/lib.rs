//! **sitepath-core** — grid geometry shared by the *sitepath* crates.
//!
//! Provides [`Position`], an integer cell coordinate, and [`Bounds`], a
//! half-open rectangle with the canonical integer cell key used for all
//! per-cell tables.

pub mod geom;

pub use geom::{Bounds, BoundsIter, Position};
