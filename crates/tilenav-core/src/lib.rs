//! **tilenav-core** — tile grid geometry shared by the *tilenav* crates.
//!
//! This crate provides the leaf types everything else builds on: cell and
//! pixel geometry, the immutable [`TileGrid`] description with its
//! pixel ↔ cell-index conversions, borrowed [`TileMap`] views over gid
//! arrays, and raw neighbor arithmetic on flat indices.

pub mod error;
pub mod geom;
pub mod grid;
pub mod index;
pub mod map;

pub use error::GridError;
pub use geom::{Point, Position, Rect, Shape};
pub use grid::{TileGrid, TileRect};
pub use index::{cross_cells, diagonal_cells, surrounding_cells};
pub use map::{EMPTY_GID, Gid, GridMap, Marker, TileMap, rebuild_layer};
