//! A* pathfinding over flat tile maps.
//!
//! Paths are sequences of row-major cell indices from start to destination,
//! both included. An empty path means the destination cannot be reached;
//! that is a normal result, not an error.
//!
//! - [`PathFinder`] runs searches with fixed [`SearchOptions`] (heuristic,
//!   diagonal movement, optional expansion budget).
//! - [`find_path`] is the one-shot form taking the heuristic by name.
//! - [`astar_path`] is the generic search over any [`AstarPather`];
//!   [`TilePather`] is the tile-map implementation.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | cell count, neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic estimate |
//!
//! # Example
//!
//! ```
//! use tilenav_core::TileMap;
//! use tilenav_paths::{Heuristic, PathFinder, SearchOptions};
//!
//! #[rustfmt::skip]
//! let gids = [
//!     0, 0, 0,
//!     1, 1, 0,
//!     0, 0, 0,
//! ];
//! let map = TileMap::new(&gids, 3).unwrap();
//! let finder = PathFinder::new(
//!     SearchOptions::default()
//!         .with_heuristic(Heuristic::Manhattan)
//!         .with_diagonal(false),
//! );
//! let path = finder.find_path(0, 6, &map, &[1]).unwrap();
//! assert_eq!(path, vec![0, 1, 2, 5, 8, 7, 6]);
//! ```

mod arena;
mod astar;
mod error;
mod heuristic;
mod neighbors;
mod options;
mod pather;
mod traits;

pub use astar::{PathFinder, astar_path, find_path};
pub use error::PathError;
pub use heuristic::{
    DIAGONAL_COST, Heuristic, STRAIGHT_COST, diagonal, euclidean, manhattan, path_cost, step_cost,
};
pub use neighbors::Neighborhood;
pub use options::SearchOptions;
pub use pather::TilePather;
pub use traits::{AstarPather, Pather, WeightedPather};
