//! Read-only views over caller-owned gid arrays, and marker-layer rebuilds.

use crate::error::GridError;
use crate::geom::{Point, Position};
use crate::grid::TileGrid;

/// A tile's grid identifier. `0` conventionally means empty/walkable.
pub type Gid = u32;

/// The conventional "empty" gid.
pub const EMPTY_GID: Gid = 0;

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

/// A borrowed, row-major view over a map array.
///
/// The view checks once that the slice is a whole number of rows; every
/// lookup afterwards is bounds checked and returns `None` off the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileMap<'a> {
    gids: &'a [Gid],
    width: usize,
    height: usize,
}

impl<'a> TileMap<'a> {
    /// View `gids` as rows of `width` cells.
    pub fn new(gids: &'a [Gid], width: usize) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::malformed("map width must be at least 1"));
        }
        if gids.is_empty() {
            return Err(GridError::malformed("map array is empty"));
        }
        if gids.len() % width != 0 {
            return Err(GridError::malformed(format!(
                "map array of {} cells is not a whole number of {width}-wide rows",
                gids.len()
            )));
        }
        Ok(Self {
            gids,
            width,
            height: gids.len() / width,
        })
    }

    /// View `gids` with the dimensions of `grid`; the length must be exactly
    /// `grid.width() * grid.height()`.
    pub fn for_grid(gids: &'a [Gid], grid: &TileGrid) -> Result<Self, GridError> {
        if gids.len() != grid.len() {
            return Err(GridError::malformed(format!(
                "map array of {} cells does not match {}x{} grid",
                gids.len(),
                grid.width(),
                grid.height()
            )));
        }
        Self::new(gids, grid.width())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gids.len()
    }

    /// Always false: construction rejects empty arrays.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gids.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [Gid] {
        self.gids
    }

    /// Whether this view has the same dimensions as `grid`.
    pub fn matches(&self, grid: &TileGrid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    /// Gid at a flat index.
    #[inline]
    pub fn gid(&self, index: usize) -> Option<Gid> {
        self.gids.get(index).copied()
    }

    /// Gid at a raw, possibly negative index (see [`crate::index`]).
    #[inline]
    pub fn gid_raw(&self, index: isize) -> Option<Gid> {
        usize::try_from(index).ok().and_then(|i| self.gid(i))
    }

    /// Gid at a cell coordinate; `None` outside the map.
    #[inline]
    pub fn gid_at(&self, p: Point) -> Option<Gid> {
        self.index_of(p).and_then(|i| self.gid(i))
    }

    /// Whether the cell coordinate lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Flat index of an in-map cell coordinate.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Column/row of a flat index. Not bounds checked.
    #[inline]
    pub fn point(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

// ---------------------------------------------------------------------------
// GridMap
// ---------------------------------------------------------------------------

/// A [`TileMap`] paired with the [`TileGrid`] it was checked against, so
/// pixel positions can be resolved to gids.
///
/// The pair can only be built when both have the same column and row
/// counts; every lookup through it reads the cell the grid places under the
/// position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridMap<'a> {
    grid: TileGrid,
    map: TileMap<'a>,
}

impl<'a> GridMap<'a> {
    /// View `gids` laid out on `grid`. See [`TileMap::for_grid`].
    pub fn new(gids: &'a [Gid], grid: TileGrid) -> Result<Self, GridError> {
        let map = TileMap::for_grid(gids, &grid)?;
        Ok(Self { grid, map })
    }

    /// Pair an existing view with `grid`, failing with
    /// [`GridError::Malformed`] when their dimensions differ.
    pub fn from_parts(map: TileMap<'a>, grid: TileGrid) -> Result<Self, GridError> {
        if !map.matches(&grid) {
            return Err(GridError::malformed(format!(
                "{}x{} map does not match {}x{} grid",
                map.width(),
                map.height(),
                grid.width(),
                grid.height()
            )));
        }
        Ok(Self { grid, map })
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn map(&self) -> &TileMap<'a> {
        &self.map
    }

    /// Raw index and gid of the cell under `pos`. Off-map positions keep
    /// their raw index and read no gid.
    pub fn probe(&self, pos: Position) -> (isize, Option<Gid>) {
        (
            self.grid.cell_index(pos),
            self.map.gid_at(self.grid.cell_of(pos)),
        )
    }

    /// Gid under `pos`, `None` off the map.
    #[inline]
    pub fn gid_under(&self, pos: Position) -> Option<Gid> {
        self.map.gid_at(self.grid.cell_of(pos))
    }
}

// ---------------------------------------------------------------------------
// Marker layers
// ---------------------------------------------------------------------------

/// An object standing on the grid: its pixel center and the gid it writes
/// into a marker layer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub center: Position,
    pub gid: Gid,
}

impl Marker {
    pub const fn new(center: Position, gid: Gid) -> Self {
        Self { center, gid }
    }
}

/// Build a fresh layer for `grid`: every cell [`EMPTY_GID`] except the cells
/// under each marker's center, which get that marker's gid. Later markers
/// overwrite earlier ones on the same cell.
///
/// Fails with [`GridError::InvalidIndex`] if a marker's center is off the
/// grid.
pub fn rebuild_layer(grid: &TileGrid, markers: &[Marker]) -> Result<Vec<Gid>, GridError> {
    let mut layer = vec![EMPTY_GID; grid.len()];
    for marker in markers {
        let idx = grid.checked_cell_index(marker.center)?;
        if layer[idx] != EMPTY_GID {
            log::trace!(
                "marker gid {} replaces gid {} at cell {idx}",
                marker.gid,
                layer[idx]
            );
        }
        layer[idx] = marker.gid;
    }
    Ok(layer)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn marker_round_trip() {
        let m = Marker::new(Position::new(12.5, 40.0), 3);
        let json = serde_json::to_string(&m).unwrap();
        let back: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
