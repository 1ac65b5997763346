//! [`TileGrid`]: the immutable description of a rectangular tile grid and
//! the pixel ↔ cell-index conversions over it.
//!
//! Cell indices are row-major flat offsets, `column + row * width`.

use crate::error::GridError;
use crate::geom::{Point, Position};

// ---------------------------------------------------------------------------
// TileRect
// ---------------------------------------------------------------------------

/// Pixel footprint of one cell, as returned by [`TileGrid::cell_rect`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileRect {
    pub index: usize,
    pub column: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl TileRect {
    /// Top-left corner in pixels.
    #[inline]
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Center in pixels.
    #[inline]
    pub fn center(&self) -> Position {
        Position::new(self.center_x, self.center_y)
    }
}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// Immutable description of a tile grid.
///
/// Invariants (checked by [`TileGrid::new`]): at least one column and one
/// row, finite positive tile dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTileGrid")
)]
pub struct TileGrid {
    tile_width: f64,
    tile_height: f64,
    width: usize,
    height: usize,
    origin: Position,
}

impl TileGrid {
    /// Describe a `width × height` grid of `tile_width × tile_height` pixel
    /// tiles with its origin at (0, 0).
    pub fn new(
        tile_width: f64,
        tile_height: f64,
        width: usize,
        height: usize,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::malformed(format!(
                "grid must have at least one cell, got {width}x{height}"
            )));
        }
        if !(tile_width.is_finite() && tile_width > 0.0)
            || !(tile_height.is_finite() && tile_height > 0.0)
        {
            return Err(GridError::malformed(format!(
                "tile size must be positive, got {tile_width}x{tile_height}"
            )));
        }
        if width.checked_mul(height).is_none_or(|n| n > isize::MAX as usize) {
            return Err(GridError::malformed(format!(
                "grid of {width}x{height} cells is too large"
            )));
        }
        Ok(Self {
            tile_width,
            tile_height,
            width,
            height,
            origin: Position::ZERO,
        })
    }

    /// Move the grid's pixel origin. Only [`cell_rect`](Self::cell_rect)
    /// adds the origin back; [`cell_index`](Self::cell_index) works in
    /// grid-local pixels.
    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    #[inline]
    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false: a valid grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Column/row of the cell under a pixel position, without bounds checks.
    #[inline]
    pub fn cell_of(&self, pos: Position) -> Point {
        Point::new(
            (pos.x / self.tile_width).floor() as i32,
            (pos.y / self.tile_height).floor() as i32,
        )
    }

    /// Flat index of the cell under `pos`:
    /// `floor(x / tile_width) + floor(y / tile_height) * width`.
    ///
    /// No bounds validation: positions off the grid produce negative or
    /// out-of-range values, and a position left or right of the grid aliases
    /// a cell in an adjacent row. Use
    /// [`checked_cell_index`](Self::checked_cell_index) when that matters.
    #[inline]
    pub fn cell_index(&self, pos: Position) -> isize {
        let c = self.cell_of(pos);
        c.x as isize + c.y as isize * self.width as isize
    }

    /// Like [`cell_index`](Self::cell_index) but fails with
    /// [`GridError::InvalidIndex`] unless the column and the row are both
    /// inside the grid.
    pub fn checked_cell_index(&self, pos: Position) -> Result<usize, GridError> {
        self.index_of(self.cell_of(pos))
            .ok_or_else(|| GridError::InvalidIndex {
                index: self.cell_index(pos),
                len: self.len(),
            })
    }

    /// Whether the cell coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Whether a raw (possibly negative) index addresses a cell.
    #[inline]
    pub fn contains_index(&self, index: isize) -> bool {
        index >= 0 && (index as usize) < self.len()
    }

    /// Flat index of an in-grid cell coordinate.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Column/row of a flat index. Not bounds checked.
    #[inline]
    pub fn cell_point(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Pixel rectangle of the cell at `index`: `column = index % width`,
    /// `row = index / width`, offset by the grid origin.
    ///
    /// Pure arithmetic; indices past the end map to rows below the grid.
    pub fn cell_rect(&self, index: usize) -> TileRect {
        let column = index % self.width;
        let row = index / self.width;
        let x = column as f64 * self.tile_width + self.origin.x;
        let y = row as f64 * self.tile_height + self.origin.y;
        TileRect {
            index,
            column,
            row,
            x,
            y,
            center_x: x + self.tile_width / 2.0,
            center_y: y + self.tile_height / 2.0,
            width: self.tile_width,
            height: self.tile_height,
        }
    }

    /// [`cell_rect`](Self::cell_rect) for indices inside the grid only.
    pub fn checked_cell_rect(&self, index: usize) -> Result<TileRect, GridError> {
        if index >= self.len() {
            return Err(GridError::InvalidIndex {
                index: index as isize,
                len: self.len(),
            });
        }
        Ok(self.cell_rect(index))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileGrid {
    tile_width: f64,
    tile_height: f64,
    width: usize,
    height: usize,
    #[serde(default)]
    origin: Position,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileGrid> for TileGrid {
    type Error = GridError;

    fn try_from(raw: RawTileGrid) -> Result<Self, Self::Error> {
        Ok(TileGrid::new(raw.tile_width, raw.tile_height, raw.width, raw.height)?
            .with_origin(raw.origin))
    }
}
