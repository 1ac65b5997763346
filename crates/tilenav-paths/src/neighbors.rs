use tilenav_core::Point;

/// Which surrounding cells count as one step away.
///
/// Neighbors are computed in column/row space, so a cell on the left edge
/// never sees the previous row's last column as adjacent (and symmetrically
/// on the right edge). Border filtering is left to the `keep` predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// Up, left, right, down.
    Cardinal,
    /// Cardinal plus the four diagonals.
    All,
}

impl Neighborhood {
    /// The 4- or 8-neighborhood, depending on `diagonal`.
    pub fn new(diagonal: bool) -> Self {
        if diagonal { Self::All } else { Self::Cardinal }
    }

    /// Map each neighbor of `p` through `keep` and append the `Some`
    /// results to `buf`. `buf` is not cleared.
    pub fn collect<T>(self, p: Point, keep: impl Fn(Point) -> Option<T>, buf: &mut Vec<T>) {
        match self {
            Self::Cardinal => buf.extend(p.neighbors_4().into_iter().filter_map(keep)),
            Self::All => buf.extend(p.neighbors_8().into_iter().filter_map(keep)),
        }
    }
}
