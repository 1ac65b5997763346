/// Minimal pathfinding interface over flat cell indices.
pub trait Pather {
    /// Number of cells; valid indices are `0..cell_count()`.
    fn cell_count(&self) -> usize;

    /// Append the cells reachable in one step from `index` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, index: usize, buf: &mut Vec<usize>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: usize, to: usize) -> i32;
}

/// Full A* pather with a heuristic estimate.
pub trait AstarPather: WeightedPather {
    /// Estimated cost of reaching `to` from `from`.
    fn estimate(&self, from: usize, to: usize) -> i32;
}
