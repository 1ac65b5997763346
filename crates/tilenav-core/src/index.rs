//! Raw neighbor arithmetic on flat cell indices.
//!
//! These helpers only add row-major offsets. They do not filter anything:
//! results can be negative, past the end of the map, or wrapped onto the
//! previous/next row at the left and right edges. They are meant for cheap
//! broad-phase lookups where the caller guards each read (for example with
//! [`TileMap::gid`](crate::TileMap::gid)). Neighbor generation that must
//! respect the grid border works on [`Point`](crate::Point)s instead.

/// The cell itself plus its 8 surrounding cells, row by row from the
/// top-left.
#[inline]
pub fn surrounding_cells(index: isize, width: usize) -> [isize; 9] {
    let w = width as isize;
    [
        index - w - 1,
        index - w,
        index - w + 1,
        index - 1,
        index,
        index + 1,
        index + w - 1,
        index + w,
        index + w + 1,
    ]
}

/// The 4 orthogonal neighbors: up, left, right, down.
#[inline]
pub fn cross_cells(index: isize, width: usize) -> [isize; 4] {
    let w = width as isize;
    [index - w, index - 1, index + 1, index + w]
}

/// The 4 diagonal neighbors: up-left, up-right, down-left, down-right.
#[inline]
pub fn diagonal_cells(index: isize, width: usize) -> [isize; 4] {
    let w = width as isize;
    [index - w - 1, index - w + 1, index + w - 1, index + w + 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_layout() {
        assert_eq!(
            surrounding_cells(12, 5),
            [6, 7, 8, 11, 12, 13, 16, 17, 18]
        );
        assert_eq!(cross_cells(12, 5), [7, 11, 13, 17]);
        assert_eq!(diagonal_cells(12, 5), [6, 8, 16, 18]);
    }

    #[test]
    fn cross_and_diagonal_partition_the_ring() {
        let all = surrounding_cells(22, 7);
        let mut parts: Vec<isize> = cross_cells(22, 7)
            .into_iter()
            .chain(diagonal_cells(22, 7))
            .chain([22])
            .collect();
        parts.sort();
        let mut all = all.to_vec();
        all.sort();
        assert_eq!(parts, all);
    }

    #[test]
    fn neighbor_symmetry_for_interior_cells() {
        let width = 6usize;
        let height = 6isize;
        for row in 1..height - 1 {
            for col in 1..width as isize - 1 {
                let a = col + row * width as isize;
                for b in surrounding_cells(a, width) {
                    assert!(
                        surrounding_cells(b, width).contains(&a),
                        "{a} not around {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn edges_are_not_filtered() {
        assert_eq!(cross_cells(0, 4), [-4, -1, 1, 4]);
        // The left neighbor of column 0 lands on the previous row's last
        // column.
        assert_eq!(cross_cells(4, 4)[1], 3);
    }
}
