use std::collections::HashSet;

use tilenav_core::{Gid, Point, TileMap};

use crate::heuristic::{Heuristic, step_cost};
use crate::neighbors::Neighborhood;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// [`AstarPather`] over a tile map: a cell is passable when it is on the map
/// and its gid is not an obstacle gid.
#[derive(Debug, Clone)]
pub struct TilePather<'a> {
    map: TileMap<'a>,
    obstacles: HashSet<Gid>,
    heuristic: Heuristic,
    neighborhood: Neighborhood,
}

impl<'a> TilePather<'a> {
    pub fn new(
        map: TileMap<'a>,
        obstacles: &[Gid],
        heuristic: Heuristic,
        allow_diagonal: bool,
    ) -> Self {
        Self {
            map,
            obstacles: obstacles.iter().copied().collect(),
            heuristic,
            neighborhood: Neighborhood::new(allow_diagonal),
        }
    }

    #[inline]
    pub fn map(&self) -> &TileMap<'a> {
        &self.map
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Whether `p` is on the map and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.map
            .gid_at(p)
            .is_some_and(|gid| !self.obstacles.contains(&gid))
    }
}

impl Pather for TilePather<'_> {
    fn cell_count(&self) -> usize {
        self.map.len()
    }

    fn neighbors(&self, index: usize, buf: &mut Vec<usize>) {
        self.neighborhood.collect(
            self.map.point(index),
            |n| self.map.index_of(n).filter(|_| self.is_passable(n)),
            buf,
        );
    }
}

impl WeightedPather for TilePather<'_> {
    fn cost(&self, from: usize, to: usize) -> i32 {
        step_cost(self.map.point(from), self.map.point(to))
    }
}

impl AstarPather for TilePather<'_> {
    fn estimate(&self, from: usize, to: usize) -> i32 {
        self.heuristic
            .estimate(self.map.point(from), self.map.point(to))
    }
}
