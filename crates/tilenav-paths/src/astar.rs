use tilenav_core::{Gid, GridError, TileMap};

use crate::arena::{NO_PARENT, NodeState, SearchArena};
use crate::error::PathError;
use crate::heuristic::Heuristic;
use crate::options::SearchOptions;
use crate::pather::TilePather;
use crate::traits::AstarPather;

/// Compute the shortest path from `start` to `goal` with A*.
///
/// Returns the full path (both endpoints included), or an empty vector if
/// the goal cannot be reached. `start == goal` yields `[start]` whatever the
/// cell holds. Endpoints outside `0..pather.cell_count()` fail with
/// [`GridError::InvalidIndex`]. With `max_expansions` set, the search gives
/// up with [`PathError::SearchAborted`] once that many nodes have been
/// expanded without reaching the goal.
///
/// A node that is already known is updated and re-parented only when the new
/// route gives it a strictly lower `f`. Closed nodes are updated in place and
/// stay closed.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    start: usize,
    goal: usize,
    max_expansions: Option<usize>,
) -> Result<Vec<usize>, PathError> {
    let len = pather.cell_count();
    for idx in [start, goal] {
        if idx >= len {
            return Err(GridError::InvalidIndex {
                index: isize::try_from(idx).unwrap_or(isize::MAX),
                len,
            }
            .into());
        }
    }

    if start == goal {
        return Ok(vec![start]);
    }

    let mut arena = SearchArena::new(len);
    arena.open(start, 0, pather.estimate(start, goal), NO_PARENT);

    let mut nbuf = Vec::with_capacity(8);

    let found = 'search: loop {
        let Some(ci) = arena.pop() else {
            break 'search false;
        };

        if ci == goal {
            break 'search true;
        }

        if max_expansions.is_some_and(|max| arena.expanded >= max) {
            log::debug!(
                "A* {start} -> {goal}: budget exhausted after {} expansions",
                arena.expanded
            );
            return Err(PathError::SearchAborted {
                expanded: arena.expanded,
            });
        }

        arena.close(ci);
        let current_g = arena.node(ci).g;
        log::trace!("A* expand {ci} (g {current_g}, f {})", arena.node(ci).f);

        nbuf.clear();
        pather.neighbors(ci, &mut nbuf);

        for &ni in nbuf.iter() {
            let g = current_g + pather.cost(ci, ni);
            let h = pather.estimate(ni, goal);
            let (state, known_f) = {
                let n = arena.node(ni);
                (n.state, n.f)
            };
            match state {
                NodeState::Unseen => arena.open(ni, g, h, ci),
                NodeState::Open if g + h < known_f => arena.open(ni, g, h, ci),
                NodeState::Closed if g + h < known_f => arena.relax_closed(ni, g, h, ci),
                _ => {}
            }
        }
    };

    if !found {
        log::debug!(
            "A* {start} -> {goal}: no path ({} nodes expanded)",
            arena.expanded
        );
        return Ok(Vec::new());
    }

    let path = arena.path_to(goal);
    log::debug!(
        "A* {start} -> {goal}: {} cells, g {} ({} nodes expanded)",
        path.len(),
        arena.node(goal).g,
        arena.expanded
    );
    Ok(path)
}

/// Tile-map path search with fixed [`SearchOptions`].
///
/// A `PathFinder` holds configuration only: every call builds and drops its
/// own node arena, so one finder can serve any number of maps and threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFinder {
    options: SearchOptions,
}

impl PathFinder {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Shortest path between two cell indices of `map`, avoiding cells whose
    /// gid is in `obstacles`. See [`astar_path`] for the result contract.
    pub fn find_path(
        &self,
        start: usize,
        destination: usize,
        map: &TileMap<'_>,
        obstacles: &[Gid],
    ) -> Result<Vec<usize>, PathError> {
        let pather = TilePather::new(
            *map,
            obstacles,
            self.options.heuristic,
            self.options.allow_diagonal,
        );
        astar_path(&pather, start, destination, self.options.max_expansions)
    }
}

/// One-shot search over a raw gid slice, naming the heuristic as a string
/// (`"manhattan"`, `"euclidean"` or `"diagonal"`).
///
/// The heuristic name is checked before anything else.
pub fn find_path(
    start: usize,
    destination: usize,
    gids: &[Gid],
    width: usize,
    obstacles: &[Gid],
    heuristic: &str,
    allow_diagonal: bool,
) -> Result<Vec<usize>, PathError> {
    let heuristic: Heuristic = heuristic.parse()?;
    let map = TileMap::new(gids, width)?;
    let options = SearchOptions::default()
        .with_heuristic(heuristic)
        .with_diagonal(allow_diagonal);
    PathFinder::new(options).find_path(start, destination, &map, obstacles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::path_cost;

    const OPEN_5X5: [Gid; 25] = [0; 25];

    fn finder(heuristic: Heuristic, diagonal: bool) -> PathFinder {
        PathFinder::new(
            SearchOptions::default()
                .with_heuristic(heuristic)
                .with_diagonal(diagonal),
        )
    }

    #[test]
    fn open_grid_diagonal() {
        let map = TileMap::new(&OPEN_5X5, 5).unwrap();
        for h in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Diagonal] {
            let path = finder(h, true).find_path(0, 24, &map, &[1]).unwrap();
            assert_eq!(path, vec![0, 6, 12, 18, 24], "heuristic {h}");
            assert_eq!(path_cost(&path, 5), 56);
        }
    }

    #[test]
    fn open_grid_orthogonal() {
        let map = TileMap::new(&OPEN_5X5, 5).unwrap();
        for h in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Diagonal] {
            let path = finder(h, false).find_path(0, 24, &map, &[1]).unwrap();
            assert_eq!(path.len(), 9, "heuristic {h}");
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&24));
            assert_eq!(path_cost(&path, 5), 80);
            for w in path.windows(2) {
                let d = w[0].abs_diff(w[1]);
                assert!(d == 1 || d == 5, "non-orthogonal step {w:?}");
            }
        }
    }

    #[test]
    fn start_equals_destination() {
        let gids = [1; 9];
        let map = TileMap::new(&gids, 3).unwrap();
        let path = PathFinder::default().find_path(4, 4, &map, &[1]).unwrap();
        assert_eq!(path, vec![4]);
    }

    #[test]
    fn enclosed_destination_is_unreachable() {
        #[rustfmt::skip]
        let gids = [
            0, 0, 0, 0, 0,
            0, 1, 1, 1, 0,
            0, 1, 0, 1, 0,
            0, 1, 1, 1, 0,
            0, 0, 0, 0, 0,
        ];
        let map = TileMap::new(&gids, 5).unwrap();
        for diagonal in [true, false] {
            let path = finder(Heuristic::Diagonal, diagonal)
                .find_path(0, 12, &map, &[1])
                .unwrap();
            assert!(path.is_empty());
        }
    }

    #[test]
    fn obstacle_destination_is_unreachable() {
        let mut gids = [0; 9];
        gids[8] = 2;
        let map = TileMap::new(&gids, 3).unwrap();
        let path = PathFinder::default().find_path(0, 8, &map, &[2]).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn routes_around_a_wall() {
        #[rustfmt::skip]
        let gids = [
            0, 0, 0, 0, 0,
            1, 1, 1, 1, 0,
            0, 0, 0, 0, 0,
        ];
        let map = TileMap::new(&gids, 5).unwrap();
        let path = finder(Heuristic::Manhattan, false)
            .find_path(0, 10, &map, &[1])
            .unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 4, 9, 14, 13, 12, 11, 10]);
        assert_eq!(path_cost(&path, 5), 100);
    }

    #[test]
    fn does_not_wrap_around_the_border() {
        // (0, 2) is walled in on the map; reaching it from (4, 1) would take
        // a single +1 step that wraps past the end of row 1.
        #[rustfmt::skip]
        let gids = [
            0, 0, 0, 0, 0,
            1, 1, 0, 0, 0,
            0, 1, 0, 0, 0,
        ];
        let map = TileMap::new(&gids, 5).unwrap();
        let path = PathFinder::default().find_path(9, 10, &map, &[1]).unwrap();
        assert!(path.is_empty());

        let path = PathFinder::default().find_path(9, 5, &map, &[]).unwrap();
        assert_eq!(path_cost(&path, 5), 40);
        assert!(path.windows(2).all(|w| w[0].abs_diff(w[1]) != 1
            || w[0] / 5 == w[1] / 5));
    }

    #[test]
    fn invalid_endpoints_fail_fast() {
        let map = TileMap::new(&OPEN_5X5, 5).unwrap();
        let err = PathFinder::default().find_path(0, 25, &map, &[]).unwrap_err();
        assert_eq!(
            err,
            PathError::Grid(GridError::InvalidIndex { index: 25, len: 25 })
        );
        let pather = TilePather::new(map, &[], Heuristic::Manhattan, true);
        assert_eq!(
            astar_path(&pather, usize::MAX, 0, None),
            Err(PathError::Grid(GridError::InvalidIndex {
                index: isize::MAX,
                len: 25
            }))
        );
    }

    #[test]
    fn budget_aborts_search() {
        let map = TileMap::new(&OPEN_5X5, 5).unwrap();
        let pf = PathFinder::new(
            SearchOptions::default()
                .with_diagonal(false)
                .with_max_expansions(3),
        );
        assert_eq!(
            pf.find_path(0, 24, &map, &[]),
            Err(PathError::SearchAborted { expanded: 3 })
        );
        // A generous budget finds the path.
        let pf = PathFinder::new(SearchOptions::default().with_max_expansions(100));
        assert_eq!(pf.find_path(0, 24, &map, &[]).unwrap().len(), 5);
    }

    #[test]
    fn string_contract() {
        let path = find_path(0, 24, &OPEN_5X5, 5, &[], "diagonal", true).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(
            find_path(0, 24, &OPEN_5X5, 5, &[], "chebyshev", true),
            Err(PathError::InvalidHeuristic("chebyshev".into()))
        );
        // Heuristic errors win over map errors.
        assert!(matches!(
            find_path(0, 1, &OPEN_5X5, 7, &[], "nope", true),
            Err(PathError::InvalidHeuristic(_))
        ));
        assert!(matches!(
            find_path(0, 1, &OPEN_5X5, 7, &[], "manhattan", true),
            Err(PathError::Grid(GridError::Malformed { .. }))
        ));
    }

    #[test]
    fn deterministic_tie_break() {
        // Two equal-cost routes around a single obstacle; the lower h then
        // lower index rule always picks the same one.
        #[rustfmt::skip]
        let gids = [
            0, 0, 0,
            0, 1, 0,
            0, 0, 0,
        ];
        let map = TileMap::new(&gids, 3).unwrap();
        let pf = finder(Heuristic::Manhattan, false);
        let first = pf.find_path(0, 8, &map, &[1]).unwrap();
        for _ in 0..5 {
            assert_eq!(pf.find_path(0, 8, &map, &[1]).unwrap(), first);
        }
        assert_eq!(first.len(), 5);
    }
}
