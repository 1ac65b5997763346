//! Maze-walking helpers: which way a mover standing on a cell may go, and
//! when it is allowed to turn.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use tilenav_core::{Gid, GridMap, Point, Position};

/// An orthogonal movement direction. Up is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order [`valid_directions`] reports them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Name of an optional direction; `None` means the mover is trapped.
    pub fn label(dir: Option<Direction>) -> &'static str {
        dir.map_or("trapped", Direction::name)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Cell offset of one step in this direction.
    pub fn offset(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Direction`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction \u{201c}{}\u{201d} (expected up, down, left or right)",
            self.0
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Directions whose neighbor cell holds `walkable`, in the order up, left,
/// right, down.
///
/// Neighbors are taken by column and row, so a cell on the left or right
/// border never sees a cell of the adjacent row. A position off the map has
/// no valid direction.
pub fn valid_directions(position: Position, map: &GridMap<'_>, walkable: Gid) -> Vec<Direction> {
    let cell = map.grid().cell_of(position);
    let tiles = map.map();
    if !tiles.contains(cell) {
        return Vec::new();
    }
    Direction::ALL
        .into_iter()
        .filter(|d| tiles.gid_at(cell + d.offset()) == Some(walkable))
        .collect()
}

/// Whether a mover with these open directions should pick a new heading:
/// at a dead end, when trapped, or at an intersection where both a vertical
/// and a horizontal direction are open.
pub fn can_change_direction(valid: &[Direction]) -> bool {
    match valid.len() {
        0 | 1 => true,
        _ => {
            valid.iter().any(|d| d.is_vertical()) && valid.iter().any(|d| d.is_horizontal())
        }
    }
}

/// Pick one of `valid` uniformly, or `None` when there is nothing to pick.
pub fn random_direction<R: Rng + ?Sized>(valid: &[Direction], rng: &mut R) -> Option<Direction> {
    valid.choose(rng).copied()
}

/// Direction along the axis of larger displacement from `from` to `to`.
///
/// Ties go to the horizontal axis. A zero displacement on the chosen axis
/// reads as left or up.
pub fn closest_direction(from: Position, to: Position) -> Direction {
    let d = to - from;
    if d.x.abs() >= d.y.abs() {
        if d.x <= 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if d.y <= 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilenav_core::TileGrid;

    #[rustfmt::skip]
    const MAZE: [Gid; 16] = [
        1, 0, 1, 1,
        0, 0, 0, 1,
        1, 0, 1, 0,
        1, 1, 1, 0,
    ];

    fn maze() -> GridMap<'static> {
        GridMap::new(&MAZE, TileGrid::new(10.0, 10.0, 4, 4).unwrap()).unwrap()
    }

    fn at(col: i32, row: i32) -> Position {
        Position::new(col as f64 * 10.0 + 5.0, row as f64 * 10.0 + 5.0)
    }

    #[test]
    fn directions_in_fixed_order() {
        let map = maze();
        use Direction::*;
        assert_eq!(
            valid_directions(at(1, 1), &map, 0),
            vec![Up, Left, Right, Down]
        );
        assert_eq!(valid_directions(at(1, 0), &map, 0), vec![Down]);
        assert_eq!(valid_directions(at(2, 1), &map, 0), vec![Left]);
        assert_eq!(valid_directions(at(0, 0), &map, 1), Vec::new());
    }

    #[test]
    fn border_cells_do_not_wrap() {
        let map = maze();
        // (0, 2) follows (3, 1) in memory and holds 1; it is not to the right.
        assert_eq!(
            valid_directions(at(3, 1), &map, 1),
            vec![Direction::Up]
        );
        // Likewise (3, 1) is not to the left of (0, 2).
        assert_eq!(
            valid_directions(at(0, 2), &map, 1),
            vec![Direction::Down]
        );
    }

    #[test]
    fn off_map_position_is_trapped() {
        let map = maze();
        let dirs = valid_directions(Position::new(-5.0, 15.0), &map, 0);
        assert!(dirs.is_empty());
        let mut rng = StdRng::seed_from_u64(7);
        let pick = random_direction(&dirs, &mut rng);
        assert_eq!(pick, None);
        assert_eq!(Direction::label(pick), "trapped");
    }

    #[test]
    fn change_direction_rules() {
        use Direction::*;
        assert!(can_change_direction(&[]));
        assert!(can_change_direction(&[Left]));
        assert!(can_change_direction(&[Up, Right]));
        assert!(can_change_direction(&[Up, Left, Down]));
        assert!(!can_change_direction(&[Up, Down]));
        assert!(!can_change_direction(&[Left, Right]));
    }

    #[test]
    fn dead_end_returns_only_way_out() {
        let map = maze();
        let dirs = valid_directions(at(1, 0), &map, 0);
        assert!(can_change_direction(&dirs));
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(random_direction(&dirs, &mut rng), Some(Direction::Down));
        }
    }

    #[test]
    fn random_choice_covers_all_options() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let d = random_direction(&Direction::ALL, &mut rng).unwrap();
            let i = Direction::ALL.iter().position(|&x| x == d).unwrap();
            seen[i] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn closest_direction_prefers_larger_axis() {
        let o = Position::ZERO;
        assert_eq!(closest_direction(o, Position::new(5.0, 2.0)), Direction::Right);
        assert_eq!(closest_direction(o, Position::new(-5.0, 2.0)), Direction::Left);
        assert_eq!(closest_direction(o, Position::new(1.0, -3.0)), Direction::Up);
        assert_eq!(closest_direction(o, Position::new(1.0, 3.0)), Direction::Down);
        // Ties go horizontal.
        assert_eq!(closest_direction(o, Position::new(3.0, 3.0)), Direction::Right);
        assert_eq!(closest_direction(o, o), Direction::Left);
    }

    #[test]
    fn names_round_trip() {
        for d in Direction::ALL {
            assert_eq!(d.name().parse::<Direction>(), Ok(d));
            assert_eq!(Direction::label(Some(d)), d.to_string());
        }
        assert_eq!(
            "north".parse::<Direction>(),
            Err(ParseDirectionError("north".into()))
        );
    }
}
