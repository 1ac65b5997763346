//! Corner-point extraction and tile hit tests for axis-aligned shapes.

use std::fmt;
use std::str::FromStr;

use tilenav_core::{Gid, GridMap, Position, Shape};

/// The four corner points used for tile collision tests.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corners {
    pub top_left: Position,
    pub top_right: Position,
    pub bottom_left: Position,
    pub bottom_right: Position,
}

impl Corners {
    /// Corners in test order: top-left, top-right, bottom-left, bottom-right.
    #[inline]
    pub fn to_array(self) -> [Position; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// Corner points of a shape's collision box.
///
/// With a collision area the corners are `origin + offset` and
/// `origin + offset + size`. Without one, the shape's own box is used with
/// the right and bottom edges pulled in by one pixel, so a 32-pixel shape
/// aligned on a 32-pixel tile stays inside that tile.
pub fn corner_points(shape: &Shape) -> Corners {
    let b = shape.bounds;
    let (left, top, right, bottom) = match shape.collision_area {
        Some(ca) => {
            let left = b.x + ca.x;
            let top = b.y + ca.y;
            (left, top, left + ca.width, top + ca.height)
        }
        None => (b.x, b.y, b.x + b.width - 1.0, b.y + b.height - 1.0),
    };
    Corners {
        top_left: Position::new(left, top),
        top_right: Position::new(right, top),
        bottom_left: Position::new(left, bottom),
        bottom_right: Position::new(right, bottom),
    }
}

/// Which points of a shape a hit test looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HitMode {
    /// All four corners must be on the target gid.
    Every,
    /// Any corner on the target gid is a hit.
    #[default]
    Some,
    /// Only the shape's center point counts.
    Center,
}

impl HitMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Every => "every",
            Self::Some => "some",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for HitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`HitMode`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHitModeError(pub String);

impl fmt::Display for ParseHitModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hit mode \u{201c}{}\u{201d} (expected every, some or center)",
            self.0
        )
    }
}

impl std::error::Error for ParseHitModeError {}

impl FromStr for HitMode {
    type Err = ParseHitModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "every" => Ok(Self::Every),
            "some" => Ok(Self::Some),
            "center" => Ok(Self::Center),
            other => Err(ParseHitModeError(other.to_string())),
        }
    }
}

/// Outcome of [`hit_test_tile`].
///
/// `index` and `gid` describe the point that decided the outcome: the first
/// matching corner for [`HitMode::Some`], the first non-matching corner for
/// [`HitMode::Every`], the bottom-right corner when all four had to be
/// checked, and the center for [`HitMode::Center`]. A point off the grid
/// keeps its raw index and reads `gid: None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collision {
    pub hit: bool,
    pub index: isize,
    pub gid: Option<Gid>,
}

/// Test a shape against the cells of `map` holding `target`.
pub fn hit_test_tile(shape: &Shape, map: &GridMap<'_>, target: Gid, mode: HitMode) -> Collision {
    let probe = |pos: Position| {
        let (index, gid) = map.probe(pos);
        Collision {
            hit: gid == Some(target),
            index,
            gid,
        }
    };

    let decided_by = |stop_on: bool| {
        let corners = corner_points(shape);
        corners
            .to_array()
            .into_iter()
            .map(probe)
            .find(|c| c.hit == stop_on)
            .unwrap_or_else(|| probe(corners.bottom_right))
    };

    match mode {
        HitMode::Center => probe(shape.center()),
        HitMode::Some => decided_by(true),
        HitMode::Every => decided_by(false),
    }
}
