//! Step costs and the distance heuristics used by A*.
//!
//! Costs are fixed-point: an orthogonal step costs 10 and a diagonal step
//! 14 (≈ 10·√2), so every estimate is an integer.

use std::fmt;
use std::str::FromStr;

use tilenav_core::Point;

use crate::error::PathError;

/// Cost of an orthogonal step.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of a diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan estimate: `(|Δrow| + |Δcol|) * 10`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) * STRAIGHT_COST
}

/// Euclidean estimate: `floor(sqrt(Δcol² + Δrow²) * 10)`.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx.hypot(dy) * f64::from(STRAIGHT_COST)).floor() as i32
}

/// Diagonal (octile) estimate: `14 * min(vx, vy) + 10 * |vx - vy|`.
#[inline]
pub fn diagonal(a: Point, b: Point) -> i32 {
    let vx = (a.x - b.x).abs();
    let vy = (a.y - b.y).abs();
    DIAGONAL_COST * vx.min(vy) + STRAIGHT_COST * (vx - vy).abs()
}

/// Cost of one step between adjacent cells.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

/// Total step cost of a path of flat indices on a map `width` cells wide.
pub fn path_cost(path: &[usize], width: usize) -> i32 {
    let point = |i: usize| Point::new((i % width) as i32, (i / width) as i32);
    path.windows(2)
        .map(|w| step_cost(point(w[0]), point(w[1])))
        .sum()
}

/// Heuristic selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Diagonal,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i32 {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Euclidean => euclidean(from, to),
            Self::Diagonal => diagonal(from, to),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "diagonal" => Ok(Self::Diagonal),
            other => Err(PathError::InvalidHeuristic(other.to_string())),
        }
    }
}
