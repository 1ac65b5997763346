//! Tile probes for moving shapes: corner collision tests, sampled line of
//! sight, and maze direction advice.
//!
//! Every probe reads the map through a [`GridMap`](tilenav_core::GridMap),
//! whose construction rejects a map and grid of different dimensions.
//! Probes are total: a point off the map reads as having no gid, so it never
//! matches a target, empty or walkable gid.

pub mod collision;
pub mod direction;
pub mod sight;

pub use collision::{Collision, Corners, HitMode, ParseHitModeError, corner_points, hit_test_tile};
pub use direction::{
    Direction, ParseDirectionError, can_change_direction, closest_direction, random_direction,
    valid_directions,
};
pub use sight::{MAX_SAMPLES, SightOptions, angle_degrees, is_visible, sample_iter, sample_points};
