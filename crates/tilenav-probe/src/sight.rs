//! Sampled line of sight between two pixel positions.
//!
//! The segment from `from` to `to` is walked in steps of
//! [`SightOptions::sample_spacing`] pixels, starting one step away from
//! `from`. The last sample is clamped to `to`, so the target cell is always
//! checked. Sight is blocked as soon as a sample lands on a cell whose gid is
//! not [`SightOptions::empty_gid`]; samples off the map block too.
//!
//! Sampling can step over the corner of a cell narrower than the spacing.
//! Callers that need exact cell coverage should use a spacing no larger
//! than the smaller tile dimension.

use tilenav_core::{EMPTY_GID, Gid, GridMap, Position};

/// Two angles closer than this (in degrees) are considered equal.
const ANGLE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SightOptions {
    /// Gid of cells that do not block sight.
    pub empty_gid: Gid,
    /// Distance in pixels between two samples. See [`sample_iter`] for
    /// degenerate values.
    pub sample_spacing: f64,
    /// When non-empty, sight also requires the direction from `from` to `to`
    /// to be one of these angles, in degrees (`atan2(dy, dx)`, so 90 points
    /// down the screen).
    pub allowed_angles: Vec<f64>,
}

impl Default for SightOptions {
    fn default() -> Self {
        Self {
            empty_gid: EMPTY_GID,
            sample_spacing: 32.0,
            allowed_angles: Vec::new(),
        }
    }
}

impl SightOptions {
    pub fn with_empty_gid(mut self, gid: Gid) -> Self {
        self.empty_gid = gid;
        self
    }

    pub fn with_sample_spacing(mut self, spacing: f64) -> Self {
        self.sample_spacing = spacing;
        self
    }

    pub fn with_allowed_angles(mut self, angles: impl Into<Vec<f64>>) -> Self {
        self.allowed_angles = angles.into();
        self
    }

    fn angle_allowed(&self, angle: f64) -> bool {
        self.allowed_angles.is_empty()
            || self
                .allowed_angles
                .iter()
                .any(|a| (a - angle).abs() <= ANGLE_TOLERANCE)
    }
}

/// Direction from `from` to `to` in degrees, in `(-180, 180]`.
pub fn angle_degrees(from: Position, to: Position) -> f64 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

/// Upper bound on the number of samples along one segment.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Lazily yield the sample positions along the segment, excluding `from`.
///
/// There are `ceil(distance / spacing)` samples, at least one and at most
/// [`MAX_SAMPLES`], the last one being `to` itself. Past the cap the samples
/// are spread evenly over the segment instead. Identical endpoints give no
/// samples; a non-positive or NaN spacing samples only `to`.
pub fn sample_iter(
    from: Position,
    to: Position,
    spacing: f64,
) -> impl Iterator<Item = Position> {
    let distance = from.distance(to);
    let (count, step) = if distance == 0.0 {
        (0, 0.0)
    } else if !(spacing > 0.0) {
        (1, distance)
    } else {
        let n = (distance / spacing).ceil();
        if n >= MAX_SAMPLES as f64 {
            (MAX_SAMPLES, distance / MAX_SAMPLES as f64)
        } else {
            // NaN casts to 0.
            ((n as usize).max(1), spacing)
        }
    };
    let delta = to - from;
    (1..=count).map(move |i| {
        if i == count {
            return to;
        }
        let along = i as f64 * step;
        Position::new(
            from.x + delta.x * along / distance,
            from.y + delta.y * along / distance,
        )
    })
}

/// [`sample_iter`] collected into a vector.
pub fn sample_points(from: Position, to: Position, spacing: f64) -> Vec<Position> {
    sample_iter(from, to, spacing).collect()
}

/// Whether `to` can be seen from `from` across `map`. Stops at the first
/// blocking sample.
pub fn is_visible(from: Position, to: Position, map: &GridMap<'_>, options: &SightOptions) -> bool {
    if !options.angle_allowed(angle_degrees(from, to)) {
        return false;
    }
    sample_iter(from, to, options.sample_spacing).all(|pos| match map.probe(pos) {
        (_, Some(gid)) => gid == options.empty_gid,
        (index, None) => {
            log::trace!("sight sample {pos} is off the map (index {index})");
            false
        }
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let opts: SightOptions = serde_json::from_str(r#"{"empty_gid": 3}"#).unwrap();
        assert_eq!(opts, SightOptions::default().with_empty_gid(3));
    }
}
