// Copyright 2026 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin` and `cos`
use kurbo::Point;

use crate::arc::{ArcPath, ArcSegment, GradientRef, PaintRef, deg_to_rad};
use crate::config::{GradientDesc, RingConfig};
use crate::error::ConfigError;

/// Angle of 12 o'clock, where segment 0 begins.
const STARTING_ANGLE_DEG: f64 = -90.0;

/// Sweep shortfall, in degrees, of a single-segment ring.
///
/// A lone segment sweeps `360 − ε` degrees so that its start and end points
/// never coincide; renderers that reject coincident arc endpoints would
/// otherwise drop the path entirely. The ring still reads as visually
/// closed.
pub const CLOSED_RING_EPSILON_DEG: f64 = 0.01;

/// Derived bounding-box and center geometry for a ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingGeometry {
    /// Side length of the square bounding box that contains the ring and
    /// its stroke: `outer_radius * 2 + stroke_width`.
    pub total_size: f64,
    /// Drawing center, relative to the top-left of the bounding box.
    pub center: Point,
    /// Radius of the stroke centerline: `outer_radius - stroke_width / 2`,
    /// compensating for the half of the stroke that extends outward.
    pub ring_radius: f64,
}

/// The ring's two shared gradient definitions.
///
/// Present on a layout exactly when both gradients were configured. Each is
/// defined once and referenced per segment through
/// [`GradientRef`], never restated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientDefs {
    /// Definition referenced by [`GradientRef::Seen`].
    pub seen: GradientDesc,
    /// Definition referenced by [`GradientRef::Unseen`].
    pub unseen: GradientDesc,
}

/// Complete output of one layout evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct RingLayout {
    /// Drawable segments in index order, which is also their draw order.
    pub segments: Vec<ArcSegment>,
    /// Derived bounding-box geometry.
    pub geometry: RingGeometry,
    /// Shared gradient definitions, when both were configured.
    pub gradients: Option<GradientDefs>,
}

/// Maps a [`RingConfig`] to an ordered sequence of drawable segments plus
/// derived ring geometry.
///
/// This is a pure function: identical input yields bit-identical output in
/// `O(count)` time and space, and nothing is retained between calls. Hosts
/// re-invoke it whenever any input changes.
///
/// The produced sequence always has exactly `count` elements in index
/// order. For `count > 1`, the per-segment sweeps plus the gaps between
/// them cover exactly one full revolution; a single segment sweeps
/// `360 −` [`CLOSED_RING_EPSILON_DEG`] degrees instead.
///
/// # Errors
///
/// Returns a [`ConfigError`] for geometrically invalid input (zero
/// segments, non-positive radius or stroke, negative spacing or padding, a
/// stroke wider than the ring's diameter, or spacing that consumes the
/// entire per-segment sweep). No descriptors are produced on error.
pub fn layout(config: &RingConfig) -> Result<RingLayout, ConfigError> {
    config.validate()?;

    let center = config.outer_radius + config.stroke_width / 2.0;
    let geometry = RingGeometry {
        total_size: config.outer_radius * 2.0 + config.stroke_width,
        center: Point::new(center, center),
        ring_radius: config.outer_radius - config.stroke_width / 2.0,
    };

    // Gradients take effect only as a pair; a lone gradient leaves the flat
    // colors in effect.
    let gradients = match (config.seen_gradient, config.unseen_gradient) {
        (Some(seen), Some(unseen)) => Some(GradientDefs { seen, unseen }),
        _ => None,
    };

    let seen_count = config.seen_count.min(config.count);

    let (sweep_angle, step) = if config.count == 1 {
        (360.0 - CLOSED_RING_EPSILON_DEG, 0.0)
    } else {
        let angle_per_arc = 360.0 / f64::from(config.count) - config.spacing_degrees;
        (angle_per_arc, angle_per_arc + config.spacing_degrees)
    };

    let mut segments = Vec::with_capacity(config.count as usize);
    for index in 0..config.count {
        let start_angle = STARTING_ANGLE_DEG + f64::from(index) * step;
        let is_seen = index < seen_count;
        segments.push(ArcSegment {
            index,
            path: arc_path(&geometry, start_angle, sweep_angle),
            is_seen,
            paint: resolve_paint(config, gradients.is_some(), is_seen),
        });
    }

    Ok(RingLayout {
        segments,
        geometry,
        gradients,
    })
}

fn resolve_paint(config: &RingConfig, has_gradients: bool, is_seen: bool) -> PaintRef {
    if has_gradients {
        PaintRef::Gradient(if is_seen {
            GradientRef::Seen
        } else {
            GradientRef::Unseen
        })
    } else if is_seen {
        PaintRef::Solid(config.seen_color)
    } else {
        PaintRef::Solid(config.unseen_color)
    }
}

fn arc_path(geometry: &RingGeometry, start_angle: f64, sweep_angle: f64) -> ArcPath {
    ArcPath {
        start_angle,
        sweep_angle,
        radius: geometry.ring_radius,
        start: point_at(geometry, start_angle),
        end: point_at(geometry, start_angle + sweep_angle),
        large_arc: sweep_angle > 180.0,
    }
}

fn point_at(geometry: &RingGeometry, angle_deg: f64) -> Point {
    let theta = deg_to_rad(angle_deg);
    Point::new(
        geometry.center.x + geometry.ring_radius * theta.cos(),
        geometry.center.y + geometry.ring_radius * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SEEN_COLOR, DEFAULT_UNSEEN_COLOR};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn geometry_derives_center_and_centerline_radius() {
        let ring = layout(&RingConfig::new(3, 0)).unwrap();
        assert_eq!(ring.geometry.total_size, 165.0);
        assert_eq!(ring.geometry.center, Point::new(82.5, 82.5));
        assert_eq!(ring.geometry.ring_radius, 77.5);
    }

    #[test]
    fn segment_zero_starts_at_twelve_o_clock() {
        let ring = layout(&RingConfig::new(4, 0)).unwrap();
        let path = ring.segments[0].path;
        assert_eq!(path.start_angle, -90.0);
        // 12 o'clock on the centerline: straight up from the center.
        assert_close(path.start.x, 82.5);
        assert_close(path.start.y, 82.5 - 77.5);
    }

    #[test]
    fn endpoints_sit_on_the_centerline() {
        let ring = layout(&RingConfig::new(5, 2)).unwrap();
        for segment in &ring.segments {
            let start = segment.path.start - ring.geometry.center;
            let end = segment.path.end - ring.geometry.center;
            assert_close(start.hypot(), ring.geometry.ring_radius);
            assert_close(end.hypot(), ring.geometry.ring_radius);
        }
    }

    #[test]
    fn large_arc_flag_tracks_the_half_turn_boundary() {
        // Two segments with no spacing sweep exactly 180 degrees: not large.
        let half = layout(&RingConfig::new(2, 0).with_spacing_degrees(0.0)).unwrap();
        assert_eq!(half.segments[0].path.sweep_angle, 180.0);
        assert!(!half.segments[0].path.large_arc);

        // A lone segment sweeps nearly the full circle: large.
        let full = layout(&RingConfig::new(1, 0)).unwrap();
        assert!(full.segments[0].path.large_arc);
    }

    #[test]
    fn lone_gradient_falls_back_to_flat_colors() {
        let config = RingConfig::new(2, 1).with_gradients(
            GradientDesc::new(DEFAULT_SEEN_COLOR, DEFAULT_UNSEEN_COLOR),
            GradientDesc::new(DEFAULT_UNSEEN_COLOR, DEFAULT_SEEN_COLOR),
        );
        let only_seen = RingConfig {
            unseen_gradient: None,
            ..config.clone()
        };
        let ring = layout(&only_seen).unwrap();
        assert!(ring.gradients.is_none());
        assert!(
            ring.segments
                .iter()
                .all(|s| matches!(s.paint, PaintRef::Solid(_)))
        );

        let ring = layout(&config).unwrap();
        assert!(ring.gradients.is_some());
        assert!(
            ring.segments
                .iter()
                .all(|s| matches!(s.paint, PaintRef::Gradient(_)))
        );
    }
}
