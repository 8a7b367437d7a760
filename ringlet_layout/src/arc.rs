// Copyright 2026 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Arc, Point, Vec2};
use peniko::Color;

/// Degrees to radians, without requiring float intrinsics from `std`.
#[inline]
pub(crate) fn deg_to_rad(angle_deg: f64) -> f64 {
    angle_deg * (core::f64::consts::PI / 180.0)
}

/// Identifies one of the ring's two shared gradient definitions.
///
/// This is a small, opaque reference: the definitions themselves live on
/// [`RingLayout::gradients`](crate::RingLayout::gradients) and are stated
/// once per ring, not per segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GradientRef {
    /// The gradient applied to seen segments.
    Seen,
    /// The gradient applied to unseen segments.
    Unseen,
}

impl GradientRef {
    /// Returns the stable definition id rendering surfaces key the shared
    /// gradient definitions by.
    #[inline]
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Seen => "seenGradient",
            Self::Unseen => "unSeenGradient",
        }
    }
}

/// Paint resolved for one segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PaintRef {
    /// A flat color.
    Solid(Color),
    /// A reference to one of the two shared gradient definitions.
    Gradient(GradientRef),
}

/// Drawable arc geometry for one segment.
///
/// Angles are in degrees, measured from 3 o'clock and increasing clockwise
/// (screen coordinates, y down); segments begin at −90°, i.e. 12 o'clock.
/// `start` and `end` are the Cartesian endpoints on the stroke centerline,
/// relative to the top-left of the ring's square bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcPath {
    /// Start angle, in degrees.
    pub start_angle: f64,
    /// Clockwise sweep, in degrees, exclusive of the gap that follows.
    pub sweep_angle: f64,
    /// Radius of the stroke centerline the endpoints sit on.
    pub radius: f64,
    /// Cartesian start point.
    pub start: Point,
    /// Cartesian end point.
    pub end: Point,
    /// True when the arc takes the long (> 180°) way between its endpoints.
    pub large_arc: bool,
}

impl ArcPath {
    /// Converts to kurbo's arc type around the given ring center.
    ///
    /// Kurbo shares this crate's angle convention (radians from 3 o'clock,
    /// positive sweep clockwise in y-down coordinates), so the conversion is
    /// a straight degree-to-radian mapping.
    #[inline]
    #[must_use]
    pub fn to_kurbo(&self, center: Point) -> Arc {
        Arc::new(
            center,
            Vec2::new(self.radius, self.radius),
            deg_to_rad(self.start_angle),
            deg_to_rad(self.sweep_angle),
            0.0,
        )
    }
}

/// One drawable segment of the ring.
///
/// Segments are produced in index order, which is also their draw/z-order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Position among the ring's segments, `0 ≤ index < count`.
    pub index: u32,
    /// Arc geometry on the stroke centerline.
    pub path: ArcPath,
    /// Whether this segment falls inside the seen prefix.
    pub is_seen: bool,
    /// Paint resolved for this segment.
    pub paint: PaintRef,
}
