// Copyright 2026 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A geometrically invalid ring configuration.
///
/// Every variant indicates a programming error at the call site: the layout
/// engine refuses to produce descriptors rather than emit degenerate or
/// misleading geometry. Values that fail a positivity check include
/// non-finite inputs (NaN and infinities).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The segment count was zero; a ring has at least one segment.
    ZeroSegments,
    /// The outer radius was zero, negative, or non-finite.
    NonPositiveOuterRadius {
        /// The rejected value.
        outer_radius: f64,
    },
    /// The stroke width was zero, negative, or non-finite.
    NonPositiveStrokeWidth {
        /// The rejected value.
        stroke_width: f64,
    },
    /// The segment spacing was negative or non-finite.
    NegativeSpacing {
        /// The rejected value, in degrees.
        spacing_degrees: f64,
    },
    /// The inner padding was negative or non-finite.
    NegativePadding {
        /// The rejected value.
        inner_padding: f64,
    },
    /// The stroke is at least as wide as the ring's diameter, leaving a
    /// centerline radius of zero or below.
    StrokeExceedsDiameter {
        /// The rejected stroke width.
        stroke_width: f64,
        /// The outer radius it was checked against.
        outer_radius: f64,
    },
    /// The spacing is too large for the segment count: each segment would be
    /// left with a zero or negative sweep.
    DegenerateSweep {
        /// The computed per-segment sweep, in degrees.
        angle_per_arc: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ZeroSegments => write!(f, "ring layout requires at least one segment"),
            Self::NonPositiveOuterRadius { outer_radius } => {
                write!(f, "outer radius must be positive and finite, got {outer_radius}")
            }
            Self::NonPositiveStrokeWidth { stroke_width } => {
                write!(f, "stroke width must be positive and finite, got {stroke_width}")
            }
            Self::NegativeSpacing { spacing_degrees } => write!(
                f,
                "segment spacing must be non-negative and finite, got {spacing_degrees} degrees"
            ),
            Self::NegativePadding { inner_padding } => write!(
                f,
                "inner padding must be non-negative and finite, got {inner_padding}"
            ),
            Self::StrokeExceedsDiameter {
                stroke_width,
                outer_radius,
            } => write!(
                f,
                "stroke width {stroke_width} leaves no centerline inside outer radius {outer_radius}"
            ),
            Self::DegenerateSweep { angle_per_arc } => write!(
                f,
                "spacing leaves a non-positive per-segment sweep of {angle_per_arc} degrees"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
