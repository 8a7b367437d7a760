// Copyright 2026 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::error::ConfigError;

/// Default angular gap between adjacent segments, in degrees.
pub const DEFAULT_SPACING_DEGREES: f64 = 10.0;

/// Default outer radius of the ring.
pub const DEFAULT_OUTER_RADIUS: f64 = 80.0;

/// Default padding between the ring and the centered image layer.
pub const DEFAULT_INNER_PADDING: f64 = 10.0;

/// Default stroke width of each segment.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Default flat paint for seen segments (`#25D366`).
pub const DEFAULT_SEEN_COLOR: Color = Color::from_rgb8(0x25, 0xd3, 0x66);

/// Default flat paint for unseen segments (`#808080`).
pub const DEFAULT_UNSEEN_COLOR: Color = Color::from_rgb8(0x80, 0x80, 0x80);

/// A two-stop linear gradient descriptor.
///
/// Rendering surfaces place `start` at the 0% stop and `end` at the 100%
/// stop along a horizontal axis. Each gradient is defined once per ring and
/// shared by every segment that references it, never restated per segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientDesc {
    /// Color at the 0% stop.
    pub start: Color,
    /// Color at the 100% stop.
    pub end: Color,
}

impl GradientDesc {
    /// Creates a gradient descriptor from its two stops.
    #[inline]
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }
}

/// Input record for one ring layout evaluation.
///
/// A config is immutable per evaluation: [`layout`](crate::layout) reads it,
/// produces descriptors, and retains nothing. Segment paints are resolved
/// from the flat colors unless *both* gradients are set, in which case every
/// segment references one of the two shared gradient definitions instead.
#[derive(Clone, Debug, PartialEq)]
pub struct RingConfig {
    /// Number of arc segments. Must be at least 1.
    pub count: u32,
    /// Number of leading segments marked as seen. Values above `count` are
    /// clamped during layout.
    pub seen_count: u32,
    /// Angular gap inserted between adjacent segments, in degrees.
    pub spacing_degrees: f64,
    /// Outer radius of the ring.
    pub outer_radius: f64,
    /// Stroke width of each segment.
    pub stroke_width: f64,
    /// Padding between the ring and the centered image layer.
    pub inner_padding: f64,
    /// Flat paint for seen segments.
    pub seen_color: Color,
    /// Flat paint for unseen segments.
    pub unseen_color: Color,
    /// Optional gradient paint for seen segments.
    pub seen_gradient: Option<GradientDesc>,
    /// Optional gradient paint for unseen segments.
    pub unseen_gradient: Option<GradientDesc>,
}

impl RingConfig {
    /// Creates a config for `count` segments with a seen prefix of
    /// `seen_count`, every other field at its default.
    #[must_use]
    pub fn new(count: u32, seen_count: u32) -> Self {
        Self {
            count,
            seen_count,
            spacing_degrees: DEFAULT_SPACING_DEGREES,
            outer_radius: DEFAULT_OUTER_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            inner_padding: DEFAULT_INNER_PADDING,
            seen_color: DEFAULT_SEEN_COLOR,
            unseen_color: DEFAULT_UNSEEN_COLOR,
            seen_gradient: None,
            unseen_gradient: None,
        }
    }

    /// Sets the angular gap between adjacent segments, in degrees.
    #[inline]
    #[must_use]
    pub fn with_spacing_degrees(mut self, spacing_degrees: f64) -> Self {
        self.spacing_degrees = spacing_degrees;
        self
    }

    /// Sets the outer radius of the ring.
    #[inline]
    #[must_use]
    pub fn with_outer_radius(mut self, outer_radius: f64) -> Self {
        self.outer_radius = outer_radius;
        self
    }

    /// Sets the stroke width of each segment.
    #[inline]
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the padding between the ring and the centered image layer.
    #[inline]
    #[must_use]
    pub fn with_inner_padding(mut self, inner_padding: f64) -> Self {
        self.inner_padding = inner_padding;
        self
    }

    /// Sets the flat seen/unseen paints.
    #[inline]
    #[must_use]
    pub fn with_colors(mut self, seen: Color, unseen: Color) -> Self {
        self.seen_color = seen;
        self.unseen_color = unseen;
        self
    }

    /// Sets both gradient paints.
    ///
    /// Segment paints resolve to gradient references only when both are
    /// present; a lone gradient leaves the flat colors in effect.
    #[inline]
    #[must_use]
    pub fn with_gradients(mut self, seen: GradientDesc, unseen: GradientDesc) -> Self {
        self.seen_gradient = Some(seen);
        self.unseen_gradient = Some(unseen);
        self
    }

    /// Checks the config for geometric validity.
    ///
    /// [`layout`](crate::layout) performs the same checks before producing
    /// any descriptors; this is exposed so hosts can validate input at the
    /// edge where it arrives.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroSegments);
        }
        if !self.outer_radius.is_finite() || self.outer_radius <= 0.0 {
            return Err(ConfigError::NonPositiveOuterRadius {
                outer_radius: self.outer_radius,
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::NonPositiveStrokeWidth {
                stroke_width: self.stroke_width,
            });
        }
        if !self.spacing_degrees.is_finite() || self.spacing_degrees < 0.0 {
            return Err(ConfigError::NegativeSpacing {
                spacing_degrees: self.spacing_degrees,
            });
        }
        if !self.inner_padding.is_finite() || self.inner_padding < 0.0 {
            return Err(ConfigError::NegativePadding {
                inner_padding: self.inner_padding,
            });
        }
        if self.stroke_width >= self.outer_radius * 2.0 {
            return Err(ConfigError::StrokeExceedsDiameter {
                stroke_width: self.stroke_width,
                outer_radius: self.outer_radius,
            });
        }
        if self.count > 1 {
            let angle_per_arc = 360.0 / f64::from(self.count) - self.spacing_degrees;
            if angle_per_arc <= 0.0 {
                return Err(ConfigError::DegenerateSweep { angle_per_arc });
            }
        }
        Ok(())
    }
}

impl Default for RingConfig {
    #[inline]
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = RingConfig::default();
        assert_eq!(config.count, 1);
        assert_eq!(config.seen_count, 0);
        assert_eq!(config.spacing_degrees, 10.0);
        assert_eq!(config.outer_radius, 80.0);
        assert_eq!(config.stroke_width, 5.0);
        assert_eq!(config.inner_padding, 10.0);
        let seen = config.seen_color.to_rgba8();
        assert_eq!((seen.r, seen.g, seen.b, seen.a), (0x25, 0xd3, 0x66, 0xff));
        let unseen = config.unseen_color.to_rgba8();
        assert_eq!((unseen.r, unseen.g, unseen.b, unseen.a), (0x80, 0x80, 0x80, 0xff));
        assert!(config.seen_gradient.is_none());
        assert!(config.unseen_gradient.is_none());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_each_degenerate_field() {
        let ok = RingConfig::new(4, 2);
        assert_eq!(ok.validate(), Ok(()));

        assert_eq!(
            RingConfig::new(0, 0).validate(),
            Err(ConfigError::ZeroSegments)
        );
        assert!(matches!(
            ok.clone().with_outer_radius(0.0).validate(),
            Err(ConfigError::NonPositiveOuterRadius { .. })
        ));
        assert!(matches!(
            ok.clone().with_outer_radius(f64::NAN).validate(),
            Err(ConfigError::NonPositiveOuterRadius { .. })
        ));
        assert!(matches!(
            ok.clone().with_stroke_width(-1.0).validate(),
            Err(ConfigError::NonPositiveStrokeWidth { .. })
        ));
        assert!(matches!(
            ok.clone().with_spacing_degrees(-0.5).validate(),
            Err(ConfigError::NegativeSpacing { .. })
        ));
        assert!(matches!(
            ok.clone().with_inner_padding(-2.0).validate(),
            Err(ConfigError::NegativePadding { .. })
        ));
        assert!(matches!(
            ok.clone().with_outer_radius(4.0).with_stroke_width(8.0).validate(),
            Err(ConfigError::StrokeExceedsDiameter { .. })
        ));
    }

    #[test]
    fn validate_rejects_spacing_that_consumes_the_sweep() {
        // 360 / 4 = 90 degrees per segment before spacing.
        let at_limit = RingConfig::new(4, 0).with_spacing_degrees(90.0);
        assert!(matches!(
            at_limit.validate(),
            Err(ConfigError::DegenerateSweep { .. })
        ));

        // A single segment ignores spacing entirely.
        let single = RingConfig::new(1, 0).with_spacing_degrees(720.0);
        assert_eq!(single.validate(), Ok(()));
    }
}
