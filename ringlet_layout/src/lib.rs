// Copyright 2026 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ringlet Layout: arc layout engine for segmented status rings.
//!
//! This crate computes the geometry of a circular "status ring": a fixed
//! number of arc segments laid out evenly around a circle, separated by an
//! angular gap, with a leading prefix of segments marked as seen. It maps a
//! [`RingConfig`] to an ordered sequence of drawable [`ArcSegment`]s plus the
//! derived [`RingGeometry`], and nothing else.
//!
//! # Position in the stack
//!
//! The engine is the producer half of a producer/consumer split:
//!
//! - **Layout engine (this crate)**: pure geometry. Start angles, sweep
//!   angles, Cartesian endpoints, large-arc flags, and per-segment paint
//!   resolution, expressed as plain‑old‑data descriptors.
//! - **Rendering surfaces**: consumers such as `ringlet_svg` that turn the
//!   descriptors into a concrete drawing (an SVG document, a canvas, a GPU
//!   scene). The engine knows nothing about them.
//!
//! There is no internal state and no render loop: the host re-invokes
//! [`layout`] whenever any input changes and discards the previous output.
//!
//! # Example
//!
//! ```rust
//! use ringlet_layout::{layout, PaintRef, RingConfig};
//!
//! // Four segments, the first two seen, all other fields at their defaults.
//! let config = RingConfig::new(4, 2);
//! let ring = layout(&config).unwrap();
//!
//! assert_eq!(ring.segments.len(), 4);
//! // Segments start at 12 o'clock and proceed clockwise.
//! assert_eq!(ring.segments[0].path.start_angle, -90.0);
//! // The seen prefix resolves to the seen paint.
//! assert!(ring.segments[0].is_seen);
//! assert!(matches!(ring.segments[0].paint, PaintRef::Solid(_)));
//! // The square bounding box includes the stroke on both sides.
//! assert_eq!(ring.geometry.total_size, 165.0);
//! ```
//!
//! # Design notes
//!
//! - [`layout`] is a pure function: identical input yields bit-identical
//!   output, in `O(count)` time and space.
//! - Geometrically invalid configurations are rejected with a
//!   [`ConfigError`] rather than silently producing degenerate paths.
//! - A single-segment ring sweeps `360 − ε` degrees
//!   ([`CLOSED_RING_EPSILON_DEG`]) so its endpoints never coincide.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod arc;
mod config;
mod error;
mod layout;

pub use arc::{ArcPath, ArcSegment, GradientRef, PaintRef};
pub use config::{
    DEFAULT_INNER_PADDING, DEFAULT_OUTER_RADIUS, DEFAULT_SEEN_COLOR, DEFAULT_SPACING_DEGREES,
    DEFAULT_STROKE_WIDTH, DEFAULT_UNSEEN_COLOR, GradientDesc, RingConfig,
};
pub use error::ConfigError;
pub use layout::{CLOSED_RING_EPSILON_DEG, GradientDefs, RingGeometry, RingLayout, layout};
