// Copyright 2026 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ringlet_svg --heading-base-level=0

//! SVG rendering surface for the ringlet arc layout engine.
//!
//! This crate turns the descriptors produced by [`ringlet_layout`] into a
//! standalone SVG document: one stroked `<path>` per segment, the two shared
//! gradient definitions when configured, and a centered, clipped image layer
//! inside the ring.
//!
//! The component-level contract lives here rather than in the layout engine:
//! - Geometry errors ([`ConfigError`]) indicate a programming error at the
//!   call site and surface as `Err`.
//! - A missing image reference is a host misconfiguration, not a geometry
//!   error: it is reported through the [`log`] facade and the component
//!   renders nothing, keeping the host alive.
//!
//! # Example
//!
//! ```rust
//! use ringlet_layout::RingConfig;
//! use ringlet_svg::{ImageSource, RingSvg};
//!
//! let ring = RingSvg::new(RingConfig::new(4, 2), ImageSource::new("avatar.png"));
//! let svg = ring.render().unwrap().expect("image source is set");
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<path").count(), 4);
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use peniko::Color;
use ringlet_layout::{
    ArcPath, ConfigError, GradientDesc, GradientRef, PaintRef, RingConfig, RingLayout, layout,
};

/// Opaque reference to the center image, typically a URL or asset href.
///
/// The writer never interprets the value; it lands (escaped) in the
/// `<image href>` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource(pub String);

impl ImageSource {
    /// Creates an image source from an opaque href.
    #[inline]
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    /// Returns the href as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Component-level inputs for rendering one status ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSvg {
    /// Ring configuration handed to the layout engine.
    pub config: RingConfig,
    /// Center image reference. Required; rendering refuses (softly)
    /// without it.
    pub image: Option<ImageSource>,
    /// Opaque style text passed through unmodified to the root `<svg>`
    /// element's `style` attribute.
    pub container_style: Option<String>,
}

impl RingSvg {
    /// Creates a ring with the given config and image source.
    #[inline]
    pub fn new(config: RingConfig, image: ImageSource) -> Self {
        Self {
            config,
            image: Some(image),
            container_style: None,
        }
    }

    /// Sets the pass-through container style.
    #[inline]
    #[must_use]
    pub fn with_container_style(mut self, style: impl Into<String>) -> Self {
        self.container_style = Some(style.into());
        self
    }

    /// Renders the ring into a standalone SVG document.
    ///
    /// Returns `Ok(None)` without rendering when the image reference is
    /// absent; the condition is reported via [`log::error!`] since it is a
    /// host misconfiguration rather than a geometry error. Invalid geometry
    /// is never swallowed and always surfaces as `Err`, image or not.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the layout engine.
    pub fn render(&self) -> Result<Option<String>, ConfigError> {
        let ring = layout(&self.config)?;
        let Some(image) = &self.image else {
            log::error!("status ring not rendered: image source is missing");
            return Ok(None);
        };
        Ok(Some(render_document(
            &self.config,
            &ring,
            image,
            self.container_style.as_deref(),
        )))
    }
}

/// Centered square the image layer occupies, plus its corner radius.
#[derive(Copy, Clone, Debug)]
struct ImageLayer {
    origin: f64,
    side: f64,
    corner_radius: f64,
}

fn image_layer(config: &RingConfig, total_size: f64) -> Option<ImageLayer> {
    let inset = config.outer_radius - config.inner_padding;
    if inset <= 0.0 {
        return None;
    }
    let side = inset * 2.0;
    Some(ImageLayer {
        origin: (total_size - side) / 2.0,
        side,
        corner_radius: inset,
    })
}

fn render_document(
    config: &RingConfig,
    ring: &RingLayout,
    image: &ImageSource,
    container_style: Option<&str>,
) -> String {
    let size = fmt_f64(ring.geometry.total_size);

    let mut defs = String::new();
    if let Some(gradients) = &ring.gradients {
        write_gradient_def(&mut defs, GradientRef::Seen, &gradients.seen);
        write_gradient_def(&mut defs, GradientRef::Unseen, &gradients.unseen);
    }

    let layer = image_layer(config, ring.geometry.total_size);
    if let Some(layer) = layer {
        write_image_clip_def(&mut defs, layer);
    } else {
        log::warn!(
            "status ring image layer omitted: inner padding {} consumes outer radius {}",
            config.inner_padding,
            config.outer_radius
        );
    }

    let mut body = String::new();
    for segment in &ring.segments {
        write_arc(&mut body, &segment.path, &segment.paint, config.stroke_width);
    }
    if let Some(layer) = layer {
        write_image(&mut body, image, layer);
    }

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\""
    );
    if let Some(style) = container_style {
        svg.push_str(" style=\"");
        push_escaped(&mut svg, style);
        svg.push('"');
    }
    svg.push('>');
    if !defs.is_empty() {
        svg.push_str("<defs>");
        svg.push_str(&defs);
        svg.push_str("</defs>");
    }
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn write_gradient_def(defs: &mut String, gradient: GradientRef, desc: &GradientDesc) {
    let _ = write!(
        defs,
        "<linearGradient id=\"{}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">",
        gradient.id()
    );
    write_stop(defs, "0%", desc.start);
    write_stop(defs, "100%", desc.end);
    defs.push_str("</linearGradient>");
}

fn write_stop(defs: &mut String, offset: &str, color: Color) {
    let (rgb, a) = color_to_svg(color);
    let _ = write!(defs, "<stop offset=\"{offset}\" stop-color=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(defs, " stop-opacity=\"{}\"", fmt_f32(a));
    }
    defs.push_str("/>");
}

fn write_image_clip_def(defs: &mut String, layer: ImageLayer) {
    let _ = write!(
        defs,
        "<clipPath id=\"imageClip\"><rect x=\"{0}\" y=\"{0}\" width=\"{1}\" height=\"{1}\" rx=\"{2}\" ry=\"{2}\"/></clipPath>",
        fmt_f64(layer.origin),
        fmt_f64(layer.side),
        fmt_f64(layer.corner_radius),
    );
}

fn write_arc(out: &mut String, path: &ArcPath, paint: &PaintRef, stroke_width: f64) {
    let large_arc = i32::from(path.large_arc);
    let _ = write!(
        out,
        "<path d=\"M{} {}A{2} {2} 0 {3} 1 {4} {5}\" fill=\"none\"",
        fmt_f64(path.start.x),
        fmt_f64(path.start.y),
        fmt_f64(path.radius),
        large_arc,
        fmt_f64(path.end.x),
        fmt_f64(path.end.y),
    );
    match paint {
        PaintRef::Solid(color) => {
            let (rgb, a) = color_to_svg(*color);
            let _ = write!(out, " stroke=\"{rgb}\"");
            if a < 1.0 {
                let _ = write!(out, " stroke-opacity=\"{}\"", fmt_f32(a));
            }
        }
        PaintRef::Gradient(gradient) => {
            let _ = write!(out, " stroke=\"url(#{})\"", gradient.id());
        }
    }
    let _ = write!(
        out,
        " stroke-width=\"{}\" stroke-linecap=\"round\"/>",
        fmt_f64(stroke_width)
    );
}

fn write_image(out: &mut String, image: &ImageSource, layer: ImageLayer) {
    out.push_str("<image href=\"");
    push_escaped(out, image.as_str());
    let _ = write!(
        out,
        "\" x=\"{0}\" y=\"{0}\" width=\"{1}\" height=\"{1}\" clip-path=\"url(#imageClip)\" preserveAspectRatio=\"xMidYMid slice\"/>",
        fmt_f64(layer.origin),
        fmt_f64(layer.side),
    );
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for downstream diffing.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{:.3}", v);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

fn fmt_f32(v: f32) -> String {
    fmt_f64(f64::from(v))
}
