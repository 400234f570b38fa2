//! Frame rendering
//!
//! The simulation knows nothing about drawing; a frame is composed here over
//! any `DrawTarget`. On the web that is the Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

pub use scene::{Mode, Scene};

use std::fmt;

use glam::Vec2;

use crate::sim::ParticleField;

/// Colour with alpha, formatted as a CSS `rgba()` string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn new([r, g, b]: [u8; 3], a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Minimal 2D drawing surface
pub trait DrawTarget {
    /// Wipe the whole `width × height` area
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// What one frame drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
}

/// Advance the field one frame and draw it
pub fn render_frame(field: &mut ParticleField, target: &mut impl DrawTarget) -> FrameStats {
    target.clear(field.width(), field.height());
    field.step();
    draw_field(field, target)
}

/// Draw the field as it is, without stepping (used for still frames)
pub fn draw_field(field: &ParticleField, target: &mut impl DrawTarget) -> FrameStats {
    let config = field.config();
    let mut stats = FrameStats::default();

    for p in field.particles() {
        target.fill_circle(p.pos, p.radius, Rgba::new(config.color, p.opacity));
        stats.particles += 1;
    }

    for line in field.connections() {
        target.stroke_line(
            line.from,
            line.to,
            config.line_width,
            Rgba::new(config.color, line.opacity),
        );
        stats.connections += 1;
    }

    stats
}
