//! NYX Backdrop - animated particle network behind a web page
//!
//! Core modules:
//! - `sim`: Deterministic particle simulation (movement, reflection, connections)
//! - `renderer`: Frame composition over a `DrawTarget` (Canvas 2D on the web)
//! - `platform`: Browser glue (canvas mount, resize, animation-frame loop)
//! - `config`: Field configuration with defaults and JSON overrides

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::FieldConfig;
pub use error::FieldError;

use glam::Vec2;

/// Field configuration defaults
pub mod consts {
    /// Number of particles in the field
    pub const PARTICLE_COUNT: usize = 50;
    /// Connections are O(n²) per frame; beyond this a frame no longer fits
    pub const MAX_PARTICLE_COUNT: usize = 1000;
    /// Maximum speed per axis (units per frame)
    pub const MAX_SPEED: f32 = 0.5;
    /// Particle radius upper bound (exclusive)
    pub const MAX_RADIUS: f32 = 1.5;
    /// Particle opacity range
    pub const MIN_OPACITY: f32 = 0.2;
    pub const MAX_OPACITY: f32 = 0.7;

    /// Pairs closer than this get a connecting line
    pub const CONNECTION_DISTANCE: f32 = 150.0;
    /// Line opacity at zero distance
    pub const CONNECTION_MAX_OPACITY: f32 = 0.2;
    pub const LINE_WIDTH: f32 = 1.0;

    /// Matrix green
    pub const COLOR: [u8; 3] = [0, 255, 0];

    /// Seed used when nothing better is available (native runs)
    pub const DEFAULT_SEED: u64 = 0x4e59_5800;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Squared distance is enough for the cutoff; only pairs that pass need the root
#[inline]
pub fn within(a: Vec2, b: Vec2, max_dist: f32) -> Option<f32> {
    let d2 = a.distance_squared(b);
    if d2 < max_dist * max_dist {
        Some(d2.sqrt())
    } else {
        None
    }
}
