//! Proximity lines between particles

use glam::Vec2;

use super::particle::Particle;
use crate::within;

/// A line to draw between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
    pub opacity: f32,
}

/// Line opacity for a pair `distance` apart.
///
/// `max_opacity` at 0, falling linearly to 0 at `max_distance` and beyond.
#[inline]
pub fn connection_opacity(distance: f32, max_distance: f32, max_opacity: f32) -> f32 {
    if distance >= max_distance {
        return 0.0;
    }
    max_opacity * (1.0 - distance.max(0.0) / max_distance)
}

/// Every unordered pair closer than `max_distance`, in `(i, j)` order with `i < j`.
///
/// O(n²) pair checks.
pub fn connections(
    particles: &[Particle],
    max_distance: f32,
    max_opacity: f32,
) -> impl Iterator<Item = Connection> + '_ {
    particles.iter().enumerate().flat_map(move |(i, a)| {
        particles[i + 1..].iter().filter_map(move |b| {
            within(a.pos, b.pos, max_distance).map(|distance| Connection {
                from: a.pos,
                to: b.pos,
                distance,
                opacity: connection_opacity(distance, max_distance, max_opacity),
            })
        })
    })
}
