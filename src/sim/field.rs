//! The particle field: a fixed set of particles inside resizable bounds
//!
//! All state the animation needs lives here; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::connection::{Connection, connections};
use super::particle::Particle;
use crate::config::FieldConfig;

/// Fixed-size particle collection plus the bounds it bounces inside
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    config: FieldConfig,
    /// Number of steps taken
    pub frame: u64,
}

impl ParticleField {
    /// Spawn `config.particle_count` particles uniformly inside `width × height`
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Vec2::new(width, height);
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, bounds, &config))
            .collect();

        Self::with_particles(config, width, height, particles)
    }

    /// Field with explicit particles (the count in `config` is ignored)
    pub fn with_particles(
        config: FieldConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            bounds: Vec2::new(width, height),
            config,
            frame: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.bounds.x
    }

    pub fn height(&self) -> f32 {
        self.bounds.y
    }

    /// Change the bounds only; particles keep their position and velocity
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// Advance every particle one frame
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.step(self.bounds);
        }
        self.frame += 1;
    }

    /// Lines between nearby pairs at the current positions
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        connections(
            &self.particles,
            self.config.connection_distance,
            self.config.connection_max_opacity,
        )
    }
}
