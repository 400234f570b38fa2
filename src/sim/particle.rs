//! A single drifting point

use glam::Vec2;
use rand::Rng;

use crate::config::FieldConfig;
use crate::lerp;

/// A particle in the background field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    /// Random particle inside `bounds`, with radius/opacity/speed drawn from `config`
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2, config: &FieldConfig) -> Self {
        // Draw as a unit sample and scale, so empty ranges (e.g. max_speed 0) never panic
        let pos = Vec2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y);
        let vel = Vec2::new(
            lerp(-config.max_speed, config.max_speed, rng.random()),
            lerp(-config.max_speed, config.max_speed, rng.random()),
        );
        let radius = rng.random::<f32>() * config.max_radius;
        let opacity = lerp(config.min_opacity, config.max_opacity, rng.random());
        Self::new(pos, vel, radius, opacity)
    }

    /// Move one frame, then turn back any axis that left `[0, bounds]`.
    ///
    /// Position is not clamped, so it may sit outside by up to one step.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        self.vel.x = reflect(self.pos.x, self.vel.x, bounds.x);
        self.vel.y = reflect(self.pos.y, self.vel.y, bounds.y);
    }
}

/// Velocity component after a boundary check on one axis.
///
/// Outside the range the component points back inside. For a particle that
/// crossed from inside this equals negating it; only a particle stranded
/// outside by a shrinking resize sees a difference (no flip-flopping).
#[inline]
pub fn reflect(pos: f32, vel: f32, max: f32) -> f32 {
    if pos < 0.0 {
        vel.abs()
    } else if pos > max {
        -vel.abs()
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_step_moves_by_velocity() {
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::new(0.25, -0.5), 1.0, 0.5);
        p.step(BOUNDS);
        assert_eq!(p.pos, Vec2::new(100.25, 99.5));
        assert_eq!(p.vel, Vec2::new(0.25, -0.5));
    }

    #[test]
    fn test_reflect_on_crossing_right_edge() {
        // Crosses on this step, flips on this step
        let mut p = Particle::new(Vec2::new(BOUNDS.x - 0.1, 10.0), Vec2::new(0.5, 0.0), 1.0, 0.5);
        p.step(BOUNDS);
        assert!(p.pos.x > BOUNDS.x);
        assert!((p.pos.x - (BOUNDS.x + 0.4)).abs() < 1e-3, "position is not clamped");
        assert_eq!(p.vel.x, -0.5);

        // Next step brings it back inside
        p.step(BOUNDS);
        assert!(p.pos.x <= BOUNDS.x);
        assert_eq!(p.vel.x, -0.5);
    }

    #[test]
    fn test_reflect_from_edge() {
        let mut p = Particle::new(Vec2::new(BOUNDS.x, 300.0), Vec2::new(0.3, 0.0), 1.0, 0.5);
        p.step(BOUNDS);
        assert_eq!(p.vel.x, -0.3);
    }

    #[test]
    fn test_reflect_top_and_left() {
        let mut p = Particle::new(Vec2::new(0.2, 0.1), Vec2::new(-0.4, -0.3), 1.0, 0.5);
        p.step(BOUNDS);
        assert!(p.pos.x < 0.0 && p.pos.y < 0.0);
        assert_eq!(p.vel, Vec2::new(0.4, 0.3));
    }

    #[test]
    fn test_crossing_from_inside_is_negation() {
        for vel in [0.1f32, 0.3, 0.5] {
            assert_eq!(reflect(100.0 + vel, vel, 100.0), -vel);
            assert_eq!(reflect(-vel, -vel, 100.0), vel);
        }
    }

    #[test]
    fn test_on_boundary_is_inside() {
        // Exactly on the edge is still in range
        assert_eq!(reflect(0.0, -0.5, 100.0), -0.5);
        assert_eq!(reflect(100.0, 0.5, 100.0), 0.5);
    }

    #[test]
    fn test_outside_after_shrink_heads_back() {
        // Left outside by a resize, already moving inward: keep going
        let bounds = Vec2::new(300.0, 300.0);
        let mut p = Particle::new(Vec2::new(500.0, 100.0), Vec2::new(-0.5, 0.0), 1.0, 0.5);
        for _ in 0..10 {
            p.step(bounds);
            assert_eq!(p.vel.x, -0.5);
        }
        assert!((p.pos.x - 495.0).abs() < 1e-3);
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let config = FieldConfig::default();
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, BOUNDS, &config);
            assert!((0.0..=BOUNDS.x).contains(&p.pos.x));
            assert!((0.0..=BOUNDS.y).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= 0.5 && p.vel.y.abs() <= 0.5);
            assert!((0.0..=1.5).contains(&p.radius));
            assert!((0.2..=0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn test_spawn_zero_speed() {
        let mut rng = Pcg32::seed_from_u64(7);
        let config = FieldConfig {
            max_speed: 0.0,
            ..Default::default()
        };
        let p = Particle::spawn(&mut rng, BOUNDS, &config);
        assert_eq!(p.vel, Vec2::ZERO);
    }
}
