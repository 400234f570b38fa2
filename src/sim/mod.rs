//! Deterministic particle simulation
//!
//! Pure and platform-free:
//! - Frame-based steps (velocity is displacement per frame)
//! - Seeded RNG only
//! - Stable pair order for connections

pub mod connection;
pub mod field;
pub mod particle;

pub use connection::{Connection, connection_opacity, connections};
pub use field::ParticleField;
pub use particle::{Particle, reflect};
