//! Particle field configuration
//!
//! Defaults reproduce the stock page. A host page can override any field with
//! a JSON object in `<body data-particle-config='{...}'>`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::FieldError;

/// Particle field settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles (fixed for the lifetime of the field)
    pub particle_count: usize,
    /// Maximum initial speed per axis, units per frame
    pub max_speed: f32,
    /// Upper bound for the random particle radius
    pub max_radius: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,

    // === Connections ===
    /// Pairs closer than this are joined by a line
    pub connection_distance: f32,
    /// Line opacity at zero distance (fades linearly to 0 at the cutoff)
    pub connection_max_opacity: f32,
    pub line_width: f32,

    /// RGB shared by particles and lines
    pub color: [u8; 3],

    // === Accessibility ===
    /// Draw one still frame when the user prefers reduced motion
    pub respect_reduced_motion: bool,

    /// RNG seed; the browser falls back to the clock when unset
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            max_speed: MAX_SPEED,
            max_radius: MAX_RADIUS,
            min_opacity: MIN_OPACITY,
            max_opacity: MAX_OPACITY,

            connection_distance: CONNECTION_DISTANCE,
            connection_max_opacity: CONNECTION_MAX_OPACITY,
            line_width: LINE_WIDTH,

            color: COLOR,

            respect_reduced_motion: false,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Body attribute holding JSON overrides
    pub const ATTRIBUTE: &'static str = "data-particle-config";

    /// Parse overrides; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        let floats = [
            ("max_speed", self.max_speed),
            ("max_radius", self.max_radius),
            ("min_opacity", self.min_opacity),
            ("max_opacity", self.max_opacity),
            ("connection_distance", self.connection_distance),
            ("connection_max_opacity", self.connection_max_opacity),
            ("line_width", self.line_width),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(invalid(format!(
                "particle_count {} is above the limit of {MAX_PARTICLE_COUNT}",
                self.particle_count
            )));
        }
        if self.max_speed < 0.0 {
            return Err(invalid("max_speed must not be negative"));
        }
        if self.max_radius < 0.0 {
            return Err(invalid("max_radius must not be negative"));
        }
        for (name, v) in [
            ("min_opacity", self.min_opacity),
            ("max_opacity", self.max_opacity),
            ("connection_max_opacity", self.connection_max_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(invalid(format!("{name} must be within [0, 1], got {v}")));
            }
        }
        if self.min_opacity > self.max_opacity {
            return Err(invalid("min_opacity is above max_opacity"));
        }
        if self.connection_distance <= 0.0 {
            return Err(invalid("connection_distance must be positive"));
        }
        if self.line_width <= 0.0 {
            return Err(invalid("line_width must be positive"));
        }
        Ok(())
    }

    /// Read overrides from the document body (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute(Self::ATTRIBUTE));

        let Some(json) = json else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded particle config from {}", Self::ATTRIBUTE);
                config
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}", Self::ATTRIBUTE);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn invalid(msg: impl Into<String>) -> FieldError {
    FieldError::InvalidConfig(msg.into())
}
