// SPDX-License-Identifier: MPL-2.0
//! Tuning knobs for the particle simulation and its two presets.

use crate::config::defaults::{
    DEFAULT_CONNECTION_DISTANCE, DEFAULT_DAMPING, DEFAULT_INITIAL_SPEED, DEFAULT_PARTICLE_COUNT,
    DEFAULT_POINTER_RADIUS, DEFAULT_POINTER_STRENGTH, MAX_PARTICLE_COUNT,
};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Named simulation tunings selectable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Pointer-reactive field with damping.
    #[default]
    Field,
    /// Quieter drifting network: no pointer attraction, no damping.
    Network,
}

/// Pointer attraction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    /// Particles closer than this to the pointer are pulled toward it.
    pub radius: f32,
    /// Impulse at zero distance; falls off linearly to zero at `radius`.
    pub strength: f32,
}

/// Full simulation and rendering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    /// Maximum absolute initial velocity per axis.
    pub speed: f32,
    pub attraction: Option<Attraction>,
    /// Velocity multiplier applied every frame.
    pub damping: f32,
    pub connection_distance: f32,
    /// Alpha of a connection between two coincident particles.
    pub connection_alpha: f32,
    pub particle_color: Color,
    /// Connection color; its alpha is replaced per line.
    pub connection_color: Color,
    pub line_width: f32,
}

const ACCENT: Color = Color::from_rgb(0.0, 1.0, 128.0 / 255.0);

impl ParticleConfig {
    /// Pointer-reactive field.
    #[must_use]
    pub fn field() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            size_min: 1.0,
            size_max: 3.0,
            speed: DEFAULT_INITIAL_SPEED,
            attraction: Some(Attraction {
                radius: DEFAULT_POINTER_RADIUS,
                strength: DEFAULT_POINTER_STRENGTH,
            }),
            damping: DEFAULT_DAMPING,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            connection_alpha: 0.3,
            particle_color: Color { a: 0.5, ..ACCENT },
            connection_color: ACCENT,
            line_width: 0.5,
        }
    }

    /// Background network: smaller dots, no pointer, no damping.
    #[must_use]
    pub fn network() -> Self {
        Self {
            size_min: 0.0,
            size_max: 2.0,
            attraction: None,
            damping: 1.0,
            connection_alpha: 0.1,
            particle_color: Color { a: 0.2, ..ACCENT },
            ..Self::field()
        }
    }

    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Field => Self::field(),
            Preset::Network => Self::network(),
        }
    }

    /// Overrides the particle count, capped at [`MAX_PARTICLE_COUNT`].
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.min(MAX_PARTICLE_COUNT);
        self
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self::field()
    }
}
